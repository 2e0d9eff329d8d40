//! CSS class names derived from panel values.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use panel::LabelCategory;

/// Class list for the result label heading.
pub fn label_class(category: LabelCategory) -> &'static str {
    match category {
        LabelCategory::Fake => "result__label result__label--fake",
        LabelCategory::True => "result__label result__label--true",
        LabelCategory::Neutral => "result__label result__label--neutral",
    }
}
