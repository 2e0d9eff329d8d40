//! Maps a predicted label onto its display category.

#[cfg(test)]
#[path = "classify_test.rs"]
mod classify_test;

/// Display emphasis for a predicted label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LabelCategory {
    Fake,
    True,
    Neutral,
}

impl LabelCategory {
    /// Lowercase name, used for CSS modifiers and log fields.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fake => "fake",
            Self::True => "true",
            Self::Neutral => "neutral",
        }
    }
}

/// Classify a label by case-insensitive substring match.
///
/// "fake" wins over "true" when both appear.
#[must_use]
pub fn classify(label: &str) -> LabelCategory {
    let lower = label.to_lowercase();
    if lower.contains("fake") {
        LabelCategory::Fake
    } else if lower.contains("true") {
        LabelCategory::True
    } else {
        LabelCategory::Neutral
    }
}
