//! Plain-text rendering of the panel view.

#[cfg(test)]
#[path = "terminal_test.rs"]
mod terminal_test;

use std::fmt::Write as _;

use panel::view::{BUSY_LABEL, CONFIDENCE_PREFIX, SCORES_HEADING};
use panel::{LabelCategory, PanelView, PredictError, PredictRequest, Prediction, Predictor};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

fn category_color(category: LabelCategory) -> &'static str {
    match category {
        LabelCategory::Fake => "\x1b[31m",
        LabelCategory::True => "\x1b[32m",
        LabelCategory::Neutral => "\x1b[33m",
    }
}

/// Render the result panel of `view` as terminal text.
///
/// Returns an empty string when there is no result to show. With `color`
/// set, the label is bold and colored by category.
#[must_use]
pub fn render_text(view: &PanelView, color: bool) -> String {
    let Some(result) = &view.result else {
        return String::new();
    };

    let mut out = String::new();
    if color {
        let _ = writeln!(out, "{BOLD}{}{}{RESET}", category_color(result.category), result.label);
    } else {
        let _ = writeln!(out, "{}", result.label);
    }
    let _ = writeln!(out, "{}", result.message);

    if let Some(confidence) = &result.confidence {
        let _ = writeln!(out, "{CONFIDENCE_PREFIX}{confidence}");
    }

    if !result.scores.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{SCORES_HEADING}");
        let width = result.scores.iter().map(|r| r.label.chars().count()).max().unwrap_or(0);
        for row in &result.scores {
            let _ = writeln!(out, "  {:<width$}  {}", format!("{}:", row.label), row.percent, width = width + 1);
        }
    }
    out
}

/// Predictor wrapper that prints the busy label to stderr before each call.
///
/// Only fires when the panel actually sends a request, so skipped
/// submissions stay silent.
pub struct BusyIndicator<'a, P> {
    inner: &'a P,
    enabled: bool,
}

impl<'a, P> BusyIndicator<'a, P> {
    pub fn new(inner: &'a P, enabled: bool) -> Self {
        Self { inner, enabled }
    }
}

impl<P: Predictor> Predictor for BusyIndicator<'_, P> {
    async fn predict(&self, request: &PredictRequest) -> Result<Prediction, PredictError> {
        if self.enabled {
            eprintln!("{BUSY_LABEL}");
        }
        self.inner.predict(request).await
    }
}
