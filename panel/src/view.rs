//! Render model derived from panel state.
//!
//! `render` is a pure function: front ends turn the returned `PanelView`
//! into HTML or terminal text without looking at `PanelState` directly.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use std::fmt;

use crate::classify::{LabelCategory, classify};
use crate::state::{PanelState, Prediction};

pub const TITLE: &str = "Fake News Detector";
pub const PLACEHOLDER: &str = "📰 Enter a news headline or article...";
pub const SUBMIT_LABEL: &str = "Check News";
pub const BUSY_LABEL: &str = "Checking...";
pub const CONFIDENCE_PREFIX: &str = "Confidence: ";
pub const SCORES_HEADING: &str = "🔍 Score Breakdown:";

/// Everything a front end needs to draw the panel.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelView {
    pub submit_label: &'static str,
    pub submit_disabled: bool,
    pub busy: bool,
    /// `None` when there is no result panel to show.
    pub result: Option<ResultView>,
}

/// The result panel.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultView {
    pub label: String,
    pub category: LabelCategory,
    pub message: String,
    /// Formatted percentage, present only for a positive confidence.
    pub confidence: Option<String>,
    /// Breakdown rows, highest score first. Empty means no breakdown section.
    pub scores: Vec<ScoreRow>,
}

/// One line of the score breakdown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreRow {
    pub label: String,
    pub percent: String,
}

impl fmt::Display for ScoreRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.percent)
    }
}

/// Derive the view for the current state.
#[must_use]
pub fn render(state: &PanelState) -> PanelView {
    let busy = state.is_pending();
    PanelView {
        submit_label: if busy { BUSY_LABEL } else { SUBMIT_LABEL },
        submit_disabled: busy,
        busy,
        result: state.result.prediction().map(result_view),
    }
}

fn result_view(prediction: &Prediction) -> ResultView {
    // NaN fails the comparison, so it is hidden like zero.
    let confidence = (prediction.confidence > 0.0).then(|| format_percent(prediction.confidence));
    ResultView {
        label: prediction.predicted_label.clone(),
        category: classify(&prediction.predicted_label),
        message: prediction.message.clone(),
        confidence,
        scores: score_rows(prediction),
    }
}

fn score_rows(prediction: &Prediction) -> Vec<ScoreRow> {
    let mut entries: Vec<(&String, f64)> = prediction.scores.iter().map(|(k, v)| (k, *v)).collect();
    entries.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    entries
        .into_iter()
        .map(|(label, score)| ScoreRow {
            label: label.clone(),
            percent: format_percent(score),
        })
        .collect()
}

/// Format a `[0, 1]` fraction as a percentage with two decimals.
#[must_use]
pub fn format_percent(fraction: f64) -> String {
    format!("{:.2}%", fraction * 100.0)
}
