//! UI components for the prediction panel.

pub mod prediction_form;
pub mod result_card;
