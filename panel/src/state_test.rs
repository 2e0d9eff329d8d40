use super::*;

fn sample_prediction() -> Prediction {
    Prediction {
        predicted_label: "FAKE".to_owned(),
        message: "m".to_owned(),
        confidence: 0.87,
        scores: BTreeMap::from([("fake".to_owned(), 0.87), ("true".to_owned(), 0.13)]),
    }
}

fn pending_state(text: &str) -> PanelState {
    let mut state = PanelState::default();
    state.apply(PanelEvent::Edit(text.to_owned()));
    state.apply(PanelEvent::Submit);
    state
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn panel_state_default_is_idle_and_absent() {
    let state = PanelState::default();
    assert!(state.text.is_empty());
    assert_eq!(state.request, RequestState::Idle);
    assert_eq!(state.result, PredictionResult::Absent);
}

// =============================================================
// Edit
// =============================================================

#[test]
fn edit_replaces_text_only() {
    let mut state = PanelState::default();
    let effect = state.apply(PanelEvent::Edit("hello".to_owned()));
    assert_eq!(effect, Effect::None);
    assert_eq!(state.text, "hello");
    assert_eq!(state.request, RequestState::Idle);
}

#[test]
fn edit_while_pending_keeps_request_in_flight() {
    let mut state = pending_state("first");
    state.apply(PanelEvent::Edit("second".to_owned()));
    assert!(state.is_pending());
    assert_eq!(state.text, "second");
}

// =============================================================
// Submit
// =============================================================

#[test]
fn submit_blank_text_is_noop() {
    for text in ["", " ", "\t", "\n  \r\n", "\u{3000}"] {
        let mut state = PanelState::default();
        state.apply(PanelEvent::Edit(text.to_owned()));
        let before = state.clone();
        let effect = state.apply(PanelEvent::Submit);
        assert_eq!(effect, Effect::None, "text {text:?}");
        assert_eq!(state, before, "text {text:?}");
    }
}

#[test]
fn submit_blank_text_keeps_previous_result() {
    let mut state = pending_state("headline");
    state.apply(PanelEvent::Settled(Ok(sample_prediction())));
    state.apply(PanelEvent::Edit("   ".to_owned()));
    state.apply(PanelEvent::Submit);
    assert_eq!(state.result, PredictionResult::Success(sample_prediction()));
}

#[test]
fn submit_sends_untrimmed_text() {
    let mut state = PanelState::default();
    state.apply(PanelEvent::Edit("  breaking news \n".to_owned()));
    let effect = state.apply(PanelEvent::Submit);
    assert_eq!(
        effect,
        Effect::Request(PredictRequest {
            text: "  breaking news \n".to_owned()
        })
    );
}

#[test]
fn submit_moves_to_pending_and_clears_result() {
    let mut state = pending_state("one");
    state.apply(PanelEvent::Settled(Ok(sample_prediction())));
    assert!(state.result.prediction().is_some());

    state.apply(PanelEvent::Submit);
    assert_eq!(state.request, RequestState::Pending);
    assert_eq!(state.result, PredictionResult::Absent);
}

#[test]
fn submit_while_pending_is_ignored() {
    let mut state = pending_state("first");
    state.apply(PanelEvent::Edit("second".to_owned()));
    let before = state.clone();
    let effect = state.apply(PanelEvent::Submit);
    assert_eq!(effect, Effect::None);
    assert_eq!(state, before);
}

// =============================================================
// Settled
// =============================================================

#[test]
fn settled_ok_stores_success_and_returns_idle() {
    let mut state = pending_state("headline");
    let effect = state.apply(PanelEvent::Settled(Ok(sample_prediction())));
    assert_eq!(effect, Effect::None);
    assert_eq!(state.request, RequestState::Idle);
    assert_eq!(state.result, PredictionResult::Success(sample_prediction()));
}

#[test]
fn settled_err_collapses_to_fixed_failure() {
    let errors = [
        PredictError::Unreachable("connection refused".to_owned()),
        PredictError::Status(404),
        PredictError::Status(503),
        PredictError::Malformed("expected value".to_owned()),
    ];
    for err in errors {
        let mut state = pending_state("headline");
        state.apply(PanelEvent::Settled(Err(err)));
        assert_eq!(state.request, RequestState::Idle);
        assert_eq!(state.result, PredictionResult::failure());
    }
}

#[test]
fn settled_while_idle_is_ignored() {
    let mut state = PanelState::default();
    state.apply(PanelEvent::Settled(Ok(sample_prediction())));
    assert_eq!(state, PanelState::default());
}

#[test]
fn failure_shape_is_fixed() {
    let failure = PredictionResult::failure();
    assert!(failure.is_failure());
    let prediction = failure.prediction().unwrap();
    assert_eq!(prediction.predicted_label, FAILURE_LABEL);
    assert_eq!(prediction.message, FAILURE_MESSAGE);
    assert!(prediction.confidence.abs() < f64::EPSILON);
    assert!(prediction.scores.is_empty());
}

#[test]
fn absent_has_no_prediction() {
    assert!(PredictionResult::Absent.prediction().is_none());
    assert!(!PredictionResult::Absent.is_failure());
}
