use super::*;

#[test]
fn decode_success_body() {
    let body = br#"{"predicted_label":"TRUE","message":"ok","confidence":0.6,"scores":{"true":0.6,"fake":0.4}}"#;
    let prediction = decode_response(200, body).unwrap();
    assert_eq!(prediction.predicted_label, "TRUE");
    assert_eq!(prediction.scores.len(), 2);
}

#[test]
fn decode_non_success_status_ignores_body() {
    let body = br#"{"predicted_label":"TRUE"}"#;
    assert_eq!(decode_response(500, body).unwrap_err(), PredictError::Status(500));
    assert_eq!(decode_response(404, b"").unwrap_err(), PredictError::Status(404));
    assert_eq!(decode_response(302, b"").unwrap_err(), PredictError::Status(302));
}

#[test]
fn decode_malformed_body() {
    let err = decode_response(200, b"<html></html>").unwrap_err();
    assert!(matches!(err, PredictError::Malformed(_)));
}

#[cfg(not(feature = "csr"))]
#[test]
fn native_predict_reports_unreachable() {
    let request = PredictRequest {
        text: "headline".to_owned(),
    };
    let err = futures::executor::block_on(predict(&request)).unwrap_err();
    assert!(matches!(err, PredictError::Unreachable(_)));
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_predictor_drives_submit_to_failure_natively() {
    let mut state = panel::PanelState::default();
    state.apply(panel::PanelEvent::Edit("headline".to_owned()));
    let outcome = futures::executor::block_on(panel::submit(&mut state, &BrowserPredictor));
    assert_eq!(outcome, panel::SubmitOutcome::Completed);
    assert!(!state.is_pending());
    assert!(state.result.is_failure());
}
