use super::*;

#[test]
fn status_error_formats_code() {
    assert_eq!(ApiError::Status(404).to_string(), "server responded with status 404");
}

#[test]
fn transport_error_keeps_cause() {
    assert_eq!(
        ApiError::Transport("connection refused".to_owned()).to_string(),
        "request failed: connection refused"
    );
}

#[test]
fn decode_error_keeps_cause() {
    assert_eq!(
        ApiError::Decode("expected array".to_owned()).to_string(),
        "invalid response body: expected array"
    );
}
