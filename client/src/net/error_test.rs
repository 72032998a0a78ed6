use super::*;

#[test]
fn error_message_prefers_message_then_detail_then_error() {
    let body = serde_json::json!({ "error": "e", "detail": "d", "message": "m" });
    assert_eq!(error_message_from_body(&body).as_deref(), Some("m"));

    let body = serde_json::json!({ "error": "e", "detail": "d" });
    assert_eq!(error_message_from_body(&body).as_deref(), Some("d"));

    let body = serde_json::json!({ "error": "Correo ya registrado" });
    assert_eq!(error_message_from_body(&body).as_deref(), Some("Correo ya registrado"));
}

#[test]
fn error_message_skips_blank_and_non_string_values() {
    let body = serde_json::json!({ "message": "   ", "detail": 42, "error": "real" });
    assert_eq!(error_message_from_body(&body).as_deref(), Some("real"));
    assert_eq!(error_message_from_body(&serde_json::json!([])), None);
}

#[test]
fn server_message_reads_status_and_rejected() {
    let err = ApiError::Status { status: 404, message: Some("nope".to_owned()) };
    assert_eq!(err.server_message(), Some("nope"));
    assert_eq!(err.status(), Some(404));

    let err = ApiError::Rejected(Some("Usuario no encontrado".to_owned()));
    assert_eq!(err.server_message(), Some("Usuario no encontrado"));
    assert_eq!(err.status(), None);

    assert_eq!(ApiError::Network("offline".to_owned()).server_message(), None);
}

#[test]
fn display_includes_status_and_message() {
    let err = ApiError::Status { status: 500, message: None };
    assert_eq!(err.to_string(), "request failed (500): no details");
    assert!(ApiError::Network("x".to_owned()).is_network());
    assert!(!ApiError::Unavailable.is_network());
}
