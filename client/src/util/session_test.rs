use super::*;

#[test]
fn login_error_prefers_server_message() {
    let err = ApiError::Rejected(Some("Usuario bloqueado".to_owned()));
    assert_eq!(login_error_message(&err), "Usuario bloqueado");
}

#[test]
fn login_error_falls_back_to_invalid_credentials() {
    assert_eq!(login_error_message(&ApiError::Rejected(None)), "Credenciales inválidas");
    let err = ApiError::Status { status: 401, message: None };
    assert_eq!(login_error_message(&err), "Credenciales inválidas");
}

#[test]
fn login_error_reports_connection_failures() {
    let err = ApiError::Network("failed to fetch".to_owned());
    assert_eq!(login_error_message(&err), "Error de conexión con el servidor");
}

#[test]
fn session_key_matches_stored_entry() {
    assert_eq!(SESSION_KEY, "currentUser");
}

