use super::*;
use crate::state::auth::SessionUser;

fn session(role: &str) -> AuthState {
    AuthState { user: Some(SessionUser { id: Some(12), role: role.to_owned(), ..SessionUser::default() }), loading: false }
}

#[test]
fn professor_with_valid_email_passes() {
    assert_eq!(
        validate_invitation(&session("profesor"), " alumno@uni.pe "),
        Ok((12, "alumno@uni.pe".to_owned()))
    );
}

#[test]
fn only_professors_may_invite() {
    assert_eq!(validate_invitation(&session("alumno"), "alumno@uni.pe"), Err(PROFESSORS_ONLY));
    assert_eq!(validate_invitation(&AuthState { user: None, loading: false }, "alumno@uni.pe"), Err(PROFESSORS_ONLY));
}

#[test]
fn malformed_email_is_rejected() {
    assert_eq!(validate_invitation(&session("Profesor"), "alumno@uni"), Err(INVALID_EMAIL));
}

#[test]
fn send_errors_map_to_messages() {
    assert_eq!(send_error_message(&ApiError::Rejected(Some("Ya invitado".to_owned()))), "Ya invitado");
    assert_eq!(send_error_message(&ApiError::Status { status: 500, message: None }), "Error al enviar la invitación");
    assert_eq!(send_error_message(&ApiError::Network("x".to_owned())), "Error de conexión. Inténtalo de nuevo.");
}
