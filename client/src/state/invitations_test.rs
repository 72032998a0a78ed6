use super::*;

fn invitation(token: &str) -> Invitation {
    Invitation {
        id: Some(1),
        id_seccion: Some(3),
        token: token.to_owned(),
        correo: Some("alumno@uni.pe".to_owned()),
        nombre_curso: Some("Redes".to_owned()),
        nombre_profesor: Some("Ana".to_owned()),
        fecha_creacion: None,
        estado: Some("PENDIENTE".to_owned()),
    }
}

#[test]
fn remove_by_token_drops_only_matching_invitation() {
    let mut state = PendingInvitations { items: vec![invitation("a"), invitation("b")], ..PendingInvitations::default() };
    state.remove_by_token("a");
    assert_eq!(state.count(), 1);
    assert_eq!(state.items[0].token, "b");

    state.remove_by_token("missing");
    assert_eq!(state.count(), 1);
}

#[test]
fn decision_messages() {
    assert_eq!(Decision::Accept.success_message(), "Invitación aceptada correctamente");
    assert_eq!(Decision::Reject.success_message(), "Invitación rechazada");
}

#[test]
fn decision_error_prefers_server_message() {
    let err = ApiError::Status { status: 400, message: Some("Token expirado".to_owned()) };
    assert_eq!(Decision::Accept.error_message(&err), "Token expirado");
    assert_eq!(Decision::Reject.error_message(&ApiError::Rejected(None)), "Error al rechazar invitación");
    assert_eq!(Decision::Accept.error_message(&ApiError::Network("x".to_owned())), "Error de conexión. Inténtalo de nuevo.");
}

#[test]
fn load_error_message_falls_back() {
    assert_eq!(load_error_message(&ApiError::Rejected(None)), "Error al cargar invitaciones");
    assert_eq!(load_error_message(&ApiError::Network("x".to_owned())), "Error de conexión. Inténtalo de nuevo.");
}
