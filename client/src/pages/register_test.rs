use super::*;

fn student_draft() -> RegisterDraft {
    RegisterDraft {
        nombres: "Ana".to_owned(),
        apellido_p: "Ruiz".to_owned(),
        apellido_m: "López".to_owned(),
        correo: " ana@uni.pe ".to_owned(),
        contrasena: "secreta123".to_owned(),
        repetir_contrasena: "secreta123".to_owned(),
        tipo: UserType::Estudiante,
        codigo_estudiante: "20231234".to_owned(),
    }
}

// =============================================================
// validate_registration
// =============================================================

#[test]
fn student_payload_carries_code() {
    let payload = validate_registration(&student_draft()).unwrap();
    assert_eq!(payload.tipo_usuario, "Estudiante");
    assert_eq!(payload.codigo_estudiante.as_deref(), Some("20231234"));
    assert_eq!(payload.correo, "ana@uni.pe");
    assert_eq!(payload.contrasena, "secreta123");
}

#[test]
fn professor_payload_has_null_code() {
    let mut draft = student_draft();
    draft.set_type(UserType::Profesor);
    let payload = validate_registration(&draft).unwrap();
    assert_eq!(payload.tipo_usuario, "Profesor");
    assert_eq!(payload.codigo_estudiante, None);
}

#[test]
fn mismatched_passwords_are_rejected_first() {
    let mut draft = student_draft();
    draft.repetir_contrasena = "otra".to_owned();
    draft.codigo_estudiante = "1".to_owned();
    assert_eq!(validate_registration(&draft), Err("Las contraseñas no coinciden."));
}

#[test]
fn student_code_must_have_eight_digits() {
    let mut draft = student_draft();
    draft.codigo_estudiante = "1234567".to_owned();
    assert_eq!(validate_registration(&draft), Err("El código de estudiante debe tener 8 dígitos."));
    draft.codigo_estudiante = String::new();
    assert_eq!(validate_registration(&draft), Err("El código de estudiante debe tener 8 dígitos."));
}

#[test]
fn switching_to_professor_clears_code_but_back_keeps_it_empty() {
    let mut draft = student_draft();
    draft.set_type(UserType::Profesor);
    assert!(draft.codigo_estudiante.is_empty());
    draft.set_type(UserType::Estudiante);
    assert!(draft.codigo_estudiante.is_empty());
}

// =============================================================
// register_error_message
// =============================================================

#[test]
fn http_error_uses_body_message_or_status_line() {
    let err = ApiError::Status { status: 409, message: Some("El correo ya está registrado".to_owned()) };
    assert_eq!(register_error_message(&err), "El correo ya está registrado");
    let err = ApiError::Status { status: 500, message: None };
    assert_eq!(register_error_message(&err), "Error 500: Ocurrió un problema con el registro.");
}

#[test]
fn network_error_asks_to_retry_later() {
    assert_eq!(
        register_error_message(&ApiError::Network("offline".to_owned())),
        "No se pudo conectar con el servidor. Inténtalo más tarde."
    );
}
