use super::*;

#[test]
fn lookup_errors() {
    assert_eq!(lookup_error_message(&ApiError::Rejected(None)), "Usuario no es un alumno");
    assert_eq!(lookup_error_message(&ApiError::Network("down".to_owned())), "Error al verificar usuario");
}

#[test]
fn load_errors() {
    assert_eq!(
        load_error_message(&ApiError::Status { status: 500, message: None }),
        "Error al cargar las secciones"
    );
    assert_eq!(load_error_message(&ApiError::Network("down".to_owned())), "Error de conexión con el servidor");
}

#[test]
fn students_default_to_the_next_academic_year() {
    assert!(crate::util::dates::ACADEMIC_YEARS.contains(&DEFAULT_STUDENT_YEAR));
}
