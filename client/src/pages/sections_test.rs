use super::*;
use crate::state::auth::SessionUser;

#[test]
fn generated_codes_have_four_digits() {
    for _ in 0..200 {
        let code = generate_section_code();
        assert!((1000..=9999).contains(&code), "code {code} out of range");
    }
}

#[test]
fn greeting_uppercases_given_names() {
    let auth = AuthState { user: Some(SessionUser { nombres: "Luis".to_owned(), ..SessionUser::default() }), loading: false };
    assert_eq!(greeting(&auth), "SALUDOS, LUIS");
    assert_eq!(greeting(&AuthState { user: None, loading: false }), "SALUDOS, USUARIO");
}

#[test]
fn delete_prompt_quotes_section_name() {
    let section = Section { id_seccion: 1, nombre_curso: "BASE DE DATOS II - G1".to_owned(), anio: 2025, codigo: None };
    assert_eq!(delete_prompt(&section), "¿Está seguro de eliminar la sección \"BASE DE DATOS II - G1\"?");
}

#[test]
fn load_errors_distinguish_network() {
    assert_eq!(load_error_message(&ApiError::Network("x".to_owned())), "Error de conexión con el servidor");
    assert_eq!(load_error_message(&ApiError::Status { status: 500, message: None }), "Error al cargar las secciones");
}

#[test]
fn mutation_errors_prefer_server_message() {
    let err = ApiError::Status { status: 403, message: Some("No autorizado".to_owned()) };
    assert_eq!(mutation_error_message(&err, "Error al eliminar la sección"), "No autorizado");
    let err = ApiError::Rejected(None);
    assert_eq!(mutation_error_message(&err, "Error al crear la sección"), "Error al crear la sección");
}
