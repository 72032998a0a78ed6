use super::*;

fn user_with_role(role: &str) -> SessionUser {
    SessionUser { id: Some(1), role: role.to_owned(), nombres: "Ana".to_owned(), ..SessionUser::default() }
}

#[test]
fn role_parse_is_case_insensitive_with_student_alias() {
    assert_eq!(Role::parse("Profesor"), Some(Role::Profesor));
    assert_eq!(Role::parse(" ALUMNO "), Some(Role::Alumno));
    assert_eq!(Role::parse("estudiante"), Some(Role::Alumno));
    assert_eq!(Role::parse("admin"), None);
}

#[test]
fn from_login_joins_name_parts_and_uses_email_as_username() {
    let login = LoginUser {
        id_persona: Some(7),
        correo: "juan@uni.pe".to_owned(),
        tipo: "profesor".to_owned(),
        nombres: "Juan".to_owned(),
        apellido_p: "Pérez".to_owned(),
        apellido_m: "Soto".to_owned(),
    };
    let user = SessionUser::from_login(login, None);
    assert_eq!(user.id, Some(7));
    assert_eq!(user.username, "juan@uni.pe");
    assert_eq!(user.email, "juan@uni.pe");
    assert_eq!(user.name, "Juan Pérez Soto");
    assert_eq!(user.role(), Some(Role::Profesor));
    assert!(user.token.is_none());
}

#[test]
fn session_user_round_trips_through_storage_json() {
    let user = SessionUser { token: Some("t".to_owned()), ..user_with_role("alumno") };
    let raw = serde_json::to_string(&user).unwrap();
    assert!(raw.contains("\"apellidoP\""));
    let back: SessionUser = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, user);
}

#[test]
fn session_user_tolerates_partial_storage_json() {
    let user: SessionUser = serde_json::from_str(r#"{"id":3,"role":"profesor"}"#).unwrap();
    assert_eq!(user.id, Some(3));
    assert!(user.nombres.is_empty());
}

#[test]
fn greeting_name_uppercases_or_falls_back() {
    assert_eq!(user_with_role("alumno").greeting_name(), "ANA");
    assert_eq!(SessionUser::default().greeting_name(), "USUARIO");
}

#[test]
fn default_state_is_loading_without_user() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(state.user.is_none());
}

#[test]
fn has_role_compares_case_insensitively() {
    let state = AuthState { user: Some(user_with_role("Profesor")), loading: false };
    assert!(state.has_role("profesor"));
    assert!(!state.has_role("alumno"));
    assert!(!AuthState::default().has_role("profesor"));
}

#[test]
fn home_path_by_role() {
    let professor = AuthState { user: Some(user_with_role("profesor")), loading: false };
    let student = AuthState { user: Some(user_with_role("estudiante")), loading: false };
    let unknown = AuthState { user: Some(user_with_role("admin")), loading: false };
    assert_eq!(professor.home_path(), "/seccionesPage");
    assert_eq!(student.home_path(), "/alumnosPage");
    assert_eq!(unknown.home_path(), "/login");
    assert_eq!(AuthState { user: None, loading: false }.home_path(), "/login");
}

#[test]
fn persona_lookup_waits_resolves_or_reports_missing() {
    assert_eq!(AuthState::default().persona_lookup(), PersonaLookup::Pending);
    assert_eq!(AuthState { user: None, loading: false }.persona_lookup(), PersonaLookup::Pending);

    let mut user = user_with_role("profesor");
    user.id = Some(12);
    assert_eq!(AuthState { user: Some(user.clone()), loading: false }.persona_lookup(), PersonaLookup::Resolve(12));

    user.id = None;
    assert_eq!(AuthState { user: Some(user), loading: false }.persona_lookup(), PersonaLookup::Missing);
}
