use super::*;

#[test]
fn rejected_lists_show_the_server_message() {
    assert_eq!(load_error_message(&ApiError::Rejected(Some("Sección cerrada".to_owned()))), "Sección cerrada");
    assert_eq!(load_error_message(&ApiError::Rejected(None)), "Error al cargar tareas");
}

#[test]
fn network_failures_name_the_connection() {
    assert_eq!(load_error_message(&ApiError::Network("timeout".to_owned())), "Error de conexión con el servidor");
}

#[test]
fn failed_load_shows_error_and_empty_notice() {
    assert_eq!(task_notices(Some("Error al cargar tareas"), 0), vec!["Error al cargar tareas", NO_TASKS]);
}

#[test]
fn notices_only_when_needed() {
    assert_eq!(task_notices(None, 0), vec![NO_TASKS]);
    assert!(task_notices(None, 3).is_empty());
}
