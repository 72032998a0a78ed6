use super::*;

// =============================================================
// Auth payloads
// =============================================================

#[test]
fn login_response_parses_backend_user() {
    let raw = r#"{
        "success": true,
        "message": "Login exitoso",
        "user": {
            "idPersona": 7,
            "correo": "juan@uni.pe",
            "tipo": "profesor",
            "nombres": "Juan",
            "apellidoP": "Pérez",
            "apellidoM": "Soto"
        }
    }"#;
    let resp: LoginResponse = serde_json::from_str(raw).unwrap();
    assert!(resp.success);
    let user = resp.user.unwrap();
    assert_eq!(user.id_persona, Some(7));
    assert_eq!(user.tipo, "profesor");
    assert_eq!(user.apellido_p, "Pérez");
}

#[test]
fn login_response_without_success_defaults_false() {
    let resp: LoginResponse = serde_json::from_str(r#"{"detail":"bad"}"#).unwrap();
    assert!(!resp.success);
    assert_eq!(resp.detail.as_deref(), Some("bad"));
    assert!(resp.user.is_none());
}

#[test]
fn register_request_uses_backend_field_names() {
    let req = RegisterRequest {
        nombres: "Ana".to_owned(),
        apellido_p: "Ruiz".to_owned(),
        apellido_m: "Lopez".to_owned(),
        correo: "ana@uni.pe".to_owned(),
        contrasena: "secreta123".to_owned(),
        tipo_usuario: "Profesor".to_owned(),
        codigo_estudiante: None,
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["apellidoP"], "Ruiz");
    assert_eq!(value["contrasena"], "secreta123");
    assert_eq!(value["tipoUsuario"], "Profesor");
    assert!(value["codigoEstudiante"].is_null());
}

// =============================================================
// Sections
// =============================================================

#[test]
fn create_section_request_keeps_snake_case_professor_key() {
    let req = CreateSectionRequest { id_profesor: 3, nombre_curso: "Física".to_owned(), anio: 2025, codigo: 1234 };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value, serde_json::json!({ "id_profesor": 3, "nombreCurso": "Física", "anio": 2025, "codigo": 1234 }));
}

#[test]
fn student_section_parses_professor_name() {
    let raw = r#"{"idSeccion":1,"id_profesor":2,"nombreCurso":"Matemáticas","anio":2024,"codigo":99,"nombreProfesor":"Juan Pérez"}"#;
    let section: StudentSection = serde_json::from_str(raw).unwrap();
    assert_eq!(section.nombre_profesor, "Juan Pérez");
    assert_eq!(section.anio, 2024);
}

#[test]
fn section_student_display_name_prefers_full_name() {
    let student: SectionStudent = serde_json::from_str(
        r#"{"idAlumno":4,"nombreCompleto":"Luis Díaz Vega","nombres":"Luis","promedioFinal":15.5}"#,
    )
    .unwrap();
    assert_eq!(student.display_name(), "Luis Díaz Vega");
    assert_eq!(student.promedio_final, Some(15.5));
}

#[test]
fn section_student_display_name_joins_parts_when_full_name_blank() {
    let student: SectionStudent = serde_json::from_str(
        r#"{"idAlumno":4,"nombreCompleto":"  ","nombres":"Luis","apellidoPaterno":"Díaz","apellidoMaterno":null}"#,
    )
    .unwrap();
    assert_eq!(student.display_name(), "Luis Díaz");
}

// =============================================================
// Tasks and grades
// =============================================================

#[test]
fn task_kind_parse_accepts_known_values_only() {
    assert_eq!(TaskKind::parse("Individual"), Some(TaskKind::Individual));
    assert_eq!(TaskKind::parse(" Grupal "), Some(TaskKind::Grupal));
    assert_eq!(TaskKind::parse("grupal"), None);
    assert_eq!(TaskKind::parse(""), None);
}

#[test]
fn task_list_response_tolerates_missing_tasks() {
    let resp: TaskListResponse = serde_json::from_str(r#"{"success":false,"message":"boom"}"#).unwrap();
    assert!(!resp.success);
    assert!(resp.tareas.is_empty());
    assert_eq!(resp.message.as_deref(), Some("boom"));
}

#[test]
fn task_grade_allows_null_submission_and_grade() {
    let rows: Vec<TaskGrade> = serde_json::from_str(
        r#"[{"idTarea":1,"nombreTarea":"T1","idEntrega":null,"nota":null},{"idTarea":2,"nombreTarea":"T2","idEntrega":9,"nota":17.5}]"#,
    )
    .unwrap();
    assert_eq!(rows[0].id_entrega, None);
    assert_eq!(rows[1].nota, Some(17.5));
}

#[test]
fn create_submission_request_serializes_null_grade() {
    let req = CreateSubmissionRequest { id_tarea: 1, id_alumno: 2, nota: None };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({ "idTarea": 1, "idAlumno": 2, "nota": null })
    );
}

// =============================================================
// Invitations
// =============================================================

#[test]
fn invitation_envelope_parses_list() {
    let raw = r#"{"success":true,"message":"ok","data":[{"id":1,"idSeccion":3,"token":"t-1","nombreCurso":"Redes","nombreProfesor":"Ana"}]}"#;
    let env: Envelope<Vec<Invitation>> = serde_json::from_str(raw).unwrap();
    let items = env.data.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].token, "t-1");
}

#[test]
fn invitation_title_falls_back_to_section_id() {
    let inv = Invitation {
        id: Some(1),
        id_seccion: Some(8),
        token: "t".to_owned(),
        correo: None,
        nombre_curso: None,
        nombre_profesor: None,
        fecha_creacion: None,
        estado: None,
    };
    assert_eq!(inv.title(), "Sección 8");
}

#[test]
fn invitation_decision_omits_missing_student_id() {
    let reject = InvitationDecision { token: "abc".to_owned(), id_alumno: None };
    assert_eq!(serde_json::to_value(&reject).unwrap(), serde_json::json!({ "token": "abc" }));
    let accept = InvitationDecision { token: "abc".to_owned(), id_alumno: Some(5) };
    assert_eq!(
        serde_json::to_value(&accept).unwrap(),
        serde_json::json!({ "token": "abc", "idAlumno": 5 })
    );
}

// =============================================================
// Explicit nulls
// =============================================================

#[test]
fn login_body_with_null_name_parts_still_decodes() {
    let raw = r#"{"success":true,"token":"tk","user":{"idPersona":4,"correo":"alumno1@uni.pe","tipo":"alumno","nombres":"Luis","apellidoP":"Soto","apellidoM":null}}"#;
    let body: LoginResponse = serde_json::from_str(raw).unwrap();
    let user = body.user.unwrap();
    assert_eq!(user.id_persona, Some(4));
    assert_eq!(user.apellido_p, "Soto");
    assert_eq!(user.apellido_m, "");
}

#[test]
fn task_with_null_type_still_decodes() {
    let raw = r#"{"success":true,"tareas":[{"idTarea":1,"nombre":"Informe","tipo":null},{"idTarea":2,"nombre":null,"tipo":"Grupal"}]}"#;
    let body: TaskListResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(body.tareas.len(), 2);
    assert_eq!(body.tareas[0].tipo, "");
    assert_eq!(body.tareas[1].nombre, "");
    assert_eq!(body.tareas[1].tipo, "Grupal");
}

#[test]
fn null_display_names_default_to_empty() {
    let section: StudentSection =
        serde_json::from_str(r#"{"idSeccion":2,"nombreCurso":"Redes","anio":2026,"nombreProfesor":null}"#).unwrap();
    assert_eq!(section.nombre_profesor, "");
    let group: SectionGroup = serde_json::from_str(r#"{"idGrupo":9,"nombreGrupo":null}"#).unwrap();
    assert_eq!(group.nombre_grupo, "");
}
