//! REST API helpers for the course-management backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, relative to the
//! page origin (the host forwards `/api/*` and `/auth/*` to the backend).
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`; nothing here panics on bad
//! input or bad responses. Pages choose the user-facing wording.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use super::error::error_message_from_body;
use super::error::ApiError;
#[cfg(any(test, feature = "hydrate"))]
use super::types::{Ack, Envelope, IdLookupResponse, LoginResponse, TaskListResponse};
use super::types::{
    CreateInvitationRequest, CreateSectionRequest, CreateTaskRequest, EditSectionRequest, Invitation, RegisterRequest,
    Section, SectionGroup, SectionStudent, StudentSection, Task, TaskGrade,
};
use crate::state::auth::SessionUser;

// =============================================================================
// ENDPOINTS
// =============================================================================

#[cfg(any(test, feature = "hydrate"))]
const LOGIN_ENDPOINT: &str = "/auth/login";
#[cfg(any(test, feature = "hydrate"))]
const LOGOUT_ENDPOINT: &str = "/auth/logout";
#[cfg(any(test, feature = "hydrate"))]
const REGISTER_ENDPOINT: &str = "/api/registro";
#[cfg(any(test, feature = "hydrate"))]
const SECTIONS_ENDPOINT: &str = "/api/secciones";
#[cfg(any(test, feature = "hydrate"))]
const TASKS_ENDPOINT: &str = "/api/tareas";
#[cfg(any(test, feature = "hydrate"))]
const SUBMISSIONS_ENDPOINT: &str = "/api/entregas";
#[cfg(any(test, feature = "hydrate"))]
const INVITATIONS_ENDPOINT: &str = "/api/invitaciones";
#[cfg(any(test, feature = "hydrate"))]
const PENDING_INVITATIONS_ENDPOINT: &str = "/api/invitaciones/pendientes";
#[cfg(any(test, feature = "hydrate"))]
const ACCEPT_INVITATION_ENDPOINT: &str = "/api/invitaciones/confirmar";
#[cfg(any(test, feature = "hydrate"))]
const REJECT_INVITATION_ENDPOINT: &str = "/api/invitaciones/rechazar";

#[cfg(any(test, feature = "hydrate"))]
fn professor_id_endpoint(id_persona: i64) -> String {
    format!("/api/secciones/profesor-id/{id_persona}")
}

#[cfg(any(test, feature = "hydrate"))]
fn professor_sections_endpoint(id_profesor: i64, anio: i32) -> String {
    format!("/api/secciones/profesor/{id_profesor}/anio/{anio}")
}

#[cfg(any(test, feature = "hydrate"))]
fn owned_section_endpoint(id_seccion: i64, id_profesor: i64) -> String {
    format!("/api/secciones/{id_seccion}/profesor/{id_profesor}")
}

#[cfg(any(test, feature = "hydrate"))]
fn student_id_endpoint(id_persona: i64) -> String {
    format!("/api/alumno/alumno-id/{id_persona}")
}

#[cfg(any(test, feature = "hydrate"))]
fn student_sections_endpoint(id_alumno: i64, anio: i32) -> String {
    format!("/api/alumno/secciones/{id_alumno}/anio/{anio}")
}

#[cfg(any(test, feature = "hydrate"))]
fn section_tasks_endpoint(id_seccion: i64) -> String {
    format!("/api/tareas/seccion/{id_seccion}")
}

#[cfg(any(test, feature = "hydrate"))]
fn section_students_endpoint(id_seccion: i64) -> String {
    format!("/api/alumnos-seccion/seccion/{id_seccion}")
}

#[cfg(any(test, feature = "hydrate"))]
fn section_student_endpoint(id_seccion: i64, id_alumno: i64) -> String {
    format!("/api/alumnos-seccion/seccion/{id_seccion}/alumno/{id_alumno}")
}

#[cfg(any(test, feature = "hydrate"))]
fn section_groups_endpoint(id_seccion: i64) -> String {
    format!("/api/grupos-seccion/seccion/{id_seccion}")
}

#[cfg(any(test, feature = "hydrate"))]
fn task_grades_endpoint(id_seccion: i64, id_alumno: i64) -> String {
    format!("/api/entregas/seccion/{id_seccion}/alumno/{id_alumno}/tareas-notas")
}

#[cfg(any(test, feature = "hydrate"))]
fn submission_grade_endpoint(id_entrega: i64) -> String {
    format!("/api/entregas/{id_entrega}/nota")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

// =============================================================================
// RESPONSE INTERPRETATION
// =============================================================================

/// Build a `Status` error from a non-2xx body, JSON or plain text.
#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| error_message_from_body(&value))
        .or_else(|| {
            let trimmed = body.trim();
            (!trimmed.is_empty() && !trimmed.starts_with('{')).then(|| trimmed.to_owned())
        });
    ApiError::Status { status, message }
}

/// Interpret a login response body. The backend answers `success: false`
/// with either a 2xx or a 4xx, so both paths read the same body.
#[cfg(any(test, feature = "hydrate"))]
fn login_outcome(ok: bool, status: u16, body: Option<LoginResponse>) -> Result<SessionUser, ApiError> {
    let Some(body) = body else {
        return Err(if ok {
            ApiError::Decode("login response was not JSON".to_owned())
        } else {
            ApiError::Status { status, message: None }
        });
    };
    let message = body
        .message
        .clone()
        .or_else(|| body.detail.clone())
        .or_else(|| body.error.clone());
    if !ok {
        return Err(ApiError::Status { status, message });
    }
    if !body.success {
        return Err(ApiError::Rejected(message));
    }
    let user = body.user.unwrap_or_default();
    Ok(SessionUser::from_login(user, body.token))
}

/// Resolve a professor/student id lookup.
#[cfg(any(test, feature = "hydrate"))]
fn resolve_lookup(
    status: u16,
    body: Option<IdLookupResponse>,
    pick: fn(&IdLookupResponse) -> Option<i64>,
) -> Result<i64, ApiError> {
    match body {
        Some(body) if body.success => pick(&body).ok_or_else(|| ApiError::Decode("lookup response missing id".to_owned())),
        Some(body) => Err(ApiError::Rejected(body.message)),
        None => Err(ApiError::Status { status, message: None }),
    }
}

/// Resolve the `{ success, tareas }` task list body.
#[cfg(any(test, feature = "hydrate"))]
fn resolve_task_list(status: u16, body: Option<TaskListResponse>) -> Result<Vec<Task>, ApiError> {
    match body {
        Some(body) if body.success => Ok(body.tareas),
        Some(body) => Err(ApiError::Rejected(body.message)),
        None => Err(ApiError::Status { status, message: None }),
    }
}

/// Resolve a `{ success, message }` acknowledgement on a 2xx response.
#[cfg(any(test, feature = "hydrate"))]
fn resolve_ack(body: Option<Ack>) -> Result<Option<String>, ApiError> {
    match body {
        // Some mutations answer with an empty body; a 2xx is enough.
        None => Ok(None),
        Some(ack) if ack.success => Ok(ack.message),
        Some(ack) => Err(ApiError::Rejected(ack.message)),
    }
}

/// Resolve an invitation envelope, which carries `success` on any status.
#[cfg(any(test, feature = "hydrate"))]
fn resolve_envelope<T>(ok: bool, status: u16, body: Option<Envelope<T>>) -> Result<(Option<String>, Option<T>), ApiError> {
    match body {
        Some(env) if ok && env.success => Ok((env.message, env.data)),
        Some(env) if ok => Err(ApiError::Rejected(env.message)),
        Some(env) => Err(ApiError::Status { status, message: env.message }),
        None => Err(ApiError::Status { status, message: None }),
    }
}

#[cfg(feature = "hydrate")]
mod http {
    use gloo_net::http::{RequestBuilder, Response};
    use serde::Serialize;
    use serde::de::DeserializeOwned;

    use super::ApiError;

    pub(super) async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
        builder.send().await.map_err(|e| ApiError::Network(e.to_string()))
    }

    pub(super) async fn send_json<B: Serialize>(builder: RequestBuilder, body: &B) -> Result<Response, ApiError> {
        let request = builder.json(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        request.send().await.map_err(|e| ApiError::Network(e.to_string()))
    }

    pub(super) async fn ensure_ok(resp: Response) -> Result<Response, ApiError> {
        if resp.ok() {
            return Ok(resp);
        }
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Err(super::status_error(status, &body))
    }

    pub(super) async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Decode a body that may legitimately be empty.
    pub(super) async fn decode_optional<T: DeserializeOwned>(resp: Response) -> Option<T> {
        let text = resp.text().await.ok()?;
        if text.trim().is_empty() {
            return None;
        }
        serde_json::from_str(&text).ok()
    }
}

// =============================================================================
// SESSION
// =============================================================================

/// Authenticate with `POST /auth/login` and build the session record.
///
/// # Errors
///
/// `Rejected`/`Status` carry the backend's message for bad credentials;
/// `Network` when the backend cannot be reached.
pub async fn login(correo: &str, contrasena: &str) -> Result<SessionUser, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use super::types::LoginRequest;

        let payload = LoginRequest { email: correo.to_owned(), password: contrasena.to_owned() };
        let resp = http::send_json(gloo_net::http::Request::post(LOGIN_ENDPOINT), &payload).await?;
        let ok = resp.ok();
        let status = resp.status();
        let body = http::decode_optional::<LoginResponse>(resp).await;
        login_outcome(ok, status, body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (correo, contrasena);
        Err(ApiError::Unavailable)
    }
}

/// Notify the backend of a logout. Best effort: failures are only logged.
pub async fn logout(token: Option<&str>) {
    #[cfg(feature = "hydrate")]
    {
        let Some(token) = token else {
            return;
        };
        let builder = gloo_net::http::Request::post(LOGOUT_ENDPOINT).header("Authorization", &bearer(token));
        if let Err(e) = http::send(builder).await {
            leptos::logging::warn!("logout notification failed: {e}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Create an account via `POST /api/registro`.
///
/// # Errors
///
/// `Status` with the backend's `error` text when registration is refused.
pub async fn register(payload: &RegisterRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::send_json(gloo_net::http::Request::post(REGISTER_ENDPOINT), payload).await?;
        http::ensure_ok(resp).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// SECTIONS
// =============================================================================

/// Map a persona id to its professor id.
///
/// # Errors
///
/// `Rejected` when the persona is not a professor.
pub async fn fetch_professor_id(id_persona: i64) -> Result<i64, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::send(gloo_net::http::Request::get(&professor_id_endpoint(id_persona))).await?;
        let status = resp.status();
        let body = http::decode_optional::<IdLookupResponse>(resp).await;
        resolve_lookup(status, body, |b| b.id_profesor)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id_persona;
        Err(ApiError::Unavailable)
    }
}

/// List a professor's sections for one academic year.
///
/// # Errors
///
/// `Status` on non-2xx, `Network` on transport failure.
pub async fn fetch_professor_sections(id_profesor: i64, anio: i32) -> Result<Vec<Section>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::send(gloo_net::http::Request::get(&professor_sections_endpoint(id_profesor, anio))).await?;
        let resp = http::ensure_ok(resp).await?;
        http::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id_profesor, anio);
        Err(ApiError::Unavailable)
    }
}

/// Create a section via `POST /api/secciones`.
///
/// # Errors
///
/// `Status`/`Rejected` with the backend message when creation fails.
pub async fn create_section(payload: &CreateSectionRequest) -> Result<Option<String>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::send_json(gloo_net::http::Request::post(SECTIONS_ENDPOINT), payload).await?;
        let resp = http::ensure_ok(resp).await?;
        resolve_ack(http::decode_optional::<Ack>(resp).await)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(ApiError::Unavailable)
    }
}

/// Rename or move a section to another year.
///
/// # Errors
///
/// `Status`/`Rejected` with the backend message when the edit is refused.
pub async fn edit_section(id_seccion: i64, id_profesor: i64, payload: &EditSectionRequest) -> Result<Option<String>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = owned_section_endpoint(id_seccion, id_profesor);
        let resp = http::send_json(gloo_net::http::Request::put(&url), payload).await?;
        let resp = http::ensure_ok(resp).await?;
        resolve_ack(http::decode_optional::<Ack>(resp).await)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id_seccion, id_profesor, payload);
        Err(ApiError::Unavailable)
    }
}

/// Delete a section owned by the professor.
///
/// # Errors
///
/// `Status` 403 when the professor does not own the section.
pub async fn delete_section(id_seccion: i64, id_profesor: i64) -> Result<Option<String>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = owned_section_endpoint(id_seccion, id_profesor);
        let resp = http::send(gloo_net::http::Request::delete(&url)).await?;
        let resp = http::ensure_ok(resp).await?;
        resolve_ack(http::decode_optional::<Ack>(resp).await)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id_seccion, id_profesor);
        Err(ApiError::Unavailable)
    }
}

/// Map a persona id to its student id.
///
/// # Errors
///
/// `Rejected` when the persona is not a student.
pub async fn fetch_student_id(id_persona: i64) -> Result<i64, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::send(gloo_net::http::Request::get(&student_id_endpoint(id_persona))).await?;
        let status = resp.status();
        let body = http::decode_optional::<IdLookupResponse>(resp).await;
        resolve_lookup(status, body, |b| b.id_alumno)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id_persona;
        Err(ApiError::Unavailable)
    }
}

/// List the sections a student is enrolled in for one year.
///
/// # Errors
///
/// `Status` on non-2xx, `Network` on transport failure.
pub async fn fetch_student_sections(id_alumno: i64, anio: i32) -> Result<Vec<StudentSection>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::send(gloo_net::http::Request::get(&student_sections_endpoint(id_alumno, anio))).await?;
        let resp = http::ensure_ok(resp).await?;
        http::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id_alumno, anio);
        Err(ApiError::Unavailable)
    }
}

/// List enrolled students with their averages.
///
/// # Errors
///
/// `Status` on non-2xx, `Network` on transport failure.
pub async fn fetch_section_students(id_seccion: i64) -> Result<Vec<SectionStudent>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::send(gloo_net::http::Request::get(&section_students_endpoint(id_seccion))).await?;
        let resp = http::ensure_ok(resp).await?;
        http::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id_seccion;
        Err(ApiError::Unavailable)
    }
}

/// Fetch one enrolled student.
///
/// # Errors
///
/// `Status` on non-2xx, `Network` on transport failure.
pub async fn fetch_section_student(id_seccion: i64, id_alumno: i64) -> Result<SectionStudent, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::send(gloo_net::http::Request::get(&section_student_endpoint(id_seccion, id_alumno))).await?;
        let resp = http::ensure_ok(resp).await?;
        http::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id_seccion, id_alumno);
        Err(ApiError::Unavailable)
    }
}

/// List work groups of a section.
///
/// # Errors
///
/// `Status` on non-2xx, `Network` on transport failure.
pub async fn fetch_section_groups(id_seccion: i64) -> Result<Vec<SectionGroup>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::send(gloo_net::http::Request::get(&section_groups_endpoint(id_seccion))).await?;
        let resp = http::ensure_ok(resp).await?;
        http::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id_seccion;
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// TASKS
// =============================================================================

/// List tasks of a section.
///
/// # Errors
///
/// `Rejected` with the backend message when `success` is false.
pub async fn fetch_section_tasks(id_seccion: i64) -> Result<Vec<Task>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::send(gloo_net::http::Request::get(&section_tasks_endpoint(id_seccion))).await?;
        let status = resp.status();
        let body = http::decode_optional::<TaskListResponse>(resp).await;
        resolve_task_list(status, body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id_seccion;
        Err(ApiError::Unavailable)
    }
}

/// Create a task via `POST /api/tareas`.
///
/// # Errors
///
/// `Status` on non-2xx, `Network` on transport failure.
pub async fn create_task(payload: &CreateTaskRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::send_json(gloo_net::http::Request::post(TASKS_ENDPOINT), payload).await?;
        http::ensure_ok(resp).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// GRADES
// =============================================================================

/// Tasks of a section with one student's submission and grade.
///
/// # Errors
///
/// `Status` with the HTTP status so the page can word 404/500 differently.
pub async fn fetch_task_grades(id_seccion: i64, id_alumno: i64) -> Result<Vec<TaskGrade>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::send(gloo_net::http::Request::get(&task_grades_endpoint(id_seccion, id_alumno))).await?;
        let resp = http::ensure_ok(resp).await?;
        http::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id_seccion, id_alumno);
        Err(ApiError::Unavailable)
    }
}

/// Overwrite the grade of an existing submission.
///
/// # Errors
///
/// `Status` with the backend's error text.
pub async fn update_grade(id_entrega: i64, nota: Option<f64>) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use super::types::GradeUpdateRequest;

        let url = submission_grade_endpoint(id_entrega);
        let resp = http::send_json(gloo_net::http::Request::put(&url), &GradeUpdateRequest { nota }).await?;
        http::ensure_ok(resp).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id_entrega, nota);
        Err(ApiError::Unavailable)
    }
}

/// Create a graded submission and return its id.
///
/// # Errors
///
/// `Status` with the backend's error text.
pub async fn create_submission(id_tarea: i64, id_alumno: i64, nota: Option<f64>) -> Result<i64, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use super::types::{CreateSubmissionRequest, CreatedSubmission};

        let payload = CreateSubmissionRequest { id_tarea, id_alumno, nota };
        let resp = http::send_json(gloo_net::http::Request::post(SUBMISSIONS_ENDPOINT), &payload).await?;
        let resp = http::ensure_ok(resp).await?;
        let created: CreatedSubmission = http::decode(resp).await?;
        Ok(created.id_entrega)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id_tarea, id_alumno, nota);
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// INVITATIONS
// =============================================================================

/// Invite a student by email; returns the backend's confirmation message.
///
/// # Errors
///
/// `Rejected`/`Status` with the backend message.
pub async fn send_invitation(payload: &CreateInvitationRequest) -> Result<Option<String>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::send_json(gloo_net::http::Request::post(INVITATIONS_ENDPOINT), payload).await?;
        let ok = resp.ok();
        let status = resp.status();
        let body = http::decode_optional::<Envelope<serde_json::Value>>(resp).await;
        resolve_envelope(ok, status, body).map(|(message, _)| message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(ApiError::Unavailable)
    }
}

/// Pending invitations addressed to `correo`.
///
/// # Errors
///
/// `Rejected`/`Status` with the backend message.
pub async fn fetch_pending_invitations(correo: &str) -> Result<Vec<Invitation>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = gloo_net::http::Request::get(PENDING_INVITATIONS_ENDPOINT).query([("correo", correo)]);
        let resp = http::send(builder).await?;
        let ok = resp.ok();
        let status = resp.status();
        let body = http::decode_optional::<Envelope<Vec<Invitation>>>(resp).await;
        resolve_envelope(ok, status, body).map(|(_, data)| data.unwrap_or_default())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = correo;
        Err(ApiError::Unavailable)
    }
}

/// Accept an invitation. The backend resolves the student from the persona id.
///
/// # Errors
///
/// `Rejected`/`Status` with the backend message (expired token, already enrolled).
pub async fn accept_invitation(token: &str, id_persona: i64) -> Result<Option<String>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use super::types::InvitationDecision;

        let payload = InvitationDecision { token: token.to_owned(), id_alumno: Some(id_persona) };
        let resp = http::send_json(gloo_net::http::Request::post(ACCEPT_INVITATION_ENDPOINT), &payload).await?;
        let ok = resp.ok();
        let status = resp.status();
        let body = http::decode_optional::<Envelope<serde_json::Value>>(resp).await;
        resolve_envelope(ok, status, body).map(|(message, _)| message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id_persona);
        Err(ApiError::Unavailable)
    }
}

/// Reject an invitation.
///
/// # Errors
///
/// `Rejected`/`Status` with the backend message.
pub async fn reject_invitation(token: &str) -> Result<Option<String>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use super::types::InvitationDecision;

        let payload = InvitationDecision { token: token.to_owned(), id_alumno: None };
        let resp = http::send_json(gloo_net::http::Request::post(REJECT_INVITATION_ENDPOINT), &payload).await?;
        let ok = resp.ok();
        let status = resp.status();
        let body = http::decode_optional::<Envelope<serde_json::Value>>(resp).await;
        resolve_envelope(ok, status, body).map(|(message, _)| message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}
