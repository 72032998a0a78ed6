//! Wire DTOs for the course-management REST API.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's camelCase JSON so serde round-trips stay
//! lossless. Optional fields default so partially populated rows (fresh
//! sections, ungraded tasks) still deserialize.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit `null` like a missing key for plain string fields.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// =============================================================================
// AUTH
// =============================================================================

/// Credentials posted to `/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Raw body returned by `/auth/login`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    pub message: Option<String>,
    pub detail: Option<String>,
    pub error: Option<String>,
    pub user: Option<LoginUser>,
    pub token: Option<String>,
}

/// Persona record embedded in a successful login response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginUser {
    pub id_persona: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub correo: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tipo: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nombres: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub apellido_p: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub apellido_m: String,
}

/// Account registration payload for `/api/registro`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub nombres: String,
    pub apellido_p: String,
    pub apellido_m: String,
    pub correo: String,
    pub contrasena: String,
    pub tipo_usuario: String,
    pub codigo_estudiante: Option<String>,
}

// =============================================================================
// SECTIONS
// =============================================================================

/// A section as listed for its professor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id_seccion: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nombre_curso: String,
    pub anio: i32,
    #[serde(default)]
    pub codigo: Option<i64>,
}

/// A section as listed for an enrolled student.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentSection {
    pub id_seccion: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nombre_curso: String,
    pub anio: i32,
    #[serde(default)]
    pub codigo: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nombre_profesor: String,
}

/// Payload for `POST /api/secciones`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSectionRequest {
    #[serde(rename = "id_profesor")]
    pub id_profesor: i64,
    pub nombre_curso: String,
    pub anio: i32,
    pub codigo: i64,
}

/// Payload for `PUT /api/secciones/{id}/profesor/{idProfesor}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditSectionRequest {
    pub nombre_curso: String,
    pub anio: i32,
}

/// Body of the professor-id and student-id lookups.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdLookupResponse {
    #[serde(default)]
    pub success: bool,
    pub id_profesor: Option<i64>,
    pub id_alumno: Option<i64>,
    pub message: Option<String>,
}

/// Generic `{ success, message }` acknowledgement.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub success: bool,
    pub message: Option<String>,
}

/// A student enrolled in a section with their running average.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionStudent {
    pub id_alumno: i64,
    pub id_persona: Option<i64>,
    pub nombre_completo: Option<String>,
    pub nombres: Option<String>,
    pub apellido_paterno: Option<String>,
    pub apellido_materno: Option<String>,
    pub correo: Option<String>,
    pub codigo_alumno: Option<String>,
    pub promedio_final: Option<f64>,
    pub id_seccion: Option<i64>,
    pub nombre_curso: Option<String>,
}

impl SectionStudent {
    /// Display name: the backend's full name, else the joined name parts.
    pub fn display_name(&self) -> String {
        if let Some(full) = self.nombre_completo.as_deref().map(str::trim) {
            if !full.is_empty() {
                return full.to_owned();
            }
        }
        [&self.nombres, &self.apellido_paterno, &self.apellido_materno]
            .into_iter()
            .filter_map(|part| part.as_deref().map(str::trim))
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A work group inside a section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionGroup {
    pub id_grupo: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nombre_grupo: String,
    pub promedio_final: Option<f64>,
    pub id_seccion: Option<i64>,
    pub nombre_curso: Option<String>,
}

// =============================================================================
// TASKS
// =============================================================================

/// Whether a task is graded per student or per group.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskKind {
    #[default]
    Individual,
    Grupal,
}

impl TaskKind {
    pub const ALL: [Self; 2] = [Self::Individual, Self::Grupal];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Individual => "Individual",
            Self::Grupal => "Grupal",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == raw.trim())
    }
}

/// A task inside a section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id_tarea: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tipo: String,
    #[serde(default)]
    pub fecha_creacion: Option<String>,
    #[serde(default)]
    pub fecha_vencimiento: Option<String>,
}

/// Body of `GET /api/tareas/seccion/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct TaskListResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub tareas: Vec<Task>,
    pub message: Option<String>,
}

/// Payload for `POST /api/tareas`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub id_seccion: i64,
    pub nombre: String,
    pub tipo: String,
    pub descripcion: String,
    pub fecha_vencimiento: String,
}

// =============================================================================
// GRADES
// =============================================================================

/// One task with the student's submission and grade, if any.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskGrade {
    pub id_tarea: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nombre_tarea: String,
    pub id_entrega: Option<i64>,
    pub nota: Option<f64>,
}

/// Payload for `POST /api/entregas`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubmissionRequest {
    pub id_tarea: i64,
    pub id_alumno: i64,
    pub nota: Option<f64>,
}

/// Payload for `PUT /api/entregas/{id}/nota`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GradeUpdateRequest {
    pub nota: Option<f64>,
}

/// Body of a created submission.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedSubmission {
    pub id_entrega: i64,
}

// =============================================================================
// INVITATIONS
// =============================================================================

/// `{ success, message, data }` envelope used by the invitation endpoints.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

/// A pending invitation addressed to a student.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invitation {
    pub id: Option<i64>,
    pub id_seccion: Option<i64>,
    pub token: String,
    pub correo: Option<String>,
    pub nombre_curso: Option<String>,
    pub nombre_profesor: Option<String>,
    pub fecha_creacion: Option<String>,
    pub estado: Option<String>,
}

impl Invitation {
    /// Heading for the invitation card, falling back to the section id.
    pub fn title(&self) -> String {
        match (self.nombre_curso.as_deref(), self.id_seccion) {
            (Some(name), _) if !name.trim().is_empty() => name.to_owned(),
            (_, Some(id)) => format!("Sección {id}"),
            _ => "Sección".to_owned(),
        }
    }
}

/// Payload for `POST /api/invitaciones`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvitationRequest {
    pub id_persona: i64,
    pub correo_alumno: String,
    pub id_seccion: i64,
}

/// Payload for the accept/reject invitation endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvitationDecision {
    pub token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_alumno: Option<i64>,
}
