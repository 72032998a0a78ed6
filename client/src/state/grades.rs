//! Editable grade sheet for one student in one section.
//!
//! DESIGN
//! ======
//! Rows keep the raw input text so a half-typed value ("1", "17.") survives
//! re-rendering; parsing happens on validation and for the running average.

#[cfg(test)]
#[path = "grades_test.rs"]
mod grades_test;

use crate::net::types::TaskGrade;

pub const MIN_GRADE: f64 = 0.0;
pub const MAX_GRADE: f64 = 20.0;

/// A grade input outside 0..=20 or not a number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidGrade;

/// One task row with its submission id (if any) and the grade being edited.
#[derive(Clone, Debug, PartialEq)]
pub struct GradeRow {
    pub id_tarea: i64,
    pub id_entrega: Option<i64>,
    pub titulo: String,
    pub input: String,
}

impl GradeRow {
    pub fn from_grade(grade: TaskGrade) -> Self {
        Self {
            id_tarea: grade.id_tarea,
            id_entrega: grade.id_entrega,
            titulo: grade.nombre_tarea,
            input: grade.nota.map(|n| n.to_string()).unwrap_or_default(),
        }
    }

    /// `Ok(None)` for a blank input.
    pub fn parsed(&self) -> Result<Option<f64>, InvalidGrade> {
        parse_grade(&self.input)
    }
}

/// Parse a grade input. Blank means "no grade".
pub fn parse_grade(raw: &str) -> Result<Option<f64>, InvalidGrade> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && (MIN_GRADE..=MAX_GRADE).contains(&value) => Ok(Some(value)),
        _ => Err(InvalidGrade),
    }
}

/// A single write needed to persist a row.
#[derive(Clone, Debug, PartialEq)]
pub enum SaveAction {
    Update { id_entrega: i64, nota: Option<f64>, titulo: String },
    Create { id_tarea: i64, nota: Option<f64>, titulo: String },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GradeSheet {
    pub rows: Vec<GradeRow>,
}

impl GradeSheet {
    pub fn from_grades(grades: Vec<TaskGrade>) -> Self {
        Self { rows: grades.into_iter().map(GradeRow::from_grade).collect() }
    }

    pub fn set_input(&mut self, id_tarea: i64, value: String) {
        if let Some(row) = self.rows.iter_mut().find(|row| row.id_tarea == id_tarea) {
            row.input = value;
        }
    }

    /// Record the submission id returned for a newly created row.
    pub fn record_created(&mut self, id_tarea: i64, id_entrega: i64) {
        if let Some(row) = self.rows.iter_mut().find(|row| row.id_tarea == id_tarea) {
            row.id_entrega = Some(id_entrega);
        }
    }

    /// Validate every row and return the writes in row order.
    ///
    /// # Errors
    ///
    /// The message for the first invalid row.
    pub fn save_plan(&self) -> Result<Vec<SaveAction>, String> {
        self.rows
            .iter()
            .map(|row| {
                let nota = row.parsed().map_err(|InvalidGrade| format!("Nota inválida en \"{}\"", row.titulo))?;
                let titulo = row.titulo.clone();
                Ok(match row.id_entrega {
                    Some(id_entrega) => SaveAction::Update { id_entrega, nota, titulo },
                    None => SaveAction::Create { id_tarea: row.id_tarea, nota, titulo },
                })
            })
            .collect()
    }

    /// Average of graded rows to two decimals, or `Sin notas`.
    pub fn average_label(&self) -> String {
        let graded: Vec<f64> = self.rows.iter().filter_map(|row| row.parsed().ok().flatten()).collect();
        if graded.is_empty() {
            return "Sin notas".to_owned();
        }
        #[allow(clippy::cast_precision_loss)]
        let average = graded.iter().sum::<f64>() / graded.len() as f64;
        format!("{average:.2}")
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Message shown when a save step fails.
pub fn save_failure_message(action: &SaveAction, detail: &str) -> String {
    match action {
        SaveAction::Update { titulo, .. } => format!("Error al actualizar \"{titulo}\": {detail}"),
        SaveAction::Create { titulo, .. } => format!("Error al crear entrega para \"{titulo}\": {detail}"),
    }
}
