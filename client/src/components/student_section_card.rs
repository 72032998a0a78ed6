//! Card for one enrolled section on the student home page.

use leptos::prelude::*;

use crate::net::types::StudentSection;

pub fn student_tasks_href(id_seccion: i64) -> String {
    format!("/alumno/seccion/{id_seccion}/tareas")
}

#[component]
pub fn StudentSectionCard(section: StudentSection) -> impl IntoView {
    let href = student_tasks_href(section.id_seccion);
    let profesor = format!("Profesor: {}", section.nombre_profesor);

    view! {
        <a class="section-card section-card--student" href=href>
            <span class="section-card__name">{section.nombre_curso}</span>
            <span class="section-card__year">{section.anio}</span>
            <span class="section-card__professor">{profesor}</span>
        </a>
    }
}
