//! Grading screen: one student's grades for every task of a section.
//!
//! SYSTEM CONTEXT
//! ==============
//! The sheet holds one row per task. Saving walks the rows in order, updating
//! existing submissions and creating the missing ones, and stops at the first
//! failure so the message points at a single task.

#[cfg(test)]
#[path = "grades_test.rs"]
mod grades_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::section_card::section_tasks_href;
use crate::net::error::ApiError;
use crate::net::types::SectionStudent;
use crate::state::auth::PROFESSOR_HOME;
use crate::state::grades::{GradeSheet, MAX_GRADE, MIN_GRADE};
use crate::util::validation::parse_route_id;

pub const SAVED_MESSAGE: &str = "Notas guardadas correctamente.";
pub const FALLBACK_TITLE: &str = "Asignar Notas";
const RELOAD_DELAY_MS: u32 = 1000;

pub fn load_error_message(err: &ApiError) -> String {
    if err.is_network() {
        return "Error de conexión con el servidor. Verifica que el backend esté corriendo".to_owned();
    }
    match err.status() {
        Some(404) => "No se encontró información para este alumno en esta sección".to_owned(),
        Some(500) => "Error en el servidor. Por favor, contacta al administrador".to_owned(),
        Some(status) => format!("Error al cargar las tareas ({status})"),
        None => err.server_message().map_or_else(|| err.to_string(), ToOwned::to_owned),
    }
}

/// Server message when there is one, otherwise the error itself.
pub fn failure_detail(err: &ApiError) -> String {
    err.server_message().map_or_else(|| err.to_string(), ToOwned::to_owned)
}

pub fn student_title(student: Option<&SectionStudent>) -> String {
    student
        .map(SectionStudent::display_name)
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_TITLE.to_owned())
}

#[component]
pub fn GradesPage() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();
    let ids = Memo::new(move |_| {
        let map = params.get();
        parse_route_id(map.get("idSeccion").as_deref()).zip(parse_route_id(map.get("idAlumno").as_deref()))
    });

    let sheet = RwSignal::new(GradeSheet::default());
    let student = RwSignal::new(None::<SectionStudent>);
    let loading = RwSignal::new(true);
    let saving = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<&'static str>);
    let reload = RwSignal::new(0_u32);
    // Row identity only, so typing a grade does not rebuild the table.
    let row_labels = Memo::new(move |_| {
        sheet.with(|s| s.rows.iter().map(|row| (row.id_tarea, row.titulo.clone())).collect::<Vec<_>>())
    });

    Effect::new(move || {
        reload.track();
        let Some((id_seccion, id_alumno)) = ids.get() else {
            loading.set(false);
            return;
        };
        loading.set(true);
        error.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_task_grades(id_seccion, id_alumno).await {
                Ok(grades) => sheet.set(GradeSheet::from_grades(grades)),
                Err(e) => {
                    leptos::logging::warn!("grade load failed: {e}");
                    error.set(Some(load_error_message(&e)));
                }
            }
            loading.set(false);
        });
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_section_student(id_seccion, id_alumno).await {
                Ok(info) => student.set(Some(info)),
                Err(e) => leptos::logging::warn!("student header load failed: {e}"),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id_seccion, id_alumno, student);
    });

    let on_save = move |_| {
        if saving.get_untracked() {
            return;
        }
        let Some((_, id_alumno)) = ids.get_untracked() else {
            return;
        };
        let plan = match sheet.with_untracked(GradeSheet::save_plan) {
            Ok(plan) => plan,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        saving.set(true);
        error.set(None);
        notice.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::state::grades::{SaveAction, save_failure_message};

            for action in plan {
                let result = match &action {
                    SaveAction::Update { id_entrega, nota, .. } => crate::net::api::update_grade(*id_entrega, *nota).await,
                    SaveAction::Create { id_tarea, nota, .. } => {
                        crate::net::api::create_submission(*id_tarea, id_alumno, *nota)
                            .await
                            .map(|id_entrega| sheet.update(|s| s.record_created(*id_tarea, id_entrega)))
                    }
                };
                if let Err(e) = result {
                    leptos::logging::warn!("grade save failed: {e}");
                    error.set(Some(save_failure_message(&action, &failure_detail(&e))));
                    saving.set(false);
                    return;
                }
            }
            saving.set(false);
            notice.set(Some(SAVED_MESSAGE));
            crate::util::dialog::after_delay(RELOAD_DELAY_MS, move || {
                notice.set(None);
                reload.update(|n| *n += 1);
            });
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (plan, id_alumno);
    };

    let back = move |_| {
        let target = ids.get_untracked().map_or_else(|| PROFESSOR_HOME.to_owned(), |(s, _)| section_tasks_href(s));
        navigate(&target, Default::default());
    };

    view! {
        <div class="grades-page">
            <header class="grades-page__header">
                <button class="btn" on:click=back>"← Volver"</button>
                <div>
                    <h1>{move || student.with(|s| student_title(s.as_ref()))}</h1>
                    {move || {
                        student
                            .get()
                            .map(|info| {
                                view! {
                                    <p class="grades-page__code">
                                        {format!("Código: {}", info.codigo_alumno.unwrap_or_default())}
                                    </p>
                                    <p class="grades-page__course">{info.nombre_curso.unwrap_or_default()}</p>
                                }
                            })
                    }}
                </div>
            </header>

            <Show when=move || error.get().is_some()>
                <p class="grades-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || notice.get().is_some()>
                <p class="grades-page__notice">{move || notice.get().unwrap_or_default()}</p>
            </Show>

            {move || {
                let rows = row_labels.get();
                if loading.get() && rows.is_empty() {
                    return view! { <p>"Cargando..."</p> }.into_any();
                }
                if rows.is_empty() {
                    return view! {
                        <p class="grades-page__empty">"No hay tareas registradas para este alumno en esta sección"</p>
                    }
                        .into_any();
                }
                view! {
                    <table class="grades-page__table">
                        <thead>
                            <tr>
                                <th>"Tarea"</th>
                                <th>"Nota"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {rows
                                .into_iter()
                                .map(|(id_tarea, titulo)| {
                                    let input = move || {
                                        sheet.with(|s| {
                                            s.rows
                                                .iter()
                                                .find(|row| row.id_tarea == id_tarea)
                                                .map(|row| row.input.clone())
                                                .unwrap_or_default()
                                        })
                                    };
                                    view! {
                                        <tr>
                                            <td>{titulo}</td>
                                            <td>
                                                <input
                                                    type="number"
                                                    min=MIN_GRADE.to_string()
                                                    max=MAX_GRADE.to_string()
                                                    step="0.1"
                                                    prop:value=input
                                                    on:input=move |ev| {
                                                        let value = event_target_value(&ev);
                                                        sheet.update(|s| s.set_input(id_tarea, value));
                                                    }
                                                />
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </tbody>
                    </table>
                }
                    .into_any()
            }}

            <footer class="grades-page__summary">
                <div>
                    <span>"Promedio Actual"</span>
                    <strong>{move || sheet.with(GradeSheet::average_label)}</strong>
                </div>
                <div>
                    <span>"Total de Tareas"</span>
                    <strong>{move || sheet.with(GradeSheet::len)}</strong>
                </div>
                <button
                    class="btn btn--primary"
                    disabled=move || saving.get() || sheet.with(GradeSheet::is_empty)
                    on:click=on_save
                >
                    {move || if saving.get() { "Guardando..." } else { "Guardar Notas" }}
                </button>
            </footer>
        </div>
    }
}
