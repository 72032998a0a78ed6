//! Section detail for its professor: students, tasks and groups.

#[cfg(test)]
#[path = "section_detail_test.rs"]
mod section_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::invite_student_button::InviteStudentButton;
use crate::net::error::ApiError;
use crate::net::types::{SectionGroup, SectionStudent, Task};
use crate::state::auth::PROFESSOR_HOME;
use crate::util::dates::format_short_date;
use crate::util::validation::parse_route_id;

pub fn grading_href(id_seccion: i64, id_alumno: i64) -> String {
    format!("/secciones/{id_seccion}/alumno/{id_alumno}/notas")
}

pub fn create_task_href(id_seccion: i64) -> String {
    format!("/secciones/{id_seccion}/crear-tarea")
}

/// Average with two decimals, or a dash when nothing is graded.
pub fn format_average(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_owned(), |v| format!("{v:.2}"))
}

pub fn list_error_message(err: &ApiError, what: &str) -> String {
    if err.is_network() {
        return "Error de conexión con el servidor".to_owned();
    }
    err.server_message().map_or_else(|| format!("Error al cargar {what}"), ToOwned::to_owned)
}

/// Remote list with its own loading and error state.
#[derive(Clone, Debug, PartialEq)]
struct Remote<T> {
    items: Vec<T>,
    loading: bool,
    error: Option<String>,
}

impl<T> Default for Remote<T> {
    fn default() -> Self {
        Self { items: Vec::new(), loading: true, error: None }
    }
}

#[component]
pub fn SectionDetailPage() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();
    let id_seccion = Memo::new(move |_| parse_route_id(params.get().get("idSeccion").as_deref()));

    let students = RwSignal::new(Remote::<SectionStudent>::default());
    let tasks = RwSignal::new(Remote::<Task>::default());
    let groups = RwSignal::new(Remote::<SectionGroup>::default());

    Effect::new(move || {
        let Some(id) = id_seccion.get() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_section_students(id).await;
            students.update(|s| apply(s, result, "los estudiantes"));
        });
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_section_tasks(id).await;
            tasks.update(|s| apply(s, result, "las tareas"));
        });
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_section_groups(id).await;
            groups.update(|s| apply(s, result, "los grupos"));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    let nav_back = navigate.clone();
    let nav_task = navigate.clone();
    let nav_student = navigate;

    view! {
        <div class="section-detail">
            <header class="section-detail__header">
                <button class="btn" on:click=move |_| nav_back(PROFESSOR_HOME, Default::default())>
                    "← Volver"
                </button>
                {move || id_seccion.get().map(|id| view! { <InviteStudentButton id_seccion=id /> })}
                <button
                    class="btn btn--primary"
                    disabled=move || id_seccion.get().is_none()
                    on:click=move |_| {
                        if let Some(id) = id_seccion.get_untracked() {
                            nav_task(&create_task_href(id), Default::default());
                        }
                    }
                >
                    "Crear tarea"
                </button>
            </header>

            <section class="section-detail__students">
                <h2>"Estudiantes"</h2>
                <table class="section-detail__table">
                    <thead>
                        <tr>
                            <th>"Promedio"</th>
                            <th>"Nombre"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let state = students.get();
                            if let Some(message) = state.error {
                                return view! { <tr><td colspan="2" class="error">{message}</td></tr> }.into_any();
                            }
                            if state.loading {
                                return view! { <tr><td colspan="2">"Cargando..."</td></tr> }.into_any();
                            }
                            if state.items.is_empty() {
                                return view! {
                                    <tr><td colspan="2" class="empty">"No hay estudiantes todavía"</td></tr>
                                }
                                    .into_any();
                            }
                            let nav_student = nav_student.clone();
                            state
                                .items
                                .into_iter()
                                .map(|student| {
                                    let nav_student = nav_student.clone();
                                    let id_alumno = student.id_alumno;
                                    view! {
                                        <tr
                                            class="section-detail__student"
                                            on:click=move |_| {
                                                if let Some(id) = id_seccion.get_untracked() {
                                                    nav_student(&grading_href(id, id_alumno), Default::default());
                                                }
                                            }
                                        >
                                            <td>{format_average(student.promedio_final)}</td>
                                            <td>{student.display_name()}</td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                                .into_any()
                        }}
                    </tbody>
                </table>
            </section>

            <section class="section-detail__tasks">
                <h2>"Tareas"</h2>
                {move || {
                    let state = tasks.get();
                    if let Some(message) = state.error {
                        return view! { <p class="error">{message}</p> }.into_any();
                    }
                    if state.loading {
                        return view! { <p>"Cargando tareas..."</p> }.into_any();
                    }
                    if state.items.is_empty() {
                        return view! { <p class="empty">"No hay tareas todavía"</p> }.into_any();
                    }
                    view! {
                        <ul class="section-detail__task-list">
                            {state
                                .items
                                .into_iter()
                                .map(|task| {
                                    let due = format!("Vence: {}", format_short_date(task.fecha_vencimiento.as_deref()));
                                    view! {
                                        <li class="section-detail__task">
                                            <span class="section-detail__task-name">{task.nombre}</span>
                                            <span class="section-detail__task-type">{task.tipo}</span>
                                            <span class="section-detail__task-due">{due}</span>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    }
                        .into_any()
                }}
            </section>

            <section class="section-detail__groups">
                <h2>"Grupos"</h2>
                {move || {
                    let state = groups.get();
                    if let Some(message) = state.error {
                        return view! { <p class="error">{message}</p> }.into_any();
                    }
                    if state.loading {
                        return view! { <p>"Cargando..."</p> }.into_any();
                    }
                    if state.items.is_empty() {
                        return view! { <p class="empty">"No hay grupos todavía"</p> }.into_any();
                    }
                    view! {
                        <table class="section-detail__table">
                            <thead>
                                <tr>
                                    <th>"Promedio"</th>
                                    <th>"Grupo"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {state
                                    .items
                                    .into_iter()
                                    .map(|group| {
                                        view! {
                                            <tr>
                                                <td>{format_average(group.promedio_final)}</td>
                                                <td>{group.nombre_grupo}</td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </tbody>
                        </table>
                    }
                        .into_any()
                }}
            </section>
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn apply<T>(state: &mut Remote<T>, result: Result<Vec<T>, ApiError>, what: &str) {
    state.loading = false;
    match result {
        Ok(items) => {
            state.items = items;
            state.error = None;
        }
        Err(e) => {
            leptos::logging::warn!("loading {what} failed: {e}");
            state.error = Some(list_error_message(&e, what));
        }
    }
}
