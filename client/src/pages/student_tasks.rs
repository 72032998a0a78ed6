//! Task list of one section as seen by an enrolled student.

#[cfg(test)]
#[path = "student_tasks_test.rs"]
mod student_tasks_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::error::ApiError;
use crate::net::types::Task;
use crate::state::auth::STUDENT_HOME;
use crate::util::dates::format_short_datetime;
use crate::util::validation::parse_route_id;

pub const NO_TASKS: &str = "No hay tareas disponibles para esta sección.";

/// Lines shown instead of the task list: the load error, then the empty
/// notice whenever there is nothing to list.
pub fn task_notices(error: Option<&str>, task_count: usize) -> Vec<&str> {
    let mut notices: Vec<&str> = error.into_iter().collect();
    if task_count == 0 {
        notices.push(NO_TASKS);
    }
    notices
}

pub fn load_error_message(err: &ApiError) -> String {
    if err.is_network() {
        return "Error de conexión con el servidor".to_owned();
    }
    err.server_message().unwrap_or("Error al cargar tareas").to_owned()
}

#[component]
pub fn StudentTasksPage() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();
    let id_seccion = Memo::new(move |_| parse_route_id(params.get().get("idSeccion").as_deref()));
    let tasks = RwSignal::new(Vec::<Task>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        let Some(id) = id_seccion.get() else {
            loading.set(false);
            return;
        };
        loading.set(true);
        error.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_section_tasks(id).await {
                Ok(items) => tasks.set(items),
                Err(e) => {
                    leptos::logging::warn!("student task load failed: {e}");
                    tasks.set(Vec::new());
                    error.set(Some(load_error_message(&e)));
                }
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, tasks);
    });

    view! {
        <div class="student-tasks">
            <header class="student-tasks__header">
                <button class="btn" on:click=move |_| navigate(STUDENT_HOME, Default::default())>
                    "← Volver"
                </button>
                <h1>"Tareas de la sección"</h1>
            </header>
            {move || {
                if loading.get() {
                    return view! { <p>"Cargando tareas..."</p> }.into_any();
                }
                let items = tasks.get();
                let error = error.get();
                let notices = task_notices(error.as_deref(), items.len());
                if !notices.is_empty() {
                    return notices
                        .into_iter()
                        .map(|notice| {
                            let class = if notice == NO_TASKS { "student-tasks__empty" } else { "student-tasks__error" };
                            view! { <p class=class>{notice.to_owned()}</p> }
                        })
                        .collect::<Vec<_>>()
                        .into_any();
                }
                view! {
                    <div class="student-tasks__list">
                        {items.into_iter().map(|task| view! { <StudentTaskCard task=task /> }).collect::<Vec<_>>()}
                    </div>
                }
                    .into_any()
            }}
        </div>
    }
}

#[component]
fn StudentTaskCard(task: Task) -> impl IntoView {
    let id_tarea = task.id_tarea;
    let created = format!("Fecha Creación: {}", format_short_datetime(task.fecha_creacion.as_deref()));
    let due = format!("Fecha Vencimiento: {}", format_short_datetime(task.fecha_vencimiento.as_deref()));

    view! {
        <article class="student-task">
            <h3 class="student-task__name">{task.nombre}</h3>
            <p class="student-task__description">{task.descripcion.unwrap_or_default()}</p>
            <span class="student-task__type">{task.tipo}</span>
            <p class="student-task__date">{created}</p>
            <p class="student-task__date">{due}</p>
            <button
                class="btn btn--primary"
                on:click=move |_| leptos::logging::log!("submit requested for task {id_tarea}")
            >
                "Subir Entrega"
            </button>
        </article>
    }
}
