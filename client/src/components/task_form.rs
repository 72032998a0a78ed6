//! Task creation form for a section.

#[cfg(test)]
#[path = "task_form_test.rs"]
mod task_form_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::error::ApiError;
use crate::net::types::{CreateTaskRequest, TaskKind};
use crate::util::dates::due_date_payload;
use crate::util::validation::any_blank;

pub const FIELDS_REQUIRED: &str = "Por favor completa todos los campos.";
pub const SECTION_UNKNOWN: &str = "No se pudo identificar la sección.";

/// Raw form fields as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub nombre: String,
    pub tipo: String,
    pub descripcion: String,
    pub fecha_vencimiento: String,
}

/// Build the create payload, or the message to show.
///
/// # Errors
///
/// A blank field or a missing section id.
pub fn validate_task_form(id_seccion: Option<i64>, draft: &TaskDraft) -> Result<CreateTaskRequest, &'static str> {
    if any_blank(&[draft.nombre.as_str(), draft.tipo.as_str(), draft.descripcion.as_str(), draft.fecha_vencimiento.as_str()]) {
        return Err(FIELDS_REQUIRED);
    }
    let id_seccion = id_seccion.ok_or(SECTION_UNKNOWN)?;
    let tipo = TaskKind::parse(&draft.tipo).ok_or(FIELDS_REQUIRED)?;
    Ok(CreateTaskRequest {
        id_seccion,
        nombre: draft.nombre.trim().to_owned(),
        tipo: tipo.as_str().to_owned(),
        descripcion: draft.descripcion.trim().to_owned(),
        fecha_vencimiento: due_date_payload(&draft.fecha_vencimiento),
    })
}

pub fn create_error_message(err: &ApiError) -> &'static str {
    if err.is_network() { "Error de conexión con el servidor" } else { "No se pudo crear la tarea. Inténtalo nuevamente." }
}

#[component]
pub fn TaskForm(id_seccion: Option<i64>) -> impl IntoView {
    let navigate = use_navigate();
    let draft = RwSignal::new(TaskDraft::default());
    let error = RwSignal::new(None::<&'static str>);
    let submitting = RwSignal::new(false);

    let edit = move |apply: fn(&mut TaskDraft, String), value: String| {
        draft.update(|d| apply(d, value));
        error.set(None);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let payload = match validate_task_form(id_seccion, &draft.get()) {
            Ok(payload) => payload,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        submitting.set(true);
        let navigate = navigate.clone();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_task(&payload).await {
                Ok(()) => {
                    let href = super::section_card::section_tasks_href(payload.id_seccion);
                    navigate(&href, leptos_router::NavigateOptions::default());
                }
                Err(e) => {
                    leptos::logging::warn!("task creation failed: {e}");
                    error.set(Some(create_error_message(&e)));
                    submitting.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (payload, navigate);
    };

    view! {
        <form class="task-form" on:submit=on_submit>
            <h2>"Crear nueva tarea"</h2>
            <p class="task-form__section">
                {format!("Sección ID: {}", id_seccion.map(|id| id.to_string()).unwrap_or_default())}
            </p>
            <label class="task-form__field">
                <span>"Nombre"</span>
                <input
                    type="text"
                    prop:value=move || draft.get().nombre
                    on:input=move |ev| edit(|d, v| d.nombre = v, event_target_value(&ev))
                />
            </label>
            <label class="task-form__field">
                <span>"Tipo"</span>
                <select
                    prop:value=move || draft.get().tipo
                    on:change=move |ev| edit(|d, v| d.tipo = v, event_target_value(&ev))
                >
                    <option value="">"Seleccione un tipo"</option>
                    {TaskKind::ALL
                        .into_iter()
                        .map(|kind| view! { <option value=kind.as_str()>{kind.as_str()}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </label>
            <label class="task-form__field">
                <span>"Descripción"</span>
                <textarea
                    prop:value=move || draft.get().descripcion
                    on:input=move |ev| edit(|d, v| d.descripcion = v, event_target_value(&ev))
                ></textarea>
            </label>
            <label class="task-form__field">
                <span>"Fecha de vencimiento"</span>
                <input
                    type="date"
                    prop:value=move || draft.get().fecha_vencimiento
                    on:input=move |ev| edit(|d, v| d.fecha_vencimiento = v, event_target_value(&ev))
                />
            </label>
            <Show when=move || error.get().is_some()>
                <p class="task-form__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <button type="submit" class="btn btn--primary" disabled=move || submitting.get()>
                {move || if submitting.get() { "Creando..." } else { "Crear tarea" }}
            </button>
        </form>
    }
}
