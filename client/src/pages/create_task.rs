//! Task creation screen for a section.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::section_card::section_tasks_href;
use crate::components::task_form::TaskForm;
use crate::util::validation::parse_route_id;

#[component]
pub fn CreateTaskPage() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();
    let id_seccion = parse_route_id(params.get_untracked().get("idSeccion").as_deref());

    let back = move |_| {
        let target = id_seccion.map_or_else(|| crate::state::auth::PROFESSOR_HOME.to_owned(), section_tasks_href);
        navigate(&target, Default::default());
    };

    view! {
        <div class="create-task">
            <header class="create-task__header">
                <button class="btn" on:click=back>"← Volver"</button>
            </header>
            <TaskForm id_seccion=id_seccion />
        </div>
    }
}
