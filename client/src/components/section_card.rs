//! Card for one section on the professor's section list.

#[cfg(test)]
#[path = "section_card_test.rs"]
mod section_card_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::Section;

pub fn section_tasks_href(id_seccion: i64) -> String {
    format!("/secciones/{id_seccion}/tareas")
}

/// Keys that open a focused card, as they would a link.
pub fn opens_card(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

/// A card opening the section on click or Enter, with edit and delete actions.
#[component]
pub fn SectionCard(section: Section, on_edit: Callback<Section>, on_delete: Callback<Section>) -> impl IntoView {
    let href = section_tasks_href(section.id_seccion);
    let navigate = use_navigate();
    let open = move || navigate(&href, Default::default());
    let open_on_key = open.clone();
    let codigo = section.codigo.map(|c| format!("Código: {c}"));
    let for_edit = section.clone();
    let for_delete = section.clone();

    view! {
        <div
            class="section-card"
            role="link"
            tabindex="0"
            on:click=move |_| open()
            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                // Enter on the edit/delete buttons bubbles here too.
                if ev.target() == ev.current_target() && opens_card(&ev.key()) {
                    ev.prevent_default();
                    open_on_key();
                }
            }
        >
            <span class="section-card__name">{section.nombre_curso.clone()}</span>
            <span class="section-card__year">{section.anio}</span>
            {codigo.map(|c| view! { <span class="section-card__code">{c}</span> })}
            <span class="section-card__actions">
                <button
                    type="button"
                    class="section-card__edit"
                    title="Editar sección"
                    aria-label="Editar sección"
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.prevent_default();
                        ev.stop_propagation();
                        on_edit.run(for_edit.clone());
                    }
                >
                    "✎"
                </button>
                <button
                    type="button"
                    class="section-card__delete"
                    title="Eliminar sección"
                    aria-label="Eliminar sección"
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.prevent_default();
                        ev.stop_propagation();
                        on_delete.run(for_delete.clone());
                    }
                >
                    "✕"
                </button>
            </span>
        </div>
    }
}
