//! Professor home: sections per academic year with create, edit and delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted behind `RequireRole(Profesor)`. The session only knows the persona
//! id, so the page first resolves the professor id and then (re)loads the
//! section list whenever the year changes or a mutation succeeds.
//!
//! ERROR HANDLING
//! ==============
//! Every failure lands in a single error line above the list; the list keeps
//! its last good contents.

#[cfg(test)]
#[path = "sections_test.rs"]
mod sections_test;

use leptos::prelude::*;

use crate::components::create_section_modal::CreateSectionModal;
use crate::components::edit_section_modal::EditSectionModal;
use crate::components::logout_button::LogoutButton;
use crate::components::section_card::SectionCard;
use crate::components::year_select::YearSelect;
use crate::net::error::ApiError;
use crate::net::types::Section;
use crate::state::auth::{AuthState, PersonaLookup};

pub const DEFAULT_PROFESSOR_YEAR: i32 = 2025;
pub const NOT_A_PROFESSOR: &str = "Usuario no es profesor";

/// Four-digit section code. Derived from a v4 UUID so no clock or RNG
/// plumbing is needed in the browser.
pub fn generate_section_code() -> i64 {
    let bucket = uuid::Uuid::new_v4().as_u128() % 9000;
    // bucket < 9000, so the cast is lossless.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    let bucket = bucket as i64;
    bucket + 1000
}

pub fn greeting(auth: &AuthState) -> String {
    let name = auth.user.as_ref().map_or_else(|| "USUARIO".to_owned(), |user| user.greeting_name());
    format!("SALUDOS, {name}")
}

pub fn delete_prompt(section: &Section) -> String {
    format!("¿Está seguro de eliminar la sección \"{}\"?", section.nombre_curso)
}

pub fn load_error_message(err: &ApiError) -> &'static str {
    if err.is_network() { "Error de conexión con el servidor" } else { "Error al cargar las secciones" }
}

/// Message for a failed create/edit/delete; `fallback` names the action.
pub fn mutation_error_message(err: &ApiError, fallback: &str) -> String {
    if err.is_network() {
        return "Error de conexión con el servidor".to_owned();
    }
    err.server_message().unwrap_or(fallback).to_owned()
}

#[component]
pub fn SectionsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let year = RwSignal::new(DEFAULT_PROFESSOR_YEAR);
    let professor_id = RwSignal::new(None::<i64>);
    let sections = RwSignal::new(Vec::<Section>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let reload = RwSignal::new(0_u32);
    let show_create = RwSignal::new(false);
    let editing = RwSignal::new(None::<Section>);

    // Resolve the professor id once per signed-in persona.
    Effect::new(move || {
        let id_persona = match auth.get().persona_lookup() {
            PersonaLookup::Pending => return,
            PersonaLookup::Missing => {
                error.set(Some(NOT_A_PROFESSOR.to_owned()));
                loading.set(false);
                return;
            }
            PersonaLookup::Resolve(id) => id,
        };
        if professor_id.get_untracked().is_some() {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_professor_id(id_persona).await {
                Ok(id) => professor_id.set(Some(id)),
                Err(e) => {
                    leptos::logging::warn!("professor lookup failed: {e}");
                    error.set(Some(NOT_A_PROFESSOR.to_owned()));
                    loading.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id_persona;
    });

    Effect::new(move || {
        let Some(id_profesor) = professor_id.get() else {
            return;
        };
        let anio = year.get();
        reload.track();
        loading.set(true);
        error.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_professor_sections(id_profesor, anio).await {
                Ok(items) => sections.set(items),
                Err(e) => {
                    leptos::logging::warn!("section load failed: {e}");
                    error.set(Some(load_error_message(&e).to_owned()));
                }
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id_profesor, anio, sections);
    });

    let on_create = Callback::new(move |nombre: String| {
        let Some(id_profesor) = professor_id.get_untracked() else {
            return;
        };
        let anio = year.get_untracked();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::net::types::CreateSectionRequest;

            let payload = CreateSectionRequest { id_profesor, nombre_curso: nombre, anio, codigo: generate_section_code() };
            match crate::net::api::create_section(&payload).await {
                Ok(_) => {
                    show_create.set(false);
                    reload.update(|n| *n += 1);
                }
                Err(e) => error.set(Some(mutation_error_message(&e, "Error al crear la sección"))),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id_profesor, anio, nombre);
    });

    let on_edit_save = Callback::new(move |(id_seccion, nombre, anio): (i64, String, i32)| {
        let Some(id_profesor) = professor_id.get_untracked() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::net::types::EditSectionRequest;

            let payload = EditSectionRequest { nombre_curso: nombre, anio };
            match crate::net::api::edit_section(id_seccion, id_profesor, &payload).await {
                Ok(_) => {
                    editing.set(None);
                    reload.update(|n| *n += 1);
                }
                Err(e) => error.set(Some(mutation_error_message(&e, "Error al actualizar la sección"))),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id_seccion, id_profesor, nombre, anio);
    });

    let on_delete = Callback::new(move |section: Section| {
        let Some(id_profesor) = professor_id.get_untracked() else {
            return;
        };
        if !crate::util::dialog::confirm(&delete_prompt(&section)) {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_section(section.id_seccion, id_profesor).await {
                Ok(_) => reload.update(|n| *n += 1),
                Err(e) => error.set(Some(mutation_error_message(&e, "Error al eliminar la sección"))),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id_profesor;
    });

    let on_edit = Callback::new(move |section: Section| editing.set(Some(section)));

    view! {
        <div class="sections-page">
            <aside class="sections-page__profile">
                <h2>{move || greeting(&auth.get())}</h2>
                <LogoutButton />
            </aside>
            <main class="sections-page__main">
                <div class="sections-page__toolbar">
                    <YearSelect value=year />
                    <button
                        class="btn btn--primary"
                        disabled=move || loading.get() || professor_id.get().is_none()
                        on:click=move |_| show_create.set(true)
                    >
                        "Agregar nueva sección"
                    </button>
                </div>
                <Show when=move || error.get().is_some()>
                    <p class="sections-page__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                {move || {
                    let items = sections.get();
                    if loading.get() && items.is_empty() {
                        view! { <p class="sections-page__empty">"Cargando secciones..."</p> }.into_any()
                    } else if items.is_empty() {
                        view! { <p class="sections-page__empty">"No hay secciones para este año"</p> }.into_any()
                    } else {
                        view! {
                            <div class="sections-page__grid">
                                {items
                                    .into_iter()
                                    .map(|section| {
                                        view! { <SectionCard section=section on_edit=on_edit on_delete=on_delete /> }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                            .into_any()
                    }
                }}
            </main>
            <Show when=move || show_create.get()>
                <CreateSectionModal
                    anio=year.get_untracked()
                    on_close=Callback::new(move |()| show_create.set(false))
                    on_create=on_create
                />
            </Show>
            {move || {
                editing
                    .get()
                    .map(|section| {
                        view! {
                            <EditSectionModal
                                section=section
                                base_year=year.get_untracked()
                                on_close=Callback::new(move |()| editing.set(None))
                                on_save=on_edit_save
                            />
                        }
                    })
            }}
        </div>
    }
}
