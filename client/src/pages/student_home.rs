//! Student home: enrolled sections per academic year and pending invitations.

#[cfg(test)]
#[path = "student_home_test.rs"]
mod student_home_test;

use leptos::prelude::*;

use super::sections::greeting;
use crate::components::logout_button::LogoutButton;
use crate::components::pending_invitations_button::PendingInvitationsButton;
use crate::components::student_section_card::StudentSectionCard;
use crate::components::year_select::YearSelect;
use crate::net::error::ApiError;
use crate::net::types::StudentSection;
use crate::state::auth::{AuthState, PersonaLookup};

pub const DEFAULT_STUDENT_YEAR: i32 = 2026;
pub const NO_SECTIONS: &str =
    "No estás inscrito en ninguna sección para este año. Revisa tus invitaciones pendientes.";

pub const NOT_A_STUDENT: &str = "Usuario no es un alumno";

pub fn lookup_error_message(err: &ApiError) -> &'static str {
    if err.is_network() { "Error al verificar usuario" } else { NOT_A_STUDENT }
}

pub fn load_error_message(err: &ApiError) -> &'static str {
    if err.is_network() { "Error de conexión con el servidor" } else { "Error al cargar las secciones" }
}

#[component]
pub fn StudentHomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let year = RwSignal::new(DEFAULT_STUDENT_YEAR);
    let student_id = RwSignal::new(None::<i64>);
    let sections = RwSignal::new(Vec::<StudentSection>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<&'static str>);

    Effect::new(move || {
        let id_persona = match auth.get().persona_lookup() {
            PersonaLookup::Pending => return,
            PersonaLookup::Missing => {
                error.set(Some(NOT_A_STUDENT));
                loading.set(false);
                return;
            }
            PersonaLookup::Resolve(id) => id,
        };
        if student_id.get_untracked().is_some() {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_student_id(id_persona).await {
                Ok(id) => student_id.set(Some(id)),
                Err(e) => {
                    leptos::logging::warn!("student lookup failed: {e}");
                    error.set(Some(lookup_error_message(&e)));
                    loading.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id_persona;
    });

    Effect::new(move || {
        let Some(id_alumno) = student_id.get() else {
            return;
        };
        let anio = year.get();
        loading.set(true);
        error.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_student_sections(id_alumno, anio).await {
                Ok(items) => sections.set(items),
                Err(e) => {
                    leptos::logging::warn!("student section load failed: {e}");
                    sections.set(Vec::new());
                    error.set(Some(load_error_message(&e)));
                }
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id_alumno, anio, sections);
    });

    view! {
        <div class="student-home">
            <aside class="student-home__profile">
                <h2>{move || greeting(&auth.get())}</h2>
                <PendingInvitationsButton />
                <LogoutButton />
            </aside>
            <main class="student-home__main">
                <div class="student-home__toolbar">
                    <YearSelect value=year />
                </div>
                <Show when=move || error.get().is_some()>
                    <p class="student-home__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                {move || {
                    let items = sections.get();
                    if loading.get() && items.is_empty() {
                        view! { <p class="student-home__empty">"Cargando secciones..."</p> }.into_any()
                    } else if items.is_empty() {
                        view! { <p class="student-home__empty">{NO_SECTIONS}</p> }.into_any()
                    } else {
                        view! {
                            <div class="student-home__grid">
                                {items
                                    .into_iter()
                                    .map(|section| view! { <StudentSectionCard section=section /> })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                            .into_any()
                    }
                }}
            </main>
        </div>
    }
}
