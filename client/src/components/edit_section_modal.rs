//! Modal for renaming a section or moving it to another year.

#[cfg(test)]
#[path = "edit_section_modal_test.rs"]
mod edit_section_modal_test;

use leptos::prelude::*;

use super::modal::Modal;
use crate::net::types::Section;
use crate::util::dates::edit_year_options;
use crate::util::validation::{SECTION_NAME_MAX_LEN, validate_section_name};

pub const NO_CHANGES: &str = "No se realizaron cambios";

/// Edited `(name, year)` for `section`, or the message to show.
///
/// # Errors
///
/// Name validation failures, and an edit that changes nothing.
pub fn validate_edit(section: &Section, raw_name: &str, anio: i32) -> Result<(String, i32), &'static str> {
    let name = validate_section_name(raw_name)?;
    if name == section.nombre_curso && anio == section.anio {
        return Err(NO_CHANGES);
    }
    Ok((name, anio))
}

/// Edit form prefilled from `section`. `on_save` gets `(id, name, year)`.
#[component]
pub fn EditSectionModal(
    section: Section,
    /// Year currently selected on the page; options start there.
    base_year: i32,
    on_close: Callback<()>,
    on_save: Callback<(i64, String, i32)>,
) -> impl IntoView {
    let name = RwSignal::new(section.nombre_curso.clone());
    let anio = RwSignal::new(section.anio);
    let error = RwSignal::new(None::<&'static str>);

    let mut years = edit_year_options(base_year);
    if !years.contains(&section.anio) {
        years.insert(0, section.anio);
    }

    let id_seccion = section.id_seccion;
    let original = StoredValue::new(section);
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let result = original.with_value(|section| validate_edit(section, &name.get(), anio.get()));
        match result {
            Ok((nombre, year)) => on_save.run((id_seccion, nombre, year)),
            Err(message) => error.set(Some(message)),
        }
    };

    view! {
        <Modal title="Editar Sección" on_close=on_close>
            <form class="section-form" on:submit=on_submit>
                <label class="section-form__field">
                    <span>"Nombre de la sección"</span>
                    <input
                        type="text"
                        maxlength=SECTION_NAME_MAX_LEN.to_string()
                        prop:value=move || name.get()
                        on:input=move |ev| {
                            name.set(event_target_value(&ev));
                            error.set(None);
                        }
                    />
                </label>
                <label class="section-form__field">
                    <span>"Año"</span>
                    <select
                        prop:value=move || anio.get().to_string()
                        on:change=move |ev| {
                            if let Ok(year) = event_target_value(&ev).parse::<i32>() {
                                anio.set(year);
                                error.set(None);
                            }
                        }
                    >
                        {years
                            .into_iter()
                            .map(|year| view! { <option value=year.to_string()>{year}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="section-form__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="section-form__actions">
                    <button type="button" class="btn" on:click=move |_| on_close.run(())>
                        "Cancelar"
                    </button>
                    <button type="submit" class="btn btn--primary">
                        "Guardar Cambios"
                    </button>
                </div>
            </form>
        </Modal>
    }
}
