//! Modal for creating a section in the selected year.

use leptos::prelude::*;

use super::modal::Modal;
use crate::util::validation::{SECTION_NAME_MAX_LEN, validate_section_name};

/// Collects a section name; `on_create` receives it trimmed and validated.
#[component]
pub fn CreateSectionModal(anio: i32, on_close: Callback<()>, on_create: Callback<String>) -> impl IntoView {
    // Mounted fresh on every open, so the input starts empty.
    let name = RwSignal::new(String::new());
    let error = RwSignal::new(None::<&'static str>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_section_name(&name.get()) {
            Ok(trimmed) => on_create.run(trimmed),
            Err(message) => error.set(Some(message)),
        }
    };

    view! {
        <Modal title="Crear Nueva Sección" on_close=on_close>
            <form class="section-form" on:submit=on_submit>
                <p class="section-form__year">{format!("Año: {anio}")}</p>
                <label class="section-form__field">
                    <span>"Nombre de la sección"</span>
                    <input
                        type="text"
                        placeholder="Ej: CALIDAD DE SOFTWARE - G1"
                        maxlength=SECTION_NAME_MAX_LEN.to_string()
                        prop:value=move || name.get()
                        on:input=move |ev| {
                            name.set(event_target_value(&ev));
                            error.set(None);
                        }
                    />
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="section-form__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="section-form__actions">
                    <button type="button" class="btn" on:click=move |_| on_close.run(())>
                        "Cancelar"
                    </button>
                    <button type="submit" class="btn btn--primary">
                        "Crear Sección"
                    </button>
                </div>
            </form>
        </Modal>
    }
}
