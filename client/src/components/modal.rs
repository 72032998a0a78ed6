//! Generic modal dialog shell.
//!
//! Parents mount it inside a `<Show>` and own the open flag; the modal only
//! reports close requests through `on_close`.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use leptos::prelude::*;

/// Whether a key press or backdrop click should close the dialog.
pub fn dismisses(key: Option<&str>, disable_backdrop_close: bool) -> bool {
    if disable_backdrop_close {
        return false;
    }
    key.is_none_or(|key| key == "Escape")
}

/// Dialog with a title bar, a `×` close button and arbitrary body.
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    on_close: Callback<()>,
    /// Ignore Escape and backdrop clicks; only `×` closes.
    #[prop(optional)]
    disable_backdrop_close: bool,
    children: Children,
) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if dismisses(Some(ev.key().as_str()), disable_backdrop_close) {
                on_close.run(());
            }
        });
        on_cleanup(move || handle.remove());
    }

    let on_backdrop = move |_| {
        if dismisses(None, disable_backdrop_close) {
            on_close.run(());
        }
    };

    view! {
        <div class="modal__backdrop" on:click=on_backdrop>
            <div
                class="modal"
                role="dialog"
                aria-modal="true"
                on:click=move |ev| ev.stop_propagation()
            >
                <div class="modal__header">
                    <h2 class="modal__title">{title}</h2>
                    <button class="modal__close" aria-label="Cerrar" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                </div>
                <div class="modal__body">{children()}</div>
            </div>
        </div>
    }
}
