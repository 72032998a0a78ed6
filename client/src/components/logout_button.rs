//! "Cerrar Sesión" with a confirmation prompt.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

pub const LOGOUT_PROMPT: &str = "¿Está seguro que desea cerrar sesión?";

#[component]
pub fn LogoutButton() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let on_click = move |_| {
        if !crate::util::dialog::confirm(LOGOUT_PROMPT) {
            return;
        }
        let navigate = navigate.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::util::session::logout(auth).await;
            navigate(crate::state::auth::LOGIN_PATH, leptos_router::NavigateOptions::default());
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (navigate, auth);
    };

    view! {
        <button class="btn logout-button" type="button" on:click=on_click>
            "Cerrar Sesión"
        </button>
    }
}
