//! Root route: sends each visitor to the home page for their role.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

#[component]
pub fn LandingPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = auth.get();
        if state.loading {
            return;
        }
        navigate(state.home_path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
    });

    view! { <p class="page-loading">"Cargando..."</p> }
}
