//! Route wrapper rendering its children only for the given role.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{AuthState, Role};
use crate::util::auth::{GuardDecision, guard_decision, install_role_guard};

/// Shows `Cargando...` until the session is known, then either renders the
/// page or redirects (anonymous to `/login`, wrong role to its own home).
#[component]
pub fn RequireRole(role: Role, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_role_guard(auth, role, use_navigate());

    view! {
        <Show
            when=move || guard_decision(&auth.get(), role) == GuardDecision::Allow
            fallback=|| view! { <p class="page-loading">"Cargando..."</p> }
        >
            {children()}
        </Show>
    }
}
