//! Shared route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route applies the same rule: wait while the stored session
//! loads, send anonymous visitors to `/login`, and send users with the wrong
//! role back to their own home page.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::{AuthState, LOGIN_PATH, Role};

/// What a protected route should do for the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session not loaded yet.
    Wait,
    Allow,
    Redirect(&'static str),
}

pub fn guard_decision(state: &AuthState, required: Role) -> GuardDecision {
    if state.loading {
        return GuardDecision::Wait;
    }
    if state.user.is_none() {
        return GuardDecision::Redirect(LOGIN_PATH);
    }
    if state.role() == Some(required) {
        GuardDecision::Allow
    } else {
        // Unrecognised roles have no home and land on login.
        GuardDecision::Redirect(state.home_path())
    }
}

/// Redirect away whenever the guard decision for `required` says so.
pub fn install_role_guard<F>(auth: RwSignal<AuthState>, required: Role, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let GuardDecision::Redirect(path) = guard_decision(&auth.get(), required) {
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
