//! Session lifecycle: restore, login, logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the only writes to `RwSignal<AuthState>` besides initial provision,
//! and keeps the `currentUser` storage entry in step with it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use super::storage;
use crate::net::api;
use crate::net::error::ApiError;
use crate::state::auth::{AuthState, SessionUser};

/// Storage key for the persisted session.
pub const SESSION_KEY: &str = "currentUser";

/// Shown when the backend rejects credentials without a message.
pub const INVALID_CREDENTIALS: &str = "Credenciales inválidas";
pub const CONNECTION_ERROR: &str = "Error de conexión con el servidor";

/// Read the stored session and mark auth as loaded.
pub fn restore(auth: RwSignal<AuthState>) {
    let user = storage::load_json::<SessionUser>(SESSION_KEY);
    auth.set(AuthState { user, loading: false });
}

/// Authenticate and persist the session.
///
/// # Errors
///
/// Returns the user-facing failure message.
pub async fn login(auth: RwSignal<AuthState>, correo: &str, contrasena: &str) -> Result<SessionUser, String> {
    match api::login(correo, contrasena).await {
        Ok(user) => {
            storage::save_json(SESSION_KEY, &user);
            auth.update(|state| {
                state.user = Some(user.clone());
                state.loading = false;
            });
            leptos::logging::log!("signed in as {}", user.email);
            Ok(user)
        }
        Err(e) => Err(login_error_message(&e)),
    }
}

/// Notify the backend if the session has a token, then clear local state.
pub async fn logout(auth: RwSignal<AuthState>) {
    let token = auth.get_untracked().user.and_then(|user| user.token);
    api::logout(token.as_deref()).await;
    storage::remove(SESSION_KEY);
    auth.update(|state| state.user = None);
}

/// Map a login failure to the message shown under the form.
pub fn login_error_message(err: &ApiError) -> String {
    if err.is_network() {
        return CONNECTION_ERROR.to_owned();
    }
    err.server_message().unwrap_or(INVALID_CREDENTIALS).to_owned()
}
