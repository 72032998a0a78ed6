//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as `RwSignal<AuthState>` from `app::App`. Route guards and
//! role-aware pages read it; `util::session` persists it to `localStorage`
//! under `currentUser` so a reload keeps the user signed in.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

use crate::net::types::LoginUser;

/// Route a professor lands on after login.
pub const PROFESSOR_HOME: &str = "/seccionesPage";
/// Route a student lands on after login.
pub const STUDENT_HOME: &str = "/alumnosPage";
pub const LOGIN_PATH: &str = "/login";

/// Role carried by the session, parsed from the backend's free-form `tipo`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Profesor,
    Alumno,
}

impl Role {
    /// Case-insensitive parse. `estudiante` is accepted as a student alias.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "profesor" => Some(Self::Profesor),
            "alumno" | "estudiante" => Some(Self::Alumno),
            _ => None,
        }
    }

    pub fn home_path(self) -> &'static str {
        match self {
            Self::Profesor => PROFESSOR_HOME,
            Self::Alumno => STUDENT_HOME,
        }
    }
}

/// The signed-in user as persisted in browser storage.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionUser {
    /// Persona id; professor and student ids are resolved from it per page.
    pub id: Option<i64>,
    pub username: String,
    pub role: String,
    pub name: String,
    pub email: String,
    pub nombres: String,
    pub apellido_p: String,
    pub apellido_m: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl SessionUser {
    /// Build the session record from a successful login body.
    pub fn from_login(user: LoginUser, token: Option<String>) -> Self {
        Self {
            id: user.id_persona,
            username: user.correo.clone(),
            role: user.tipo,
            name: format!("{} {} {}", user.nombres, user.apellido_p, user.apellido_m),
            email: user.correo,
            nombres: user.nombres,
            apellido_p: user.apellido_p,
            apellido_m: user.apellido_m,
            token,
        }
    }

    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }

    /// Upper-cased given names for page greetings.
    pub fn greeting_name(&self) -> String {
        let trimmed = self.nombres.trim();
        if trimmed.is_empty() { "USUARIO".to_owned() } else { trimmed.to_uppercase() }
    }
}

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    /// True until the stored session has been read on the client.
    pub loading: bool,
}

/// What a role home page can do with the session's persona id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PersonaLookup {
    /// Session not restored yet, or nobody signed in.
    Pending,
    Resolve(i64),
    /// Signed in, but the login body carried no persona id.
    Missing,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    /// Case-insensitive comparison of the session role with `role`.
    pub fn has_role(&self, role: &str) -> bool {
        self.user
            .as_ref()
            .is_some_and(|user| user.role.to_lowercase() == role.to_lowercase())
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().and_then(SessionUser::role)
    }

    pub fn persona_lookup(&self) -> PersonaLookup {
        match (&self.user, self.loading) {
            (_, true) | (None, _) => PersonaLookup::Pending,
            (Some(user), false) => user.id.map_or(PersonaLookup::Missing, PersonaLookup::Resolve),
        }
    }

    /// Where the root route sends this session.
    pub fn home_path(&self) -> &'static str {
        match &self.user {
            None => LOGIN_PATH,
            Some(user) => user.role().map_or(LOGIN_PATH, Role::home_path),
        }
    }
}
