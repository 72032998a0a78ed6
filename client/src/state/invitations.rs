//! Pending-invitation list shown to students.

#[cfg(test)]
#[path = "invitations_test.rs"]
mod invitations_test;

use crate::net::error::ApiError;
use crate::net::types::Invitation;

pub const ACCEPTED_MESSAGE: &str = "Invitación aceptada correctamente";
pub const REJECTED_MESSAGE: &str = "Invitación rechazada";
pub const RETRY_CONNECTION_MESSAGE: &str = "Error de conexión. Inténtalo de nuevo.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PendingInvitations {
    pub items: Vec<Invitation>,
    pub loading: bool,
    /// Feedback line under the list; cleared a few seconds after it is set.
    pub message: Option<String>,
}

impl PendingInvitations {
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Drop the invitation answered with `token`.
    pub fn remove_by_token(&mut self, token: &str) {
        self.items.retain(|inv| inv.token != token);
    }
}

/// Whether a student answers an invitation with yes or no.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Accept,
    Reject,
}

impl Decision {
    pub fn success_message(self) -> &'static str {
        match self {
            Self::Accept => ACCEPTED_MESSAGE,
            Self::Reject => REJECTED_MESSAGE,
        }
    }

    fn fallback_error(self) -> &'static str {
        match self {
            Self::Accept => "Error al aceptar invitación",
            Self::Reject => "Error al rechazar invitación",
        }
    }

    /// Message for a failed accept/reject call.
    pub fn error_message(self, err: &ApiError) -> String {
        if err.is_network() {
            return RETRY_CONNECTION_MESSAGE.to_owned();
        }
        err.server_message().unwrap_or(self.fallback_error()).to_owned()
    }
}

/// Message for a failed pending-invitation load.
pub fn load_error_message(err: &ApiError) -> String {
    if err.is_network() {
        return RETRY_CONNECTION_MESSAGE.to_owned();
    }
    err.server_message().unwrap_or("Error al cargar invitaciones").to_owned()
}
