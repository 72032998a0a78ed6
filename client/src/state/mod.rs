//! Client-side state shared between pages and components.
//!
//! Auth state lives in context for the whole app; the rest is page-scoped
//! and held in signals by the page that owns it.

pub mod auth;
pub mod grades;
pub mod invitations;
