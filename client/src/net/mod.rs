//! Networking: REST helpers, wire types, and the shared error type.

pub mod api;
pub mod error;
pub mod types;
