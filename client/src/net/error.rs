//! Error taxonomy for REST calls.
//!
//! Pages only need to tell apart "could not reach the server", "the server
//! said no" and "the server said something unreadable"; each page then turns
//! the variant into its own user-facing sentence.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a single REST call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, DNS, CORS, proxy down).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("request failed ({status}): {}", .message.as_deref().unwrap_or("no details"))]
    Status { status: u16, message: Option<String> },
    /// The body could not be decoded into the expected shape.
    #[error("invalid response: {0}")]
    Decode(String),
    /// A 2xx envelope carried `success: false`.
    #[error("rejected: {}", .0.as_deref().unwrap_or("no details"))]
    Rejected(Option<String>),
    /// Browser-only call attempted during server rendering.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Server-provided message carried by the error, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } | Self::Rejected(message) => message.as_deref(),
            _ => None,
        }
    }

    /// HTTP status for `Status` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

/// Pull a human message out of an error body.
///
/// The backend is inconsistent about the key: `message` for envelopes,
/// `error` for entrega/registro failures, `detail` for framework errors.
pub fn error_message_from_body(body: &serde_json::Value) -> Option<String> {
    ["message", "detail", "error"].into_iter().find_map(|key| {
        body.get(key)
            .and_then(serde_json::Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToOwned::to_owned)
    })
}
