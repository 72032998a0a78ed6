//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the pooled HTTP client used to reach the course backend and the
//! backend base URL. Clone is cheap: both fields are reference counted.

use std::sync::Arc;

use crate::config::HostConfig;
use crate::proxy::ProxyError;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub backend_url: Arc<str>,
}

impl AppState {
    /// Build the backend client with the configured timeouts.
    ///
    /// # Errors
    ///
    /// The TLS backend could not be initialized.
    pub fn new(config: &HostConfig) -> Result<Self, ProxyError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeouts.request())
            .connect_timeout(config.timeouts.connect())
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| ProxyError::ClientBuild(e.to_string()))?;
        Ok(Self { http, backend_url: Arc::from(config.backend_url.as_str()) })
    }
}
