//! Host configuration parsed from environment variables.

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";
pub const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key}: {value:?}")]
    Invalid { key: &'static str, value: String },

    #[error("BACKEND_URL must start with http:// or https://, got {0:?}")]
    BackendScheme(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl BackendTimeouts {
    pub fn request(self) -> Duration {
        Duration::from_secs(self.request_secs)
    }

    pub fn connect(self) -> Duration {
        Duration::from_secs(self.connect_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Course backend base URL, without a trailing slash.
    pub backend_url: String,
    pub timeouts: BackendTimeouts,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BACKEND_URL`: default `http://localhost:8080`
    /// - `BACKEND_TIMEOUT_SECS`: default 30
    /// - `BACKEND_CONNECT_TIMEOUT_SECS`: default 5
    ///
    /// # Errors
    ///
    /// A `PORT` that is not a port number, or a `BACKEND_URL` without an
    /// http(s) scheme.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let backend_url = normalize_backend_url(std::env::var("BACKEND_URL").ok().as_deref())?;
        let timeouts = BackendTimeouts {
            request_secs: env_parse_u64("BACKEND_TIMEOUT_SECS", DEFAULT_BACKEND_TIMEOUT_SECS),
            connect_secs: env_parse_u64("BACKEND_CONNECT_TIMEOUT_SECS", DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS),
        };
        Ok(Self { port, backend_url, timeouts })
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default)
}

pub(crate) fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| ConfigError::Invalid { key: "PORT", value: value.to_owned() }),
    }
}

pub(crate) fn normalize_backend_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let url = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_BACKEND_URL);
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ConfigError::BackendScheme(url.to_owned()));
    }
    Ok(url.trim_end_matches('/').to_owned())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
