//! Same-origin forwarding of `/api/*` and `/auth/*` to the course backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only talks to this host. Requests are replayed against
//! `BACKEND_URL` with their method, path, query, body and the few headers the
//! backend reads; the backend's status, content type and body come back
//! untouched so the client sees the backend's own error signaling.
//!
//! ERROR HANDLING
//! ==============
//! Only transport failures are ours: an unreachable backend answers 502 and a
//! timeout 504, both with the `{ success: false, message }` body the client
//! already knows how to read.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::header::{self, HeaderMap, HeaderName};
use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::state::AppState;

/// Request headers passed through to the backend.
const FORWARDED_REQUEST_HEADERS: [HeaderName; 4] =
    [header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT, header::ACCEPT_LANGUAGE];

/// Response headers passed back to the browser.
const FORWARDED_RESPONSE_HEADERS: [HeaderName; 4] =
    [header::CONTENT_TYPE, header::CACHE_CONTROL, header::LOCATION, header::SET_COOKIE];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("backend unreachable: {0}")]
    Unreachable(String),

    #[error("backend timed out")]
    Timeout,

    #[error("backend response unreadable: {0}")]
    Body(String),

    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
            Self::Unreachable(_) | Self::Body(_) => StatusCode::BAD_GATEWAY,
            Self::ClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to the user by the client.
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::Timeout => "El servidor tardó demasiado en responder",
            Self::Unreachable(_) | Self::Body(_) | Self::ClientBuild(_) => "No se pudo contactar al servidor",
        }
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() { Self::Timeout } else { Self::Unreachable(e.to_string()) }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "success": false, "message": self.public_message() });
        (self.status(), Json(body)).into_response()
    }
}

/// Backend URL for an incoming request path and query.
pub fn upstream_url(backend_url: &str, uri: &Uri) -> String {
    let path_and_query = uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str());
    format!("{}{path_and_query}", backend_url.trim_end_matches('/'))
}

/// Copy the allow-listed headers from `from`.
fn pick_headers(from: &HeaderMap, names: &[HeaderName]) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in names {
        for value in from.get_all(name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

/// Forward one request to the backend and relay its answer.
pub async fn forward(State(state): State<AppState>, method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> Response {
    match relay(&state, method, &uri, &headers, body).await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!(error = %e, path = %uri.path(), "backend request failed");
            e.into_response()
        }
    }
}

async fn relay(state: &AppState, method: Method, uri: &Uri, headers: &HeaderMap, body: Bytes) -> Result<Response, ProxyError> {
    let url = upstream_url(&state.backend_url, uri);
    let upstream = state
        .http
        .request(method.clone(), &url)
        .headers(pick_headers(headers, &FORWARDED_REQUEST_HEADERS))
        .body(body)
        .send()
        .await?;

    let status = upstream.status();
    let response_headers = pick_headers(upstream.headers(), &FORWARDED_RESPONSE_HEADERS);
    let bytes = upstream.bytes().await.map_err(|e| ProxyError::Body(e.to_string()))?;
    tracing::debug!(%method, path = %uri.path(), status = status.as_u16(), "proxied");

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = response_headers;
    Ok(response)
}
