use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use axum::extract::Query;
use axum::routing::{get, post};
use serde_json::{Value, json};

use super::*;
use crate::config::{BackendTimeouts, HostConfig};

async fn spawn(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

fn host_state(backend_url: String, request_secs: u64) -> AppState {
    let config = HostConfig { port: 0, backend_url, timeouts: BackendTimeouts { request_secs, connect_secs: 1 } };
    AppState::new(&config).unwrap()
}

/// Stand-in for the course backend.
fn fake_backend() -> Router {
    Router::new()
        .route(
            "/auth/login",
            post(|headers: HeaderMap, Json(body): Json<Value>| async move {
                let bearer = headers.get("authorization").and_then(|v| v.to_str().ok()).map(str::to_owned);
                Json(json!({ "success": true, "echo": body, "authorization": bearer }))
            }),
        )
        .route(
            "/api/invitaciones/pendientes",
            get(|Query(q): Query<std::collections::HashMap<String, String>>| async move {
                Json(json!({ "success": true, "data": [], "correo": q.get("correo") }))
            }),
        )
        .route(
            "/api/secciones/profesor-id/{id}",
            get(|| async { (StatusCode::NOT_FOUND, Json(json!({ "success": false, "message": "No es profesor" }))) }),
        )
        .route(
            "/api/tareas/seccion/{id}",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(3)).await;
                Json(json!({ "success": true, "tareas": [] }))
            }),
        )
}

#[test]
fn upstream_url_keeps_path_and_query() {
    let uri: Uri = "/api/invitaciones/pendientes?correo=a%40b.pe".parse().unwrap();
    assert_eq!(
        upstream_url("http://backend:8080/", &uri),
        "http://backend:8080/api/invitaciones/pendientes?correo=a%40b.pe"
    );
    let uri: Uri = "/auth/login".parse().unwrap();
    assert_eq!(upstream_url("http://backend:8080", &uri), "http://backend:8080/auth/login");
}

#[test]
fn errors_map_to_gateway_statuses() {
    assert_eq!(ProxyError::Timeout.status(), StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(ProxyError::Unreachable("refused".into()).status(), StatusCode::BAD_GATEWAY);
    assert_eq!(ProxyError::Body("eof".into()).status(), StatusCode::BAD_GATEWAY);
}

#[test]
fn only_allow_listed_headers_are_picked() {
    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, "Bearer t".parse().unwrap());
    headers.insert(header::HOST, "localhost:3000".parse().unwrap());
    headers.insert(header::CONTENT_TYPE, "application/json".parse().unwrap());

    let picked = pick_headers(&headers, &FORWARDED_REQUEST_HEADERS);
    assert_eq!(picked.len(), 2);
    assert!(picked.get(header::HOST).is_none());
}

#[tokio::test]
async fn forwards_body_headers_and_query() {
    let backend = spawn(fake_backend()).await;
    let host = spawn(crate::routes::api_routes(host_state(format!("http://{backend}"), 5))).await;
    let http = reqwest::Client::new();

    let res = http
        .post(format!("http://{host}/auth/login"))
        .bearer_auth("tok-1")
        .json(&json!({ "email": "profe1", "password": "x" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["echo"]["email"], "profe1");
    assert_eq!(body["authorization"], "Bearer tok-1");

    let res = http
        .get(format!("http://{host}/api/invitaciones/pendientes?correo=alumno1%40uni.pe"))
        .send()
        .await
        .unwrap();
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["correo"], "alumno1@uni.pe");
}

#[tokio::test]
async fn relays_backend_error_statuses_untouched() {
    let backend = spawn(fake_backend()).await;
    let host = spawn(crate::routes::api_routes(host_state(format!("http://{backend}"), 5))).await;

    let res = reqwest::get(format!("http://{host}/api/secciones/profesor-id/9")).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "No es profesor");
}

#[tokio::test]
async fn unreachable_backend_is_bad_gateway() {
    let closed = {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    let host = spawn(crate::routes::api_routes(host_state(format!("http://{closed}"), 5))).await;

    let res = reqwest::get(format!("http://{host}/api/secciones/profesor-id/1")).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_GATEWAY);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "No se pudo contactar al servidor");
}

#[tokio::test]
async fn slow_backend_is_gateway_timeout() {
    let backend = spawn(fake_backend()).await;
    let host = spawn(crate::routes::api_routes(host_state(format!("http://{backend}"), 1))).await;

    let res = reqwest::get(format!("http://{host}/api/tareas/seccion/4")).await.unwrap();
    assert_eq!(res.status(), StatusCode::GATEWAY_TIMEOUT);
}

#[tokio::test]
async fn healthz_answers_ok() {
    let host = spawn(crate::routes::api_routes(host_state("http://127.0.0.1:9".to_owned(), 1))).await;
    let res = reqwest::get(format!("http://{host}/healthz")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}
