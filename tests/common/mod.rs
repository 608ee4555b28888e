// Each integration test file is a separate binary; helpers not used in every
// binary would otherwise trigger dead_code warnings from clippy.
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    routing::{self, post},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tower::ServiceExt;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

use saveit_server::{handlers, state::AppState};

pub const TEST_TOKEN: &str = "secret_test_integration_token";
pub const TEST_DATABASE_ID: &str = "0f1e2d3c4b5a69788796a5b4c3d2e1f0";

/// Build the application router with Notion pointed at `notion_api_url`.
pub fn create_test_app(notion_api_url: &str) -> Router {
    Router::new()
        .route("/health", routing::get(handlers::health_check))
        .route("/", post(handlers::save_it::save_it))
        .with_state(AppState::new(notion_api_url))
}

/// A canned HTML page with the given title and optional `og:image`.
pub fn html_page(title: &str, image: Option<&str>) -> String {
    let meta = image
        .map(|src| format!(r#"<meta property="og:image" content="{src}"/>"#))
        .unwrap_or_default();
    format!("<html><head><title>{title}</title>{meta}</head><body><p>hi</p></body></html>")
}

/// Serve `html` with status 200 at `route` on `server`.
pub async fn mount_page(server: &MockServer, route: &str, html: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .mount(server)
        .await;
}

/// Serve one response that promises more body than it sends, then hang up.
/// Returns the URL to fetch.
pub async fn serve_truncated_page() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 4096];
        let _ = socket.read(&mut buf).await;
        let _ = socket
            .write_all(
                b"HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: 500\r\n\r\n<title>x",
            )
            .await;
        let _ = socket.shutdown().await;
    });

    format!("http://{addr}/truncated")
}

/// Answer `POST /v1/pages` on `server` with `status` and `body`.
pub async fn mount_notion(server: &MockServer, status: u16, body: Value) {
    Mock::given(method("POST"))
        .and(path("/v1/pages"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

/// A well-formed SaveIt request body for `url`.
pub fn save_request(url: &str, tags: &str) -> Value {
    json!({
        "integrationToken": TEST_TOKEN,
        "databaseId": TEST_DATABASE_ID,
        "url": url,
        "tags": tags,
    })
}

/// Bodies of every `POST /v1/pages` the mock Notion received, as JSON.
pub async fn notion_payloads(server: &MockServer) -> Vec<Value> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|r| r.url.path() == "/v1/pages")
        .map(|r| serde_json::from_slice(&r.body).unwrap())
        .collect()
}

// ── Request helpers ──────────────────────────────────────────────────────────

pub async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    post_raw(app, uri, body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, body: impl Into<String>) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))
        .unwrap();
    send(app, req).await
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, req).await
}

async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}
