//! Test application whose handlers fail in different ways

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{Request, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use faultline_config::ResponderConfig;
use faultline_core::{Category, ResultExt, ServiceClientError, StructuredError};
use anyhow::Context;
use faultline_http::{ErrorBody, ErrorResponse, Responder};
use tower::ServiceExt;

/// Opaque service-layer wrapper around a domain error
#[derive(Debug, thiserror::Error)]
#[error("device service failed")]
pub struct ServiceError(#[source] StructuredError);

fn lookup_row(id: &str) -> std::io::Result<String> {
    Err(std::io::Error::new(std::io::ErrorKind::NotFound, format!("row {id}")))
}

fn load_device(id: &str) -> Result<String, ServiceError> {
    lookup_row(id)
        .kind_context(Category::Database, "query device table")
        .with_kind_context(Category::NotFound, || format!("device {id} not found"))
        .map_err(ServiceError)
}

async fn missing_device() -> Result<String, ErrorResponse> {
    Ok(load_device("thermostat-01")?)
}

async fn locked_device() -> Result<&'static str, ErrorResponse> {
    Err(ServiceError(StructuredError::msg(Category::InvalidState, "device is locked")).into())
}

async fn oversized_batch() -> Result<&'static str, ErrorResponse> {
    Err(StructuredError::msg(Category::LimitExceeded, "batch exceeds 1000 readings").into())
}

async fn disk_failure() -> Result<&'static str, ErrorResponse> {
    Err(std::io::Error::other("disk quota exceeded on /var/lib/devices").into())
}

async fn remote_failure() -> Result<&'static str, ErrorResponse> {
    let client_err = ServiceClientError::new(404, r#"{"kind":"NotFound","message":"profile missing"}"#);
    let err = client_err.to_structured()?;
    Err(err.into())
}

async fn locked_device_as_xml() -> Response {
    let err = ErrorResponse::from(StructuredError::msg(Category::InvalidState, "device is locked"));
    err.render_with_encoder(&Responder::default(), "application/xml", |_: &ErrorBody<'_>| {
        Err::<Vec<u8>, _>("no xml encoder registered")
    })
}

async fn dashboard_refresh() -> Result<String, ErrorResponse> {
    load_device("hygrometer-02")
        .context("refresh dashboard")
        .map_err(ErrorResponse::new)
}

async fn configured_failure(State(responder): State<Arc<Responder>>) -> Response {
    ErrorResponse::from(std::io::Error::other("connection pool exhausted")).render_with(&responder)
}

async fn healthy() -> impl IntoResponse {
    "ok"
}

/// Build the router, rendering `/configured` with `config`
pub fn router(config: &ResponderConfig) -> Router {
    Router::new()
        .route("/health", get(healthy))
        .route("/devices/missing", get(missing_device))
        .route("/devices/locked", get(locked_device))
        .route("/devices/locked.xml", get(locked_device_as_xml))
        .route("/dashboard", get(dashboard_refresh))
        .route("/readings", get(oversized_batch))
        .route("/disk", get(disk_failure))
        .route("/remote", get(remote_failure))
        .route("/configured", get(configured_failure))
        .with_state(Arc::new(Responder::new(config)))
}

/// Response captured from a single request
pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).unwrap()
    }
}

/// Send a GET request through the router without binding a socket
pub async fn get_path(router: Router, path: &str) -> TestResponse {
    let request = Request::builder().uri(path).body(Body::empty()).unwrap();
    let response = router.oneshot(request).await.unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|value| value.to_str().unwrap().to_owned());
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec();

    TestResponse {
        status,
        content_type,
        body,
    }
}
