use std::fmt::Display;

use axum::{
    body::Body,
    http::{HeaderValue, header},
    response::{IntoResponse, Response},
};
use faultline_core::BoxError;

use crate::{BufferedResponse, ErrorBody, Responder, json_encoder};

/// Error wrapper that implements `IntoResponse`
///
/// Converts from any error so handlers can use `?`, then renders the chain
/// as JSON through the default [`Responder`].
///
/// `anyhow::Error` and [`BoxError`] do not implement `std::error::Error`, so
/// `?` cannot convert them. Map them with [`ErrorResponse::new`] instead:
///
/// ```ignore
/// async fn handler() -> Result<String, ErrorResponse> {
///     load().context("load device").map_err(ErrorResponse::new)
/// }
/// ```
#[derive(Debug)]
pub struct ErrorResponse(BoxError);

impl ErrorResponse {
    /// Wrap anything that converts into a boxed error, including
    /// `anyhow::Error` and [`BoxError`] itself
    pub fn new(err: impl Into<BoxError>) -> Self {
        Self(err.into())
    }

    /// Render as JSON with a specific responder instead of the default one
    pub fn render_with(self, responder: &Responder) -> Response {
        self.render_with_encoder(responder, "application/json", json_encoder)
    }

    /// Render with a custom body encoder
    ///
    /// `content_type` is sent when `encode` succeeds. When it fails the
    /// responder's plain-text fallback body is sent as `text/plain`.
    pub fn render_with_encoder<F, E>(self, responder: &Responder, content_type: &'static str, encode: F) -> Response
    where
        F: FnOnce(&ErrorBody<'_>) -> Result<Vec<u8>, E>,
        E: Display,
    {
        let mut sink = BufferedResponse::new();
        let rendered = responder.respond(&*self.0, &mut sink, encode);

        let content_type = if rendered.encoded {
            HeaderValue::from_static(content_type)
        } else {
            HeaderValue::from_static("text/plain; charset=utf-8")
        };

        let mut response = sink.into_response().map(Body::from);
        response.headers_mut().insert(header::CONTENT_TYPE, content_type);
        response
    }
}

impl<E> From<E> for ErrorResponse
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn from(err: E) -> Self {
        Self(Box::new(err))
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        self.render_with(&Responder::default())
    }
}
