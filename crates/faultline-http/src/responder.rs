use std::{error::Error, fmt::Display};

use faultline_config::ResponderConfig;
use faultline_core::{HttpError, find_structured};
use http::StatusCode;

use crate::{ErrorBody, OpaqueBody, ResponseSink};

/// Body written when an unclassified error cannot be encoded
pub const UNKNOWN_ERROR_BODY: &str = "Unknown error";

/// Body written when a structured error cannot be encoded
pub const UNPROCESSABLE_ERROR_BODY: &str = "Unable to process error";

/// Message sent for unclassified errors unless their messages are exposed
pub const OPAQUE_CLIENT_MESSAGE: &str = "an internal error occurred";

/// What [`Responder::respond`] wrote to the sink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rendered {
    pub status: StatusCode,
    /// `false` when a plain-text fallback body was written instead
    pub encoded: bool,
}

/// Renders error chains into a status and body
#[derive(Debug, Clone, Default)]
pub struct Responder {
    expose_opaque_messages: bool,
}

impl Responder {
    pub fn new(config: &ResponderConfig) -> Self {
        Self {
            expose_opaque_messages: config.expose_opaque_messages,
        }
    }

    /// Write the status and body for `err` to `sink`
    ///
    /// The status comes from the category of the outermost structured error
    /// in the chain, or `500` when there is none. The body is produced by
    /// `encode`; if encoding fails a fixed plain-text body is written. Exactly
    /// one status and one body are written.
    pub fn respond<S, F, E>(&self, err: &(dyn Error + 'static), sink: &mut S, encode: F) -> Rendered
    where
        S: ResponseSink + ?Sized,
        F: FnOnce(&ErrorBody<'_>) -> Result<Vec<u8>, E>,
        E: Display,
    {
        let Some(structured) = find_structured(err) else {
            tracing::error!(error = %err, "unclassified error reached the response boundary");

            let message = if self.expose_opaque_messages {
                err.to_string()
            } else {
                OPAQUE_CLIENT_MESSAGE.to_owned()
            };

            return write(
                sink,
                StatusCode::INTERNAL_SERVER_ERROR,
                encode(&ErrorBody::Opaque(OpaqueBody::new(message))),
                UNKNOWN_ERROR_BODY,
            );
        };

        let status = structured.status_code();
        let kind = structured.error_type();

        if status.is_server_error() {
            tracing::error!(error = %err, kind, status = status.as_u16(), "responding with server error");
        } else {
            tracing::debug!(error = %err, kind, status = status.as_u16(), "responding with client error");
        }

        write(
            sink,
            status,
            encode(&ErrorBody::Structured(structured)),
            UNPROCESSABLE_ERROR_BODY,
        )
    }
}

/// Render `err` with the default [`Responder`]
pub fn respond<S, F, E>(err: &(dyn Error + 'static), sink: &mut S, encode: F) -> Rendered
where
    S: ResponseSink + ?Sized,
    F: FnOnce(&ErrorBody<'_>) -> Result<Vec<u8>, E>,
    E: Display,
{
    Responder::default().respond(err, sink, encode)
}

fn write<S, E>(sink: &mut S, status: StatusCode, encoded: Result<Vec<u8>, E>, fallback: &str) -> Rendered
where
    S: ResponseSink + ?Sized,
    E: Display,
{
    sink.write_status(status);

    match encoded {
        Ok(body) => {
            sink.write_body(&body);
            Rendered { status, encoded: true }
        }
        Err(e) => {
            tracing::warn!(error = %e, fallback, "failed to encode error body");
            sink.write_body(fallback.as_bytes());
            Rendered { status, encoded: false }
        }
    }
}
