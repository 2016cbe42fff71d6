//! Rendering error chains at the HTTP boundary
//!
//! [`respond`] classifies an error, writes the mapped status to a
//! [`ResponseSink`] and encodes the body with a caller-supplied encoder.

#![allow(clippy::must_use_candidate)]

mod body;
mod responder;
mod response;
mod sink;

pub use body::{ErrorBody, OpaqueBody, json_encoder};
pub use responder::{
    OPAQUE_CLIENT_MESSAGE, Rendered, Responder, UNKNOWN_ERROR_BODY, UNPROCESSABLE_ERROR_BODY, respond,
};
pub use response::ErrorResponse;
pub use sink::{BufferedResponse, ResponseSink};
