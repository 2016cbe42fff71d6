//! Decoding errors reported by remote services
//!
//! Service clients surface failures as `"<prefix>-<json-payload>"`, where the
//! payload is a serialized [`StructuredError`].

use thiserror::Error;

use crate::{Category, StructuredError};

/// Separates the client prefix from the serialized error payload
pub const REMOTE_DELIMITER: char = '-';

/// Message used when the remote payload cannot be decoded
pub const CLIENT_ERROR_MESSAGE: &str = "Client error";

/// Remote error string without a payload delimiter
#[derive(Debug, Error, PartialEq, Eq)]
#[error("malformed remote error: no `-` delimiter in {input:?}")]
pub struct MalformedRemoteError {
    input: String,
}

impl MalformedRemoteError {
    /// The rejected input
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Decode a remote error string into a [`StructuredError`]
///
/// Everything after the first delimiter is parsed as the payload. A payload
/// that fails to deserialize yields a [`Category::ServerError`] carrying the
/// decode failure as its cause.
///
/// # Errors
///
/// Returns [`MalformedRemoteError`] if `raw` has no delimiter
pub fn decode_remote(raw: &str) -> Result<StructuredError, MalformedRemoteError> {
    let Some((prefix, payload)) = raw.split_once(REMOTE_DELIMITER) else {
        return Err(MalformedRemoteError { input: raw.to_owned() });
    };

    match serde_json::from_str::<StructuredError>(payload.trim()) {
        Ok(err) => Ok(err),
        Err(e) => {
            tracing::debug!(prefix = prefix.trim(), error = %e, "undecodable remote error payload");
            Ok(StructuredError::wrap(Category::ServerError, CLIENT_ERROR_MESSAGE, e))
        }
    }
}

/// Error returned by a remote service client
///
/// Displays as `"<status> - <body>"`, the format [`decode_remote`] expects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{status_code} - {body}")]
pub struct ServiceClientError {
    pub status_code: u16,
    pub body: String,
}

impl ServiceClientError {
    pub fn new(status_code: u16, body: impl Into<String>) -> Self {
        Self {
            status_code,
            body: body.into(),
        }
    }

    /// Recover the structured error carried in the response body
    ///
    /// # Errors
    ///
    /// Returns [`MalformedRemoteError`] if the rendered error has no delimiter
    pub fn to_structured(&self) -> Result<StructuredError, MalformedRemoteError> {
        decode_remote(&self.to_string())
    }
}
