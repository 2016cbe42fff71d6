use faultline_core::{Category, StructuredError};
use serde::Serialize;

/// Value handed to an encoder when rendering an error
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ErrorBody<'a> {
    /// The nearest structured error in the chain
    Structured(&'a StructuredError),
    /// An error with no structured error anywhere in its chain
    Opaque(OpaqueBody),
}

/// Body for unclassified errors, shaped like a structured error
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpaqueBody {
    pub kind: Category,
    pub message: String,
}

impl OpaqueBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            kind: Category::Unknown,
            message: message.into(),
        }
    }
}

/// Encode an error body as JSON
///
/// # Errors
///
/// Returns an error if serialization fails
pub fn json_encoder(body: &ErrorBody<'_>) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(body)
}
