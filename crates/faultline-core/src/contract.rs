use thiserror::Error;

/// A request or model failed its own validation rules
///
/// This error carries no category. On its own it classifies as
/// [`Category::Unknown`](crate::Category::Unknown) and renders as `500`;
/// wrap it in a [`StructuredError`](crate::StructuredError) to give it one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ContractInvalid {
    message: String,
}

impl ContractInvalid {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
