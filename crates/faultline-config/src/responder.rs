use serde::Deserialize;

/// How errors are rendered at the response boundary
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResponderConfig {
    /// Send the message of unclassified errors to clients
    ///
    /// Unclassified errors may carry internal details, so by default their
    /// body only says that an internal error occurred.
    #[serde(default)]
    pub expose_opaque_messages: bool,
}
