use std::{error::Error, fmt, panic::Location};

use serde::{Deserialize, Serialize};

use crate::Category;

/// Boxed error used as the cause of a [`StructuredError`]
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Classified error node that can wrap another error
///
/// Each node carries a [`Category`], a message, an optional origin naming the
/// call site that created it, and at most one owned cause. Only `kind` and
/// `message` are serialized.
#[derive(Debug, Serialize, Deserialize)]
pub struct StructuredError {
    #[serde(default)]
    kind: Category,
    #[serde(default)]
    message: String,
    #[serde(skip)]
    origin: Option<String>,
    #[serde(skip)]
    cause: Option<BoxError>,
}

impl StructuredError {
    /// Create an error, recording the caller's source location as its origin
    #[track_caller]
    pub fn new(kind: Category, message: impl Into<String>, cause: Option<BoxError>) -> Self {
        Self::with_origin(kind, message, Some(Location::caller().to_string()), cause)
    }

    /// Create an error with an explicitly supplied origin
    pub fn with_origin(
        kind: Category,
        message: impl Into<String>,
        origin: Option<String>,
        cause: Option<BoxError>,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            origin,
            cause,
        }
    }

    /// Create an error without a cause
    #[track_caller]
    pub fn msg(kind: Category, message: impl Into<String>) -> Self {
        Self::new(kind, message, None)
    }

    /// Create an error wrapping `cause`
    #[track_caller]
    pub fn wrap(kind: Category, message: impl Into<String>, cause: impl Into<BoxError>) -> Self {
        Self::new(kind, message, Some(cause.into()))
    }

    pub const fn kind(&self) -> Category {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    /// The wrapped error, if any
    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }
}

impl fmt::Display for StructuredError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(ref cause) = self.cause else {
            return f.write_str(&self.message);
        };

        if let Some(ref origin) = self.origin {
            write!(f, "{origin} ")?;
        }

        write!(f, "{}: {cause}", self.message)
    }
}

impl Error for StructuredError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_deref().map(|cause| cause as &(dyn Error + 'static))
    }
}
