use crate::{BoxError, Category, StructuredError};

/// Attach a [`Category`] and message to the error of a `Result`
///
/// The created [`StructuredError`] records the call site of the extension
/// method as its origin and keeps the original error as its cause.
pub trait ResultExt<T> {
    /// Wrap the error with `kind` and `message`
    ///
    /// # Errors
    ///
    /// Returns the wrapped error if `self` is `Err`
    fn kind_context(self, kind: Category, message: impl Into<String>) -> Result<T, StructuredError>;

    /// Wrap the error with `kind` and a lazily built message
    ///
    /// # Errors
    ///
    /// Returns the wrapped error if `self` is `Err`
    fn with_kind_context<M, F>(self, kind: Category, message: F) -> Result<T, StructuredError>
    where
        M: Into<String>,
        F: FnOnce() -> M;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<BoxError>,
{
    #[track_caller]
    fn kind_context(self, kind: Category, message: impl Into<String>) -> Result<T, StructuredError> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(StructuredError::new(kind, message, Some(err.into()))),
        }
    }

    #[track_caller]
    fn with_kind_context<M, F>(self, kind: Category, message: F) -> Result<T, StructuredError>
    where
        M: Into<String>,
        F: FnOnce() -> M,
    {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(StructuredError::new(kind, message(), Some(err.into()))),
        }
    }
}
