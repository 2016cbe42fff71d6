use http::StatusCode;

use crate::StructuredError;

/// Error that knows how it is presented at an HTTP boundary
///
/// The responder looks up the status and the logged error type through this
/// trait once it has found the classifying node of a chain.
pub trait HttpError: std::error::Error {
    fn status_code(&self) -> StatusCode;

    /// Stable identifier of the failure class, e.g. `NotFound`
    fn error_type(&self) -> &str;

    /// Text a client may see; never includes the cause chain
    fn client_message(&self) -> String;
}

impl HttpError for StructuredError {
    fn status_code(&self) -> StatusCode {
        self.kind().status_code()
    }

    fn error_type(&self) -> &str {
        self.kind().as_str()
    }

    fn client_message(&self) -> String {
        self.message().to_owned()
    }
}
