use http::{Response, StatusCode};

/// Destination for a rendered error response
///
/// Callers own the sink for the duration of a single response.
pub trait ResponseSink {
    /// Set the response status
    fn write_status(&mut self, status: StatusCode);

    /// Append bytes to the response body
    fn write_body(&mut self, body: &[u8]);
}

impl ResponseSink for Response<Vec<u8>> {
    fn write_status(&mut self, status: StatusCode) {
        *self.status_mut() = status;
    }

    fn write_body(&mut self, body: &[u8]) {
        self.body_mut().extend_from_slice(body);
    }
}

/// In-memory sink capturing a status and body
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BufferedResponse {
    status: Option<StatusCode>,
    body: Vec<u8>,
}

impl BufferedResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Written status, `500` if none was written
    pub fn status(&self) -> StatusCode {
        self.status.unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Convert into an `http` response with the captured status and body
    pub fn into_response(self) -> Response<Vec<u8>> {
        let status = self.status();
        let mut response = Response::new(self.body);
        *response.status_mut() = status;
        response
    }
}

impl ResponseSink for BufferedResponse {
    fn write_status(&mut self, status: StatusCode) {
        debug_assert!(self.status.is_none(), "response status written twice");
        self.status = Some(status);
    }

    fn write_body(&mut self, body: &[u8]) {
        self.body.extend_from_slice(body);
    }
}
