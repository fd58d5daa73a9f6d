//! Error types for sign-in API operations.

/// A failure to obtain an interpretable response from the login endpoint.
///
/// An HTTP error status is not an error at this layer: the endpoint answers failed logins with a
/// regular body, which is returned to the caller for classification.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Could not reach the server (DNS failure, timeout, TLS error, connection refused, etc.)
    #[error("not connected: {0}")]
    NotConnected(String),

    /// The server answered, but the body was not the expected JSON envelope.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Catch-all for other errors.
    #[error("other error: {0}")]
    Other(String),
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            return Error::MalformedResponse(e.to_string());
        }

        // Connection errors, timeouts and errors sending requests all indicate a failure to
        // communicate with the server.
        if e.is_connect() || e.is_timeout() || e.is_request() {
            return Error::NotConnected(e.to_string());
        }

        Error::Other(e.to_string())
    }
}

impl From<reqwest_middleware::Error> for Error {
    fn from(e: reqwest_middleware::Error) -> Self {
        match e {
            reqwest_middleware::Error::Reqwest(e) => e.into(),
            reqwest_middleware::Error::Middleware(e) => Error::Other(e.to_string()),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::MalformedResponse(e.to_string())
    }
}
