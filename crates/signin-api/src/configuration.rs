//! Configuration types for the sign-in API client.

/// Configuration for the sign-in API client.
#[derive(Debug, Clone)]
pub struct Configuration {
    /// Base URL of the application serving the login endpoint (e.g. "<http://localhost:3000>").
    pub base_path: String,
    /// HTTP client with middleware support.
    pub client: reqwest_middleware::ClientWithMiddleware,
    /// User-Agent header value to be sent with requests.
    pub user_agent: Option<String>,
}

impl Configuration {
    /// Creates a configuration using a plain client without any middleware.
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            client: reqwest::Client::new().into(),
            user_agent: None,
        }
    }

    /// Joins `path` onto the base path, tolerating a trailing slash on the base.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_path.trim_end_matches('/'), path)
    }
}
