use reqwest_middleware::Middleware;
use signin_api::AuthRequired;

use super::InMemorySessionStore;

/// Attaches the session token as a bearer `Authorization` header. Only applies to requests
/// marked with [AuthRequired].
pub struct SessionMiddleware {
    store: InMemorySessionStore,
}

impl SessionMiddleware {
    /// Creates a middleware reading from `store`.
    pub fn new(store: InMemorySessionStore) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl Middleware for SessionMiddleware {
    async fn handle(
        &self,
        mut req: reqwest::Request,
        ext: &mut http::Extensions,
        next: reqwest_middleware::Next<'_>,
    ) -> Result<reqwest::Response, reqwest_middleware::Error> {
        if let Some(AuthRequired::Bearer) = ext.get::<AuthRequired>() {
            match self.store.token() {
                Some(token) => match format!("Bearer {}", token).parse() {
                    Ok(header_value) => {
                        req.headers_mut()
                            .insert(http::header::AUTHORIZATION, header_value);
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse session token for header: {e}");
                    }
                },
                None => {
                    tracing::warn!(
                        "No session token available for request requiring authentication"
                    );
                }
            }
        }

        next.run(req, ext).await
    }
}
