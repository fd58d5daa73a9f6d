//! Session token persistence.
//!
//! The controller only ever writes the token through [SessionStore]. [InMemorySessionStore] is the
//! process-wide holder used by applications; it also provides the middleware that attaches the
//! token to subsequent authenticated requests.

mod middleware;

use std::sync::{Arc, RwLock};

pub use middleware::SessionMiddleware;

/// Sink for the session token issued by the login endpoint.
pub trait SessionStore: Send + Sync + 'static {
    /// Overwrites the held token unconditionally.
    fn set_session(&self, token: String);
}

/// Shared in-memory session holder. Clones share the same token.
#[derive(Clone, Default)]
pub struct InMemorySessionStore {
    inner: Arc<RwLock<Option<String>>>,
}

impl InMemorySessionStore {
    /// The currently held token, if any.
    pub fn token(&self) -> Option<String> {
        self.inner.read().expect("RwLock is not poisoned").clone()
    }

    /// Forgets the held token.
    pub fn clear(&self) {
        *self.inner.write().expect("RwLock is not poisoned") = None;
    }

    /// Middleware attaching the held token to requests marked with
    /// [AuthRequired::Bearer](signin_api::AuthRequired::Bearer).
    pub fn middleware(&self) -> Arc<dyn reqwest_middleware::Middleware> {
        Arc::new(SessionMiddleware::new(self.clone()))
    }
}

impl SessionStore for InMemorySessionStore {
    fn set_session(&self, token: String) {
        *self.inner.write().expect("RwLock is not poisoned") = Some(token);
    }
}

impl std::fmt::Debug for InMemorySessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemorySessionStore")
            .field("has_token", &self.token().is_some())
            .finish()
    }
}
