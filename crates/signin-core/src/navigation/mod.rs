//! Transition into the authenticated area.

mod navigator;

use std::sync::RwLock;

pub use navigator::{Navigator, PendingRedirect, DEFAULT_REDIRECT_DELAY, DEFAULT_REDIRECT_ROUTE};

/// Routing surface able to replace the current view.
pub trait Router: Send + Sync + 'static {
    /// Replaces the current view with `route`, without adding a history entry.
    fn replace(&self, route: &str);
}

/// In-memory [Router] remembering every route it was sent to.
#[derive(Debug, Default)]
pub struct HistoryRouter {
    history: RwLock<Vec<String>>,
}

impl HistoryRouter {
    /// The route currently displayed, if any navigation happened.
    pub fn current(&self) -> Option<String> {
        self.history
            .read()
            .expect("RwLock is not poisoned")
            .last()
            .cloned()
    }

    /// Every route navigated to, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.history.read().expect("RwLock is not poisoned").clone()
    }
}

impl Router for HistoryRouter {
    fn replace(&self, route: &str) {
        tracing::debug!(route, "Replacing current view");
        self.history
            .write()
            .expect("RwLock is not poisoned")
            .push(route.to_string());
    }
}
