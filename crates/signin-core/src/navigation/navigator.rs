use std::{sync::Arc, time::Duration};

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::Router;
use crate::notification::Notifier;

/// Route of the authenticated area.
pub const DEFAULT_REDIRECT_ROUTE: &str = "/dashboard";
/// How long the outcome notification stays on screen before redirecting.
pub const DEFAULT_REDIRECT_DELAY: Duration = Duration::from_millis(3000);

/// Schedules the deferred redirect that follows a successful login.
#[derive(Debug, Clone)]
pub struct Navigator {
    route: String,
    delay: Duration,
}

impl Navigator {
    /// Creates a navigator redirecting to `route` after `delay`.
    pub fn new(route: impl Into<String>, delay: Duration) -> Self {
        Self {
            route: route.into(),
            delay,
        }
    }

    /// The route redirected to.
    pub fn route(&self) -> &str {
        &self.route
    }

    /// The delay before redirecting.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Starts the delay. When it expires the router replaces the current view, then the
    /// notification is hidden. Must be called from within a tokio runtime.
    pub fn schedule<R, N>(&self, router: Arc<R>, notifier: Arc<N>) -> PendingRedirect
    where
        R: Router,
        N: Notifier,
    {
        let token = CancellationToken::new();
        let cancelled = token.clone();
        let route = self.route.clone();
        let delay = self.delay;

        let handle = tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = cancelled.cancelled() => {
                    tracing::debug!(route = %route, "Redirect cancelled");
                    false
                }
                _ = tokio::time::sleep(delay) => {
                    router.replace(&route);
                    notifier.hide();
                    true
                }
            }
        });

        PendingRedirect { token, handle }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(DEFAULT_REDIRECT_ROUTE, DEFAULT_REDIRECT_DELAY)
    }
}

/// A redirect waiting for its delay to expire.
///
/// Dropping the handle does not cancel the redirect.
#[derive(Debug)]
pub struct PendingRedirect {
    token: CancellationToken,
    handle: JoinHandle<bool>,
}

impl PendingRedirect {
    /// Prevents the redirect from happening if the delay has not expired yet.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// True once the redirect either happened or was cancelled.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Waits for the delay to expire or for cancellation. Returns whether the redirect happened.
    pub async fn wait(self) -> bool {
        match self.handle.await {
            Ok(redirected) => redirected,
            Err(e) => {
                tracing::error!("Redirect task failed: {e}");
                false
            }
        }
    }
}
