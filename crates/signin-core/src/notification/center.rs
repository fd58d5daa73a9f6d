use tokio::sync::watch;

use super::{Notification, Notifier, Severity};

/// Single-slot [Notifier] that display surfaces can observe through [NotificationCenter::subscribe].
pub struct NotificationCenter {
    slot: watch::Sender<Notification>,
}

impl NotificationCenter {
    /// A snapshot of the current notification.
    pub fn current(&self) -> Notification {
        self.slot.borrow().clone()
    }

    /// Receives every subsequent change of the notification.
    pub fn subscribe(&self) -> watch::Receiver<Notification> {
        self.slot.subscribe()
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        let (slot, _) = watch::channel(Notification::default());
        Self { slot }
    }
}

impl Notifier for NotificationCenter {
    fn show(&self, message: String, severity: Severity) {
        tracing::debug!(?severity, "Showing notification");
        self.slot.send_replace(Notification {
            message,
            severity,
            visible: true,
        });
    }

    fn hide(&self) {
        self.slot.send_modify(|notification| notification.visible = false);
    }
}
