//! User-facing feedback.
//!
//! A single notification slot: showing a message replaces whatever was there, hiding keeps the
//! text around so a fading display can still render it.

mod center;

pub use center::NotificationCenter;
use serde::{Deserialize, Serialize};

/// Presentation style of a notification.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    #[allow(missing_docs)]
    Info,
    #[allow(missing_docs)]
    Success,
    #[allow(missing_docs)]
    Warning,
    #[allow(missing_docs)]
    Error,
}

/// The current notification.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Notification {
    /// Text shown to the user
    pub message: String,
    /// Presentation style
    pub severity: Severity,
    /// Whether the display surface should currently show it
    pub visible: bool,
}

/// Display surface for notifications.
pub trait Notifier: Send + Sync + 'static {
    /// Replaces the current notification with a visible one.
    fn show(&self, message: String, severity: Severity);

    /// Clears visibility without clearing the message.
    fn hide(&self);
}
