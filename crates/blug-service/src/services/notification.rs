//! Transient user-facing notifications
//!
//! The reaction controller pushes toast-style events here; the presentation
//! layer drains them after each interaction.

use serde::Serialize;
use tokio::sync::mpsc;
use tracing::trace;

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

/// Link attached to a notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallToAction {
    pub label: String,
    pub href: String,
}

/// A single notification event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<CallToAction>,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Info,
            message: message.into(),
            action: None,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
            action: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
            action: None,
        }
    }

    /// Attach a call-to-action link
    pub fn with_action(mut self, label: impl Into<String>, href: impl Into<String>) -> Self {
        self.action = Some(CallToAction {
            label: label.into(),
            href: href.into(),
        });
        self
    }
}

/// Sending half of a notification channel
#[derive(Debug, Clone)]
pub struct Notifier {
    tx: mpsc::UnboundedSender<Notification>,
}

impl Notifier {
    /// Push a notification; dropped silently if nobody is listening
    pub fn notify(&self, notification: Notification) {
        if self.tx.send(notification).is_err() {
            trace!("Notification stream closed, dropping notification");
        }
    }
}

/// Receiving half of a notification channel
#[derive(Debug)]
pub struct NotificationStream {
    rx: mpsc::UnboundedReceiver<Notification>,
}

impl NotificationStream {
    /// Wait for the next notification
    ///
    /// Returns `None` once every `Notifier` is gone and the queue is empty.
    pub async fn recv(&mut self) -> Option<Notification> {
        self.rx.recv().await
    }

    /// Take everything currently queued without waiting
    pub fn drain(&mut self) -> Vec<Notification> {
        let mut drained = Vec::new();
        while let Ok(notification) = self.rx.try_recv() {
            drained.push(notification);
        }
        drained
    }
}

/// Create a connected notifier / stream pair
pub fn notification_channel() -> (Notifier, NotificationStream) {
    let (tx, rx) = mpsc::unbounded_channel();
    (Notifier { tx }, NotificationStream { rx })
}
