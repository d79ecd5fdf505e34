//! Transient user feedback: a short-lived notification line and a sticky
//! error/success modal.
//!
//! The notification holds at most one message and expires two seconds after
//! it was last set; posting a newer message restarts the window. Expiry is
//! evaluated against a caller-supplied instant, so nothing here sleeps or
//! schedules timers. The modal stays until it is explicitly dismissed.

use std::time::{Duration, Instant};

/// How long a notification stays visible once posted.
pub const NOTIFICATION_WINDOW: Duration = Duration::from_secs(2);

/// Severity tag of a modal message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    Error,
    Success,
}

/// A message shown until the user dismisses it
#[derive(Debug, Clone)]
pub struct Modal {
    pub message: String,
    pub kind: ModalKind,
}

#[derive(Debug, Clone)]
struct Notification {
    message: String,
    posted_at: Instant,
}

/// Holds the current notification and modal state
#[derive(Debug)]
pub struct Feedback {
    notification: Option<Notification>,
    modal: Option<Modal>,
}

impl Feedback {
    pub fn new() -> Self {
        Self {
            notification: None,
            modal: None,
        }
    }

    /// Posts a notification, replacing any current one and restarting the
    /// two-second window.
    pub fn notify(&mut self, message: &str) {
        self.notify_at(message, Instant::now());
    }

    /// Posts a notification with an explicit posting instant.
    pub fn notify_at(&mut self, message: &str, now: Instant) {
        self.notification = Some(Notification {
            message: message.to_string(),
            posted_at: now,
        });
    }

    /// The current notification text, if one is still within its window.
    pub fn notification(&self) -> Option<&str> {
        self.notification_at(Instant::now())
    }

    /// The notification text as seen at `now`.
    pub fn notification_at(&self, now: Instant) -> Option<&str> {
        self.notification
            .as_ref()
            .filter(|n| now.duration_since(n.posted_at) < NOTIFICATION_WINDOW)
            .map(|n| n.message.as_str())
    }

    /// Shows a success modal, replacing any modal currently on screen.
    pub fn success(&mut self, message: &str) {
        self.show_modal(message, ModalKind::Success);
    }

    /// Shows an error modal, replacing any modal currently on screen.
    pub fn error(&mut self, message: &str) {
        self.show_modal(message, ModalKind::Error);
    }

    pub fn show_modal(&mut self, message: &str, kind: ModalKind) {
        self.modal = Some(Modal {
            message: message.to_string(),
            kind,
        });
    }

    /// The modal currently on screen, if any.
    pub fn modal(&self) -> Option<&Modal> {
        self.modal.as_ref()
    }

    /// Clears the modal. Safe to call when none is shown.
    pub fn dismiss_modal(&mut self) {
        self.modal = None;
    }
}

impl Default for Feedback {
    fn default() -> Self {
        Self::new()
    }
}
