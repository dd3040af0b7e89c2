// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` handles queuing, display timing, and dismissal of notifications.
//! It limits the number of visible toasts and manages auto-dismiss timers.

use super::notification::{Notification, NotificationId, Severity};
use crate::app::config::MAX_VISIBLE_TOASTS;
use crate::application::port::{Toast, ToastSink, ToastVariant};
use std::collections::VecDeque;

/// Prefix shared by the validation failure keys.
const VALIDATION_ERROR_PREFIX: &str = "toast-error-";

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
}

/// Manages the notification queue and visible notifications.
#[derive(Debug, Default)]
pub struct Manager {
    /// Newest first.
    visible: VecDeque<Notification>,
    queue: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a new notification to be displayed.
    ///
    /// Shown immediately while fewer than `MAX_VISIBLE_TOASTS` are on screen,
    /// queued otherwise. Warnings and errors are also logged.
    pub fn push(&mut self, notification: Notification) {
        match notification.severity() {
            Severity::Warning => {
                tracing::warn!(key = notification.message_key(), "warning notification");
            }
            Severity::Error => {
                tracing::warn!(key = notification.message_key(), "error notification");
            }
            Severity::Success => {}
        }

        if self.visible.len() < MAX_VISIBLE_TOASTS {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Dismisses a notification by its ID.
    ///
    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Dismisses every visible notification whose timer has expired.
    pub fn tick(&mut self) {
        let expired: Vec<NotificationId> = self
            .visible
            .iter()
            .filter(|n| n.should_auto_dismiss())
            .map(Notification::id)
            .collect();

        for id in expired {
            self.dismiss(id);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    /// Removes stale validation errors.
    ///
    /// Validation errors never auto-dismiss; once a notification goes out
    /// they no longer describe the form.
    pub fn clear_validation_errors(&mut self) {
        let is_validation = |n: &Notification| {
            n.severity() == Severity::Error && n.message_key().starts_with(VALIDATION_ERROR_PREFIX)
        };

        let visible_before = self.visible.len();
        self.visible.retain(|n| !is_validation(n));
        self.queue.retain(|n| !is_validation(n));

        if self.visible.len() < visible_before {
            self.promote_from_queue();
        }
    }

    /// Moves the oldest queued toasts on screen. Anything queued is newer
    /// than what is visible, so promoted toasts go to the front.
    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE_TOASTS {
            if let Some(notification) = self.queue.pop_front() {
                self.visible.push_front(notification);
            } else {
                break;
            }
        }
    }
}

impl ToastSink for Manager {
    fn show(&mut self, toast: Toast) {
        let severity = match toast.variant() {
            ToastVariant::Default => Severity::Success,
            ToastVariant::Destructive => Severity::Error,
        };

        let notification = toast.args().iter().fold(
            Notification::new(severity, toast.description_key()).with_title(toast.title_key()),
            |n, (name, value)| n.with_arg(name.as_str(), value.as_str()),
        );
        self.push(notification);
    }
}
