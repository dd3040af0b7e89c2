// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! - [`Notification`] - Severity, optional title key, message key and arguments
//! - [`Manager`] - Queuing and lifecycle; also the UI's [`ToastSink`]
//! - [`Toast`] - Widget rendering
//!
//! Success toasts disappear after ~3s, warnings after ~5s, errors stay
//! until dismissed. At most three are visible; the rest wait in a queue.
//!
//! [`ToastSink`]: crate::application::port::ToastSink

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
