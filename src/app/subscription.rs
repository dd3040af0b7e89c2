// SPDX-License-Identifier: MPL-2.0
//! Subscription management for the application.

use super::Message;
use crate::app::config::TOAST_TICK_MS;
use iced::{time, Subscription};
use std::time::Duration;

/// Ticks only while toasts are on screen or queued.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(TOAST_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
