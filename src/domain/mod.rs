// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic free of UI and I/O.
//!
//! This module contains pure domain types, value objects, and business rules.
//! Apart from `std` it only uses `chrono` for the schedule date, so it can be
//! tested without a rendering environment.
//!
//! # Modules
//!
//! - [`notification`]: Draft, channels, target groups and submission rules
//!   ([`NotificationDraft`](notification::NotificationDraft),
//!   [`validate`](notification::validate))

pub mod notification;
