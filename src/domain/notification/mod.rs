// SPDX-License-Identifier: MPL-2.0
//! Notification composition types.
//!
//! - [`NotificationDraft`]: the record being edited, changed one field at a
//!   time through [`DraftEdit`]
//! - [`validation`]: the rules a draft must satisfy before submission
//! - Reference data: [`TargetGroup`], [`NotificationStat`], [`RecentNotification`]

mod channel;
mod draft;
mod reference;
pub mod validation;

pub use channel::{Channel, Channels, UnknownChannel};
pub use draft::{DraftEdit, NotificationDraft, TargetGroupId, SCHEDULE_FORMAT};
pub use reference::{group_digits, NotificationStat, RecentNotification, TargetGroup, Trend};
pub use validation::{validate, ValidationError};
