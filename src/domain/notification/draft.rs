// SPDX-License-Identifier: MPL-2.0
//! The in-progress notification record and its field-level edits.

use super::channel::{Channel, Channels};
use chrono::NaiveDateTime;
use std::fmt;

/// Format of the schedule input, as produced by a date-time picker
/// (`2024-01-20T10:00`).
pub const SCHEDULE_FORMAT: &str = "%Y-%m-%dT%H:%M";

// =============================================================================
// TargetGroupId
// =============================================================================

/// Identifier of a target group (e.g. `"active-users"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetGroupId(String);

impl TargetGroupId {
    /// Sentinel identifier addressing every user.
    pub const ALL_USERS: &'static str = "all-users";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the "all users" sentinel.
    #[must_use]
    pub fn all_users() -> Self {
        Self(Self::ALL_USERS.to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TargetGroupId {
    fn default() -> Self {
        Self::all_users()
    }
}

impl fmt::Display for TargetGroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// DraftEdit
// =============================================================================

/// A replacement of exactly one draft field (or one channel flag).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftEdit {
    Title(String),
    Message(String),
    TargetGroup(TargetGroupId),
    Channel(Channel, bool),
    Scheduled(bool),
    ScheduleDateTime(String),
    Urgent(bool),
}

impl DraftEdit {
    /// Name of the field this edit targets, for logging.
    #[must_use]
    pub fn field_name(&self) -> &'static str {
        match self {
            DraftEdit::Title(_) => "title",
            DraftEdit::Message(_) => "message",
            DraftEdit::TargetGroup(_) => "target_group",
            DraftEdit::Channel(channel, _) => match channel {
                Channel::Push => "channels.push",
                Channel::Email => "channels.email",
                Channel::Sms => "channels.sms",
                Channel::WhatsApp => "channels.whatsapp",
            },
            DraftEdit::Scheduled(_) => "scheduled",
            DraftEdit::ScheduleDateTime(_) => "schedule_date_time",
            DraftEdit::Urgent(_) => "urgent",
        }
    }
}

// =============================================================================
// NotificationDraft
// =============================================================================

/// The notification being composed.
///
/// Intermediate states may be invalid (e.g. `scheduled` without a date);
/// validity is only checked at submission time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotificationDraft {
    title: String,
    message: String,
    target_group: TargetGroupId,
    channels: Channels,
    scheduled: bool,
    /// Text as typed. Only a value in [`SCHEDULE_FORMAT`] counts as a date.
    schedule_date_time: String,
    urgent: bool,
}

impl NotificationDraft {
    /// Creates a draft with the default values of a freshly opened screen.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Produces a new draft from this one with a single field replaced.
    #[must_use]
    pub fn with_edit(self, edit: DraftEdit) -> Self {
        match edit {
            DraftEdit::Title(title) => Self { title, ..self },
            DraftEdit::Message(message) => Self { message, ..self },
            DraftEdit::TargetGroup(target_group) => Self {
                target_group,
                ..self
            },
            DraftEdit::Channel(channel, enabled) => Self {
                channels: self.channels.with(channel, enabled),
                ..self
            },
            DraftEdit::Scheduled(scheduled) => Self { scheduled, ..self },
            DraftEdit::ScheduleDateTime(schedule_date_time) => Self {
                schedule_date_time,
                ..self
            },
            DraftEdit::Urgent(urgent) => Self { urgent, ..self },
        }
    }

    /// Clears the fields that do not carry over to the next notification:
    /// title, message and schedule date. Everything else is kept.
    #[must_use]
    pub fn cleared_transient(self) -> Self {
        Self {
            title: String::new(),
            message: String::new(),
            schedule_date_time: String::new(),
            ..self
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn target_group(&self) -> &TargetGroupId {
        &self.target_group
    }

    #[must_use]
    pub fn channels(&self) -> Channels {
        self.channels
    }

    #[must_use]
    pub fn scheduled(&self) -> bool {
        self.scheduled
    }

    /// Raw schedule text, kept so the input shows exactly what was typed.
    #[must_use]
    pub fn schedule_date_time(&self) -> &str {
        &self.schedule_date_time
    }

    /// The schedule date, if the entered text is a valid `YYYY-MM-DDTHH:MM`.
    #[must_use]
    pub fn schedule(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(self.schedule_date_time.trim(), SCHEDULE_FORMAT).ok()
    }

    #[must_use]
    pub fn urgent(&self) -> bool {
        self.urgent
    }

    /// Both title and message are non-empty. Whitespace counts as content.
    #[must_use]
    pub fn has_required_fields(&self) -> bool {
        !self.title.is_empty() && !self.message.is_empty()
    }

    /// A well-formed schedule date has been entered. Unparseable text counts
    /// as no date at all.
    #[must_use]
    pub fn has_schedule_date(&self) -> bool {
        self.schedule().is_some()
    }
}
