// SPDX-License-Identifier: MPL-2.0
//! Submission rules for a notification draft.

use super::draft::NotificationDraft;
use std::fmt;

/// Reasons a draft cannot be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Title or message is empty.
    MissingRequiredFields,
    /// The draft is scheduled but no date/time was entered.
    MissingScheduleDate,
}

impl ValidationError {
    /// Returns the i18n key for the toast title.
    #[must_use]
    pub fn title_key(self) -> &'static str {
        match self {
            ValidationError::MissingRequiredFields => "toast-error-required-title",
            ValidationError::MissingScheduleDate => "toast-error-schedule-title",
        }
    }

    /// Returns the i18n key for the toast description.
    #[must_use]
    pub fn description_key(self) -> &'static str {
        match self {
            ValidationError::MissingRequiredFields => "toast-error-required-description",
            ValidationError::MissingScheduleDate => "toast-error-schedule-description",
        }
    }

    /// Machine-readable reason, used in structured logs.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            ValidationError::MissingRequiredFields => "missing_required_fields",
            ValidationError::MissingScheduleDate => "missing_schedule_date",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingRequiredFields => {
                write!(f, "title and message are required")
            }
            ValidationError::MissingScheduleDate => {
                write!(f, "scheduled notifications need a date and time")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Checks whether a draft may be submitted.
///
/// The required-field check runs first, so a draft that is missing both a
/// title and a schedule date reports only [`ValidationError::MissingRequiredFields`].
pub fn validate(draft: &NotificationDraft) -> Result<(), ValidationError> {
    if !draft.has_required_fields() {
        return Err(ValidationError::MissingRequiredFields);
    }
    if draft.scheduled() && !draft.has_schedule_date() {
        return Err(ValidationError::MissingScheduleDate);
    }
    Ok(())
}
