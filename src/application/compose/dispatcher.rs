// SPDX-License-Identifier: MPL-2.0
//! Submission and preview of the composed notification.
//!
//! There is no delivery backend: a successful submission produces a
//! confirmation toast, a structured log record and a [`Dispatched`] value.

use super::draft_store::DraftStore;
use super::timestamp::{format_timestamp, DEFAULT_TIMEZONE};
use crate::application::port::{Clock, Toast, ToastSink};
use crate::domain::notification::{
    validate, Channels, NotificationDraft, TargetGroupId, ValidationError, SCHEDULE_FORMAT,
};
use chrono::NaiveDateTime;
use chrono_tz::Tz;

/// Description key shared by the sent and scheduled confirmations.
pub const DISPATCHED_DESCRIPTION_KEY: &str = "toast-dispatched-description";
/// Title key of the preview confirmation.
pub const PREVIEW_TITLE_KEY: &str = "toast-preview-title";
/// Description key of the preview confirmation.
pub const PREVIEW_DESCRIPTION_KEY: &str = "toast-preview-description";

/// What happened to a submitted notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchAction {
    Sent,
    Scheduled,
}

impl DispatchAction {
    fn for_draft(draft: &NotificationDraft) -> Self {
        if draft.scheduled() {
            DispatchAction::Scheduled
        } else {
            DispatchAction::Sent
        }
    }

    /// Lowercase verb, also used as the Fluent selector.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DispatchAction::Sent => "sent",
            DispatchAction::Scheduled => "scheduled",
        }
    }

    /// Returns the i18n key for the confirmation title.
    #[must_use]
    pub fn title_key(self) -> &'static str {
        match self {
            DispatchAction::Sent => "toast-sent-title",
            DispatchAction::Scheduled => "toast-scheduled-title",
        }
    }
}

/// Record of an accepted submission, captured before the draft was reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatched {
    pub action: DispatchAction,
    pub title: String,
    pub message: String,
    pub target: TargetGroupId,
    pub channels: Channels,
    pub urgent: bool,
    /// Requested delivery time, present only for scheduled notifications.
    pub schedule_date_time: Option<NaiveDateTime>,
    /// Submission time rendered in the dispatcher's time zone.
    pub timestamp: String,
}

/// Record of a generated preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub title: String,
    pub timestamp: String,
}

/// Validates and submits drafts, reporting the outcome through a [`ToastSink`].
#[derive(Debug, Clone)]
pub struct Dispatcher<C> {
    clock: C,
    timezone: Tz,
}

impl<C: Clock> Dispatcher<C> {
    /// Creates a dispatcher rendering timestamps in [`DEFAULT_TIMEZONE`].
    pub fn new(clock: C) -> Self {
        Self::with_timezone(clock, DEFAULT_TIMEZONE)
    }

    pub fn with_timezone(clock: C, timezone: Tz) -> Self {
        Self { clock, timezone }
    }

    #[must_use]
    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    pub fn set_timezone(&mut self, timezone: Tz) {
        self.timezone = timezone;
    }

    fn now(&self) -> String {
        format_timestamp(self.clock.now(), self.timezone)
    }

    /// Submits the draft held by `store`.
    ///
    /// On a validation failure a destructive toast is shown and the draft is
    /// left exactly as it was. On success a confirmation is shown and the
    /// title, message and schedule date are cleared; target group, channels,
    /// scheduling flag and urgency carry over to the next notification.
    pub fn submit<S>(
        &self,
        store: &mut DraftStore,
        toasts: &mut S,
    ) -> Result<Dispatched, ValidationError>
    where
        S: ToastSink + ?Sized,
    {
        let draft = store.draft();

        if let Err(err) = validate(draft) {
            tracing::warn!(reason = err.code(), "notification rejected");
            toasts.show(Toast::destructive(err.title_key(), err.description_key()));
            return Err(err);
        }

        let action = DispatchAction::for_draft(draft);
        let dispatched = Dispatched {
            action,
            title: draft.title().to_string(),
            message: draft.message().to_string(),
            target: draft.target_group().clone(),
            channels: draft.channels(),
            urgent: draft.urgent(),
            schedule_date_time: draft.schedule().filter(|_| draft.scheduled()),
            timestamp: self.now(),
        };

        toasts.show(
            Toast::new(action.title_key(), DISPATCHED_DESCRIPTION_KEY)
                .with_arg("title", dispatched.title.as_str())
                .with_arg("action", action.as_str())
                .with_arg("target", dispatched.target.as_str())
                .with_arg("timestamp", dispatched.timestamp.as_str()),
        );

        let channels: Vec<&str> = dispatched.channels.enabled().map(|c| c.as_str()).collect();
        tracing::info!(
            action = action.as_str(),
            group = %dispatched.target,
            channels = ?channels,
            urgent = dispatched.urgent,
            schedule = %dispatched
                .schedule_date_time
                .map(|at| at.format(SCHEDULE_FORMAT).to_string())
                .unwrap_or_default(),
            "notification dispatched"
        );

        store.reset_transient();
        Ok(dispatched)
    }

    /// Emits a preview confirmation for the draft without validating or
    /// changing it. Incomplete drafts can be previewed.
    pub fn preview<S>(&self, draft: &NotificationDraft, toasts: &mut S) -> Preview
    where
        S: ToastSink + ?Sized,
    {
        let preview = Preview {
            title: draft.title().to_string(),
            timestamp: self.now(),
        };

        toasts.show(
            Toast::new(PREVIEW_TITLE_KEY, PREVIEW_DESCRIPTION_KEY)
                .with_arg("title", preview.title.as_str())
                .with_arg("timestamp", preview.timestamp.as_str()),
        );
        tracing::debug!(title = %preview.title, "preview generated");

        preview
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::ToastVariant;
    use crate::domain::notification::{Channel, DraftEdit};
    use crate::infrastructure::clock::FixedClock;
    use chrono::{TimeZone, Utc};

    fn dispatcher() -> Dispatcher<FixedClock> {
        let at = Utc.with_ymd_and_hms(2024, 1, 16, 9, 0, 0).unwrap();
        Dispatcher::new(FixedClock::new(at))
    }

    fn store_with(edits: impl IntoIterator<Item = DraftEdit>) -> DraftStore {
        let mut store = DraftStore::new();
        for edit in edits {
            store.apply(edit);
        }
        store
    }

    #[test]
    fn missing_title_reports_required_fields_and_keeps_draft() {
        let mut store = store_with([DraftEdit::Message("x".into())]);
        let before = store.clone();
        let mut toasts: Vec<Toast> = Vec::new();

        let result = dispatcher().submit(&mut store, &mut toasts);

        assert_eq!(result, Err(ValidationError::MissingRequiredFields));
        assert_eq!(store, before);
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].variant(), ToastVariant::Destructive);
        assert_eq!(toasts[0].title_key(), "toast-error-required-title");
    }

    #[test]
    fn scheduled_without_date_reports_schedule_error() {
        let mut store = store_with([
            DraftEdit::Title("T".into()),
            DraftEdit::Message("M".into()),
            DraftEdit::Scheduled(true),
        ]);
        let before = store.clone();
        let mut toasts: Vec<Toast> = Vec::new();

        let result = dispatcher().submit(&mut store, &mut toasts);

        assert_eq!(result, Err(ValidationError::MissingScheduleDate));
        assert_eq!(store, before);
        assert_eq!(toasts[0].description_key(), "toast-error-schedule-description");
    }

    #[test]
    fn successful_send_confirms_and_resets_transient_fields() {
        let mut store = store_with([
            DraftEdit::Title("T".into()),
            DraftEdit::Message("M".into()),
            DraftEdit::Channel(Channel::Sms, true),
            DraftEdit::Urgent(true),
        ]);
        let before = store.draft().clone();
        let mut toasts: Vec<Toast> = Vec::new();

        let dispatched = dispatcher()
            .submit(&mut store, &mut toasts)
            .expect("draft is complete");

        assert_eq!(dispatched.action, DispatchAction::Sent);
        assert_eq!(dispatched.title, "T");
        assert_eq!(dispatched.schedule_date_time, None);

        let toast = &toasts[0];
        assert_eq!(toast.variant(), ToastVariant::Default);
        assert_eq!(toast.title_key(), "toast-sent-title");
        assert_eq!(toast.arg("title"), Some("T"));
        assert_eq!(toast.arg("action"), Some("sent"));
        assert_eq!(toast.arg("target"), Some("all-users"));
        assert_eq!(toast.arg("timestamp"), Some("16/1/2024 2:30:00 pm"));

        let after = store.draft();
        assert_eq!(after.title(), "");
        assert_eq!(after.message(), "");
        assert_eq!(after.schedule_date_time(), "");
        assert_eq!(after.channels(), before.channels());
        assert_eq!(after.target_group(), before.target_group());
        assert_eq!(after.scheduled(), before.scheduled());
        assert_eq!(after.urgent(), before.urgent());
    }

    #[test]
    fn scheduled_send_uses_scheduled_wording() {
        let mut store = store_with([
            DraftEdit::Title("KYC Reminder".into()),
            DraftEdit::Message("Complete your KYC verification".into()),
            DraftEdit::TargetGroup(TargetGroupId::new("pending-kyc")),
            DraftEdit::Scheduled(true),
            DraftEdit::ScheduleDateTime("2024-01-20T10:00".into()),
        ]);
        let mut toasts: Vec<Toast> = Vec::new();

        let dispatched = dispatcher()
            .submit(&mut store, &mut toasts)
            .expect("draft is complete");

        assert_eq!(dispatched.action, DispatchAction::Scheduled);
        assert_eq!(
            dispatched.schedule_date_time,
            NaiveDateTime::parse_from_str("2024-01-20T10:00", SCHEDULE_FORMAT).ok()
        );
        assert_eq!(toasts[0].title_key(), "toast-scheduled-title");
        assert_eq!(toasts[0].arg("target"), Some("pending-kyc"));
        assert!(store.draft().scheduled());
        assert_eq!(store.draft().schedule_date_time(), "");
    }

    #[test]
    fn free_text_schedule_is_rejected_and_kept() {
        let mut store = store_with([
            DraftEdit::Title("T".into()),
            DraftEdit::Message("M".into()),
            DraftEdit::Scheduled(true),
            DraftEdit::ScheduleDateTime("next tuesday".into()),
        ]);
        let before = store.clone();
        let mut toasts: Vec<Toast> = Vec::new();

        let result = dispatcher().submit(&mut store, &mut toasts);

        assert_eq!(result, Err(ValidationError::MissingScheduleDate));
        assert_eq!(store, before);
        assert_eq!(toasts[0].title_key(), "toast-error-schedule-title");
        assert_eq!(toasts[0].variant(), ToastVariant::Destructive);
    }

    #[test]
    fn preview_does_not_validate_or_mutate() {
        let draft = NotificationDraft::new().with_edit(DraftEdit::Scheduled(true));
        let before = draft.clone();
        let mut toasts: Vec<Toast> = Vec::new();

        let preview = dispatcher().preview(&draft, &mut toasts);

        assert_eq!(draft, before);
        assert_eq!(preview.title, "");
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].title_key(), PREVIEW_TITLE_KEY);
        assert_eq!(toasts[0].variant(), ToastVariant::Default);
        assert_eq!(toasts[0].arg("timestamp"), Some("16/1/2024 2:30:00 pm"));
    }

    #[test]
    fn timezone_can_be_changed() {
        let mut dispatcher = dispatcher();
        dispatcher.set_timezone(chrono_tz::UTC);
        let mut toasts: Vec<Toast> = Vec::new();

        let preview = dispatcher.preview(&NotificationDraft::new(), &mut toasts);
        assert_eq!(preview.timestamp, "16/1/2024 9:00:00 am");
    }
}
