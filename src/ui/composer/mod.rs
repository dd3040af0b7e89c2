// SPDX-License-Identifier: MPL-2.0
//! Notification composer screen.
//!
//! Owns the [`DraftStore`]. Field messages are applied to the draft directly;
//! sending and previewing are reported to the application as [`Event`]s so
//! the dispatcher, which needs the toast sink, runs at the app level.
//!
//! The message body is edited in a multi-line [`text_editor`] whose content
//! is mirrored into the draft on every action.

mod view;

pub use view::{view, ViewContext};

use crate::application::compose::DraftStore;
use crate::domain::notification::{Channel, DraftEdit, NotificationDraft, TargetGroup, TargetGroupId};
use iced::widget::text_editor;
use std::fmt;

/// Composer screen state.
pub struct State {
    store: DraftStore,
    /// Editor buffer; its text always equals `store.draft().message()`.
    message_editor: text_editor::Content,
}

impl Default for State {
    fn default() -> Self {
        Self {
            store: DraftStore::default(),
            message_editor: text_editor::Content::new(),
        }
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State").field("store", &self.store).finish_non_exhaustive()
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    TitleChanged(String),
    MessageEdited(text_editor::Action),
    TargetGroupSelected(TargetGroupOption),
    ChannelToggled(Channel, bool),
    ScheduledToggled(bool),
    ScheduleDateTimeChanged(String),
    UrgentToggled(bool),
    SendPressed,
    PreviewPressed,
}

impl Message {
    /// The draft edit carried by a field message, if any.
    fn into_edit(self) -> Option<DraftEdit> {
        let edit = match self {
            Message::TitleChanged(title) => DraftEdit::Title(title),
            Message::TargetGroupSelected(option) => DraftEdit::TargetGroup(option.id),
            Message::ChannelToggled(channel, enabled) => DraftEdit::Channel(channel, enabled),
            Message::ScheduledToggled(scheduled) => DraftEdit::Scheduled(scheduled),
            Message::ScheduleDateTimeChanged(value) => DraftEdit::ScheduleDateTime(value),
            Message::UrgentToggled(urgent) => DraftEdit::Urgent(urgent),
            Message::MessageEdited(_) | Message::SendPressed | Message::PreviewPressed => {
                return None
            }
        };
        Some(edit)
    }
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    Send,
    Preview,
}

/// Entry of the target group picker, rendered as "Label (count)".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetGroupOption {
    pub id: TargetGroupId,
    label: String,
}

impl From<&TargetGroup> for TargetGroupOption {
    fn from(group: &TargetGroup) -> Self {
        Self {
            id: group.id.clone(),
            label: group.display_label(),
        }
    }
}

impl fmt::Display for TargetGroupOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn draft(&self) -> &NotificationDraft {
        self.store.draft()
    }

    /// Runs `send` against the draft store.
    ///
    /// A successful send clears the message, so the editor is rebuilt from
    /// the draft afterwards.
    pub fn send<T, E>(
        &mut self,
        send: impl FnOnce(&mut DraftStore) -> Result<T, E>,
    ) -> Result<T, E> {
        let result = send(&mut self.store);
        if result.is_ok() {
            self.message_editor = text_editor::Content::with_text(self.store.draft().message());
        }
        result
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::SendPressed => Event::Send,
            Message::PreviewPressed => Event::Preview,
            Message::MessageEdited(action) => {
                let is_edit = action.is_edit();
                self.message_editor.perform(action);
                if is_edit {
                    self.store.apply(DraftEdit::Message(self.message_editor.text()));
                }
                Event::None
            }
            field => {
                if let Some(edit) = field.into_edit() {
                    self.store.apply(edit);
                }
                Event::None
            }
        }
    }
}

/// Editor action inserting `text` at the cursor, as a paste would.
#[cfg(test)]
pub(crate) fn typed_message(text: &str) -> Message {
    Message::MessageEdited(text_editor::Action::Edit(text_editor::Edit::Paste(
        std::sync::Arc::new(text.to_string()),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_messages_edit_the_draft() {
        let mut state = State::new();

        assert_eq!(state.update(Message::TitleChanged("Exam".into())), Event::None);
        assert_eq!(state.update(typed_message("Tomorrow")), Event::None);
        state.update(Message::UrgentToggled(true));

        assert_eq!(state.draft().title(), "Exam");
        assert_eq!(state.draft().message(), "Tomorrow");
        assert!(state.draft().urgent());
    }

    #[test]
    fn message_editor_keeps_line_breaks() {
        let mut state = State::new();

        state.update(typed_message("Line one\nLine two"));

        assert_eq!(state.draft().message(), "Line one\nLine two");
        assert_eq!(state.message_editor.text(), state.draft().message());
    }

    #[test]
    fn cursor_moves_do_not_touch_the_draft() {
        let mut state = State::new();
        state.update(typed_message("Hello"));
        let before = state.draft().clone();

        state.update(Message::MessageEdited(text_editor::Action::Move(
            text_editor::Motion::Home,
        )));

        assert_eq!(state.draft(), &before);
    }

    #[test]
    fn successful_send_rebuilds_the_editor() {
        let mut state = State::new();
        state.update(Message::TitleChanged("Exam".into()));
        state.update(typed_message("Tomorrow"));

        let sent: Result<(), ()> = state.send(|store| {
            store.reset_transient();
            Ok(())
        });

        assert!(sent.is_ok());
        assert_eq!(state.draft().message(), "");
        assert_eq!(state.message_editor.text(), "");
    }

    #[test]
    fn failed_send_keeps_the_editor() {
        let mut state = State::new();
        state.update(typed_message("Tomorrow"));

        let sent: Result<(), ()> = state.send(|_| Err(()));

        assert!(sent.is_err());
        assert_eq!(state.message_editor.text(), "Tomorrow");
    }

    #[test]
    fn toggling_sms_changes_only_that_channel() {
        let mut state = State::new();
        let before = state.draft().channels();

        state.update(Message::ChannelToggled(Channel::Sms, true));

        let after = state.draft().channels();
        assert!(after.sms);
        assert_eq!(after.push, before.push);
        assert_eq!(after.email, before.email);
        assert_eq!(after.whatsapp, before.whatsapp);
    }

    #[test]
    fn selecting_a_group_sets_target() {
        let mut state = State::new();
        let group = TargetGroup::new("vendors", "All Vendors", 134);
        let option = TargetGroupOption::from(&group);
        assert_eq!(option.to_string(), "All Vendors (134)");

        state.update(Message::TargetGroupSelected(option));
        assert_eq!(state.draft().target_group().as_str(), "vendors");
    }

    #[test]
    fn buttons_emit_events_without_editing() {
        let mut state = State::new();
        let before = state.draft().clone();

        assert_eq!(state.update(Message::SendPressed), Event::Send);
        assert_eq!(state.update(Message::PreviewPressed), Event::Preview);
        assert_eq!(state.draft(), &before);
    }
}
