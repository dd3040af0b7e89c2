// SPDX-License-Identifier: MPL-2.0
//! Owner of the draft being composed.

use crate::domain::notification::{DraftEdit, NotificationDraft};

/// Holds the current draft and applies field-level edits to it.
///
/// Writes are never validated; the draft may be incomplete at any point
/// while the user is typing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftStore {
    draft: NotificationDraft,
}

impl DraftStore {
    /// Creates a store holding a default draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store around an existing draft.
    #[must_use]
    pub fn with_draft(draft: NotificationDraft) -> Self {
        Self { draft }
    }

    /// Returns the current draft.
    #[must_use]
    pub fn draft(&self) -> &NotificationDraft {
        &self.draft
    }

    /// Replaces one field of the draft.
    pub fn apply(&mut self, edit: DraftEdit) {
        tracing::debug!(field = edit.field_name(), "draft edited");
        let previous = std::mem::take(&mut self.draft);
        self.draft = previous.with_edit(edit);
    }

    /// Clears title, message and schedule date after a successful send.
    pub fn reset_transient(&mut self) {
        let previous = std::mem::take(&mut self.draft);
        self.draft = previous.cleared_transient();
    }
}
