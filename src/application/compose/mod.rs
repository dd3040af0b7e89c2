// SPDX-License-Identifier: MPL-2.0
//! Notification composition use cases.
//!
//! - [`DraftStore`]: owns the draft and applies field edits
//! - [`Dispatcher`]: validates, confirms and resets on submit; previews
//! - [`timestamp`]: fixed-zone rendering of confirmation times

mod dispatcher;
mod draft_store;
pub mod timestamp;

pub use dispatcher::{
    DispatchAction, Dispatched, Dispatcher, Preview, DISPATCHED_DESCRIPTION_KEY,
    PREVIEW_DESCRIPTION_KEY, PREVIEW_TITLE_KEY,
};
pub use draft_store::DraftStore;
pub use timestamp::{format_timestamp, parse_timezone, DEFAULT_TIMEZONE};
