// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`compose`]: Draft editing, submission and preview
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure and UI layers implement application layer ports
//! - The composer screen drives application layer services
//!
//! # Example
//!
//! ```
//! use bulk_notify::application::compose::{DraftStore, Dispatcher};
//! use bulk_notify::application::port::Toast;
//! use bulk_notify::domain::notification::DraftEdit;
//! use bulk_notify::infrastructure::clock::SystemClock;
//!
//! let mut store = DraftStore::new();
//! store.apply(DraftEdit::Title("Maintenance".into()));
//! store.apply(DraftEdit::Message("Back at 10:00".into()));
//!
//! let mut toasts: Vec<Toast> = Vec::new();
//! let dispatcher = Dispatcher::new(SystemClock);
//! assert!(dispatcher.submit(&mut store, &mut toasts).is_ok());
//! assert_eq!(store.draft().title(), "");
//! ```

pub mod compose;
pub mod port;
