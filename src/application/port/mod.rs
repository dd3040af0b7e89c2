// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! The composer logic only sees these interfaces; the UI and infrastructure
//! layers provide the implementations.
//!
//! # Available Ports
//!
//! - [`toast`]: Outbound user feedback (`{title, description, variant}`)
//! - [`directory`]: Read-only target groups, statistics and send history
//! - [`clock`]: Current time
//!
//! # Design Notes
//!
//! - Traits use domain types only (no Iced types)
//! - No `async fn`; every call completes synchronously within one UI event

pub mod clock;
pub mod directory;
pub mod toast;

pub use clock::Clock;
pub use directory::AudienceDirectory;
pub use toast::{Toast, ToastSink, ToastVariant};
