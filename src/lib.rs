// SPDX-License-Identifier: MPL-2.0
//! `bulk_notify` is a desktop composer for bulk notifications, built with the
//! Iced GUI framework.
//!
//! An operator writes a title and message, picks a target audience and
//! delivery channels, optionally schedules the notification, and submits or
//! previews it. Outcomes are reported through toast notifications.
//!
//! # Layers
//!
//! - [`domain`]: Draft, channels, reference data and validation (std only)
//! - [`application`]: Draft store, dispatcher and the ports they depend on
//! - [`infrastructure`]: Clock and audience directory adapters
//! - [`ui`] and [`app`]: Iced screens and the application shell

#![doc(html_root_url = "https://docs.rs/bulk_notify/0.1.0")]

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod logging;
pub mod ui;

pub use app::config;
