// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! screen exposes `Message`, an `update` that returns an `Event` for the
//! application shell, and a `view`.
//!
//! # Screens
//!
//! - [`composer`] - Notification composition form, statistics and history
//! - [`settings`] - Language and theme preferences
//!
//! # Shared Infrastructure
//!
//! - [`navbar`] - Navigation bar with one tab per screen
//! - [`notifications`] - Toast notification system for user feedback
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod composer;
pub mod design_tokens;
pub mod navbar;
pub mod notifications;
pub mod settings;
pub mod styles;
pub mod theming;
