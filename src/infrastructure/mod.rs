// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer - Adapters implementing application ports.
//!
//! - [`clock`]: System and fixed clocks
//! - [`directory`]: Built-in or TOML-backed audience directory

pub mod clock;
pub mod directory;

pub use clock::{FixedClock, SystemClock};
pub use directory::StaticDirectory;
