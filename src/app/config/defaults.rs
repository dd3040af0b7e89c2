// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

// ==========================================================================
// Composer Defaults
// ==========================================================================

/// IANA name of the time zone used for confirmation timestamps.
pub const DEFAULT_TIMEZONE_NAME: &str = "Asia/Kolkata";

/// File name looked up next to `settings.toml` when no directory file is
/// configured explicitly.
pub const DIRECTORY_FILE_NAME: &str = "directory.toml";

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Maximum number of toasts shown at once; extra toasts wait in a queue.
pub const MAX_VISIBLE_TOASTS: usize = 3;

/// Auto-dismiss delay for success and info toasts (milliseconds).
pub const TOAST_DISMISS_MS: u64 = 3_000;

/// Auto-dismiss delay for warning toasts (milliseconds).
pub const TOAST_WARNING_DISMISS_MS: u64 = 5_000;

/// Interval of the tick that expires toasts (milliseconds).
pub const TOAST_TICK_MS: u64 = 100;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timezone_is_known_to_chrono_tz() {
        assert!(DEFAULT_TIMEZONE_NAME.parse::<chrono_tz::Tz>().is_ok());
    }

    #[test]
    fn warnings_stay_longer_than_success_toasts() {
        assert!(TOAST_WARNING_DISMISS_MS > TOAST_DISMISS_MS);
        assert!(TOAST_TICK_MS < TOAST_DISMISS_MS);
    }
}
