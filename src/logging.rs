// SPDX-License-Identifier: MPL-2.0
//! Console logging setup.
//!
//! ```text
//! bulk_notify --debug                 # Debug logging to stderr
//! RUST_LOG=bulk_notify=trace ...      # Fine-grained control
//! ```
//!
//! `RUST_LOG` always wins over `--debug` when it is set.

use tracing_subscriber::EnvFilter;

/// Logging options derived from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingConfig {
    /// Raise the default level from `info` to `debug` and show event targets.
    pub debug: bool,
}

impl LoggingConfig {
    fn default_directive(self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "info"
        }
    }
}

/// Installs the global `tracing` subscriber.
///
/// # Errors
///
/// Fails when a global subscriber has already been installed.
pub fn init(config: LoggingConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.debug)
        .compact()
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_flag_raises_default_level() {
        assert_eq!(LoggingConfig { debug: true }.default_directive(), "debug");
        assert_eq!(LoggingConfig::default().default_directive(), "info");
    }

    #[test]
    fn second_init_fails_instead_of_panicking() {
        let _ = init(LoggingConfig::default());
        assert!(init(LoggingConfig::default()).is_err());
    }
}
