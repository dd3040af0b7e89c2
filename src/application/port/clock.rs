// SPDX-License-Identifier: MPL-2.0
//! Time source port.

use chrono::{DateTime, Utc};

/// Provides the current instant. Injected so confirmations can be tested
/// against a fixed time.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}
