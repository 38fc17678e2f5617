//! Timeout helpers used across the crate.
//!
//! Keep these helpers minimal: they centralize the default response timeout
//! and provide a small conversion helper so tests and code can express
//! timeouts in milliseconds clearly.

use std::time::Duration;

/// Default time a session waits for the chip's ACK or reply frame before
/// giving up with `Error::Timeout`.
pub const DEFAULT_RESPONSE_TIMEOUT_MS: u64 = 1000;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Convenience: default response timeout as Duration.
pub fn default_response_timeout() -> Duration {
    ms(DEFAULT_RESPONSE_TIMEOUT_MS)
}
