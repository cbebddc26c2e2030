//! Unified error handling for the E2E harness.
//!
//! `Timeout` is the dominant error kind in a browser-driven suite and is
//! treated as recoverable-and-reportable: most helpers catch it, log a
//! diagnostic and either return a boolean failure signal or fall back to a
//! navigation reset. Element absence is a valid outcome for "does X exist"
//! queries and only escalates where a scenario asserts existence.

use thiserror::Error;
use thirtyfour::error::WebDriverError;

use crate::config::ConfigError;

/// Harness-level error type.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// An expected condition was not met within its wait window.
    #[error("Timed out waiting for {0}")]
    Timeout(String),

    /// The WebDriver session failed in a way polling cannot absorb.
    #[error("WebDriver error: {0}")]
    WebDriver(#[from] WebDriverError),

    /// Configuration loading failed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A scenario-level assertion did not hold.
    #[error("Assertion failed: {0}")]
    Assertion(String),

    /// The target application never became reachable.
    #[error("Target application unreachable: {0}")]
    AppUnreachable(String),
}

impl HarnessError {
    /// Whether this error is a wait-window expiry.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }
}

/// Result type alias for `HarnessError`.
pub type Result<T> = std::result::Result<T, HarnessError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_display() {
        let err = HarnessError::Timeout("`header` to be visible".to_string());
        assert_eq!(err.to_string(), "Timed out waiting for `header` to be visible");
        assert!(err.is_timeout());
    }

    #[test]
    fn test_assertion_is_not_timeout() {
        let err = HarnessError::Assertion("cart not empty".to_string());
        assert!(!err.is_timeout());
    }
}
