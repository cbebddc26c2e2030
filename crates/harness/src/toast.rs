//! Toast (transient notification) observer.
//!
//! Toasts self-dismiss after a bounded display duration, so detection is a
//! race: the observer waits for a matching toast to become visible within
//! the window, then substring-matches its text. Absence is reported as a
//! boolean, never an error; callers decide whether absence is fatal. When
//! several toasts overlap, only detection of at least one match is
//! guaranteed, not their ordering.

use std::time::Duration;

use thirtyfour::prelude::*;

use crate::selectors;
use crate::wait;

/// Toast severity, mirroring the notification component's `data-type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    /// The `data-type` attribute value for this severity.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wait for a toast of `severity` containing `expected_text`.
///
/// Read-only observation; returns `true` iff a matching toast became
/// visible within `timeout`.
pub async fn expect_toast(
    driver: &WebDriver,
    expected_text: &str,
    severity: Severity,
    timeout: Duration,
) -> bool {
    let selector = selectors::toast::by_severity(severity.as_str());
    match wait::visible(driver, &selector, timeout).await {
        Ok(toast) => {
            let text = toast.text().await.unwrap_or_default();
            if text.contains(expected_text) {
                true
            } else {
                tracing::warn!(
                    %severity,
                    expected = expected_text,
                    actual = %text,
                    "toast visible but text did not match"
                );
                false
            }
        }
        Err(err) => {
            tracing::warn!(
                %severity,
                expected = expected_text,
                %err,
                "toast not found"
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_data_types() {
        assert_eq!(Severity::Success.as_str(), "success");
        assert_eq!(Severity::Error.as_str(), "error");
        assert_eq!(Severity::Error.to_string(), "error");
    }
}
