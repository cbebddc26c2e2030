//! Polling wait primitive.
//!
//! Every asynchronous UI effect in the suite resolves through
//! [`await_condition`]: a predicate is polled at a fixed short interval until
//! it yields a value or the wait window elapses. Fixed sleeps are tolerated
//! only where the target surface exposes no completion signal at all, and
//! those sites are logged as flakiness risks.

use std::future::Future;
use std::time::Duration;

use thirtyfour::prelude::*;
use tokio::time::Instant;

use crate::error::{HarnessError, Result};

/// Interval between predicate polls.
pub const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Default wait window for explicit waits.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Poll `probe` until it yields a value or `timeout` elapses.
///
/// The probe returns `Ok(Some(value))` when the condition holds,
/// `Ok(None)` when it does not yet hold. WebDriver errors inside the probe
/// count as "not yet": a transiently stale or missing element must not
/// abort the wait.
///
/// # Errors
///
/// Returns [`HarnessError::Timeout`] naming `description` on expiry.
pub async fn await_condition<F, Fut, T>(
    description: &str,
    timeout: Duration,
    mut probe: F,
) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Option<T>>>,
{
    let deadline = Instant::now() + timeout;
    loop {
        match probe().await {
            Ok(Some(value)) => return Ok(value),
            Ok(None) | Err(HarnessError::WebDriver(_)) => {}
            Err(other) => return Err(other),
        }
        if Instant::now() >= deadline {
            return Err(HarnessError::Timeout(description.to_string()));
        }
        tokio::time::sleep(POLL_INTERVAL).await;
    }
}

/// Wait for an element matching `css` to be present in the DOM.
pub async fn present(driver: &WebDriver, css: &str, timeout: Duration) -> Result<WebElement> {
    let probe = move || async move {
        match driver.find(By::Css(css)).await {
            Ok(el) => Ok(Some(el)),
            Err(_) => Ok(None),
        }
    };
    await_condition(&format!("`{css}` to be present"), timeout, probe).await
}

/// Wait for an element matching `css` to be present and displayed.
pub async fn visible(driver: &WebDriver, css: &str, timeout: Duration) -> Result<WebElement> {
    let probe = move || async move {
        match driver.find(By::Css(css)).await {
            Ok(el) if el.is_displayed().await.unwrap_or(false) => Ok(Some(el)),
            _ => Ok(None),
        }
    };
    await_condition(&format!("`{css}` to be visible"), timeout, probe).await
}

/// Wait for an element matching `css` to be displayed and enabled.
pub async fn clickable(driver: &WebDriver, css: &str, timeout: Duration) -> Result<WebElement> {
    let probe = move || async move {
        match driver.find(By::Css(css)).await {
            Ok(el) if el.is_clickable().await.unwrap_or(false) => Ok(Some(el)),
            _ => Ok(None),
        }
    };
    await_condition(&format!("`{css}` to be clickable"), timeout, probe).await
}

/// Wait for an element located by `by` to be displayed and enabled.
///
/// Variant of [`clickable`] for non-CSS locators (XPath, link text).
pub async fn clickable_by(driver: &WebDriver, by: By, timeout: Duration) -> Result<WebElement> {
    let description = format!("`{by:?}` to be clickable");
    let by_ref = &by;
    let probe = move || async move {
        match driver.find(By::clone(by_ref)).await {
            Ok(el) if el.is_clickable().await.unwrap_or(false) => Ok(Some(el)),
            _ => Ok(None),
        }
    };
    await_condition(&description, timeout, probe).await
}

/// Wait for an element located by `by` to be present in the DOM.
///
/// Variant of [`present`] for non-CSS locators (XPath, link text).
pub async fn present_by(driver: &WebDriver, by: By, timeout: Duration) -> Result<WebElement> {
    let description = format!("`{by:?}` to be present");
    let by_ref = &by;
    let probe = move || async move {
        match driver.find(By::clone(by_ref)).await {
            Ok(el) => Ok(Some(el)),
            Err(_) => Ok(None),
        }
    };
    await_condition(&description, timeout, probe).await
}

/// Wait for at least one element matching `css` to be present.
pub async fn all_present(
    driver: &WebDriver,
    css: &str,
    timeout: Duration,
) -> Result<Vec<WebElement>> {
    let probe = move || async move {
        match driver.find_all(By::Css(css)).await {
            Ok(els) if !els.is_empty() => Ok(Some(els)),
            _ => Ok(None),
        }
    };
    await_condition(&format!("any `{css}` to be present"), timeout, probe).await
}

/// Wait for no displayed element to match `css` (absence or invisibility).
pub async fn gone(driver: &WebDriver, css: &str, timeout: Duration) -> Result<()> {
    let probe = move || async move {
        match driver.find(By::Css(css)).await {
            Ok(el) if el.is_displayed().await.unwrap_or(false) => Ok(None),
            _ => Ok(Some(())),
        }
    };
    await_condition(&format!("`{css}` to be gone"), timeout, probe).await
}

/// Wait for `element` to become stale (detached from the page).
///
/// Confirms a removal directly rather than inferring it from a count change.
pub async fn stale(element: &WebElement, timeout: Duration) -> Result<()> {
    let probe = move || async move {
        match element.is_present().await {
            Ok(false) | Err(_) => Ok(Some(())),
            Ok(true) => Ok(None),
        }
    };
    await_condition("element to become stale", timeout, probe).await
}

/// Wait for the current URL to contain `fragment`; returns the full URL.
pub async fn url_contains(
    driver: &WebDriver,
    fragment: &str,
    timeout: Duration,
) -> Result<String> {
    let probe = move || async move {
        let url = driver.current_url().await?;
        if url.as_str().contains(fragment) {
            Ok(Some(url.to_string()))
        } else {
            Ok(None)
        }
    };
    await_condition(&format!("URL to contain `{fragment}`"), timeout, probe).await
}

/// Bounded fixed delay, the documented last-resort fallback where the page
/// exposes no completion signal to poll.
pub async fn settle(delay: Duration) {
    tracing::debug!(?delay, "settle delay (no completion predicate)");
    tokio::time::sleep(delay).await;
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_await_condition_immediate_success() {
        let out = await_condition("always true", Duration::from_secs(1), || async {
            Ok(Some(7_u32))
        })
        .await;
        assert_eq!(out.unwrap(), 7);
    }

    #[tokio::test]
    async fn test_await_condition_times_out() {
        let out: Result<u32> =
            await_condition("never true", Duration::from_millis(10), || async { Ok(None) }).await;
        let err = out.unwrap_err();
        assert!(err.is_timeout());
        assert_eq!(err.to_string(), "Timed out waiting for never true");
    }

    #[tokio::test]
    async fn test_await_condition_eventual_success() {
        let mut polls = 0_u32;
        let out = await_condition("third poll", Duration::from_secs(5), || {
            polls += 1;
            let ready = polls >= 3;
            async move { Ok(ready.then_some(())) }
        })
        .await;
        assert!(out.is_ok());
        assert!(polls >= 3);
    }

    #[tokio::test]
    async fn test_await_condition_propagates_non_webdriver_errors() {
        let out: Result<u32> = await_condition("failing probe", Duration::from_secs(1), || async {
            Err(HarnessError::Assertion("boom".to_string()))
        })
        .await;
        assert!(matches!(out, Err(HarnessError::Assertion(_))));
    }
}
