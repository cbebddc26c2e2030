//! Readiness probe for the target application.
//!
//! The suite refuses to burn a browser session against an application that
//! is not serving yet; the orchestrator probes the base URL over plain
//! HTTP before acquiring the session.

use std::time::Duration;

use tokio::time::Instant;

use crate::error::{HarnessError, Result};

const PROBE_INTERVAL: Duration = Duration::from_millis(500);

/// Poll `base_url` until it answers with a success status or `timeout`
/// elapses.
///
/// # Errors
///
/// Returns [`HarnessError::AppUnreachable`] when the application never
/// answered in time.
pub async fn wait_for_app(base_url: &str, timeout: Duration) -> Result<()> {
    let client = reqwest::Client::new();
    let deadline = Instant::now() + timeout;

    loop {
        match client.get(base_url).send().await {
            Ok(response) if response.status().is_success() => {
                tracing::debug!(base_url, "target application is up");
                return Ok(());
            }
            Ok(response) => {
                tracing::debug!(base_url, status = %response.status(), "target application not ready");
            }
            Err(err) => {
                tracing::debug!(base_url, %err, "target application not reachable yet");
            }
        }
        if Instant::now() >= deadline {
            return Err(HarnessError::AppUnreachable(base_url.to_string()));
        }
        tokio::time::sleep(PROBE_INTERVAL).await;
    }
}
