//! Scenario runner.
//!
//! Scenarios execute strictly sequentially against the one shared browser
//! session; there is no scenario-level retry, and a failure is recorded
//! while the run continues. Before each scenario the runner attempts to
//! converge the session on the scenario's named precondition; convergence
//! is attempted, not verified, and scenarios assert their own state.

use std::future::Future;
use std::pin::Pin;
use std::time::Instant;

use serde::Serialize;

use crate::error::Result;
use crate::session::Session;

/// Session state a scenario wants on entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precondition {
    /// No convergence attempt; the scenario manages state itself.
    Anything,
    LoggedIn,
    LoggedOut,
}

/// Boxed scenario future, borrowing the shared session.
pub type ScenarioFuture<'a> = Pin<Box<dyn Future<Output = Result<()>> + 'a>>;

/// A scenario entry point.
pub type ScenarioFn = for<'a> fn(&'a mut Session) -> ScenarioFuture<'a>;

/// One registered scenario.
pub struct Scenario {
    pub name: &'static str,
    pub precondition: Precondition,
    /// Registered-but-pending scenarios carry the reason they are skipped.
    pub skip: Option<&'static str>,
    pub run: ScenarioFn,
}

impl Scenario {
    #[must_use]
    pub const fn new(name: &'static str, precondition: Precondition, run: ScenarioFn) -> Self {
        Self {
            name,
            precondition,
            skip: None,
            run,
        }
    }

    /// Register a scenario that stays pending with an explicit reason.
    #[must_use]
    pub const fn pending(
        name: &'static str,
        precondition: Precondition,
        reason: &'static str,
        run: ScenarioFn,
    ) -> Self {
        Self {
            name,
            precondition,
            skip: Some(reason),
            run,
        }
    }
}

/// Outcome of one scenario.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Status {
    Passed,
    Failed { message: String },
    Skipped { reason: String },
}

/// Result of running a single scenario.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioResult {
    pub name: String,
    #[serde(flatten)]
    pub status: Status,
    pub duration_ms: u64,
}

/// Result of running the whole suite.
#[derive(Debug, Clone, Serialize)]
pub struct SuiteSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub duration_ms: u64,
    pub results: Vec<ScenarioResult>,
}

impl SuiteSummary {
    fn new() -> Self {
        Self {
            total: 0,
            passed: 0,
            failed: 0,
            skipped: 0,
            duration_ms: 0,
            results: Vec::new(),
        }
    }

    fn record(&mut self, result: ScenarioResult) {
        self.total += 1;
        match &result.status {
            Status::Passed => self.passed += 1,
            Status::Failed { .. } => self.failed += 1,
            Status::Skipped { .. } => self.skipped += 1,
        }
        self.results.push(result);
    }

    /// Whether the run had no failures.
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Run `scenarios` in order against the shared session.
pub async fn run_suite(session: &mut Session, scenarios: &[Scenario]) -> SuiteSummary {
    let start = Instant::now();
    let mut summary = SuiteSummary::new();

    tracing::info!("Running {} scenario(s)...", scenarios.len());

    for scenario in scenarios {
        let scenario_start = Instant::now();

        if let Some(reason) = scenario.skip {
            tracing::warn!("- {} (skipped: {reason})", scenario.name);
            summary.record(ScenarioResult {
                name: scenario.name.to_string(),
                status: Status::Skipped {
                    reason: reason.to_string(),
                },
                duration_ms: 0,
            });
            continue;
        }

        converge(session, scenario.precondition).await;

        let status = match (scenario.run)(session).await {
            Ok(()) => Status::Passed,
            Err(err) => Status::Failed {
                message: err.to_string(),
            },
        };
        let duration_ms = elapsed_ms(scenario_start);

        match &status {
            Status::Passed => tracing::info!("✓ {} ({duration_ms} ms)", scenario.name),
            Status::Failed { message } => tracing::error!("✗ {} - {message}", scenario.name),
            Status::Skipped { .. } => {}
        }
        summary.record(ScenarioResult {
            name: scenario.name.to_string(),
            status,
            duration_ms,
        });
    }

    summary.duration_ms = elapsed_ms(start);
    tracing::info!(
        "Results: {} passed, {} failed, {} skipped ({} ms)",
        summary.passed,
        summary.failed,
        summary.skipped,
        summary.duration_ms
    );
    summary
}

/// Attempt to converge on a precondition; best-effort by design.
async fn converge(session: &mut Session, precondition: Precondition) {
    let attempt = match precondition {
        Precondition::Anything => Ok(()),
        Precondition::LoggedIn => session.ensure_logged_in().await,
        Precondition::LoggedOut => session.ensure_logged_out().await,
    };
    if let Err(err) = attempt {
        tracing::warn!(%err, ?precondition, "precondition attempt failed, running scenario anyway");
    }
}

fn elapsed_ms(since: Instant) -> u64 {
    u64::try_from(since.elapsed().as_millis()).unwrap_or(u64::MAX)
}

/// Scenario-level assertion. Produces a formatted diagnostic and fails the
/// current scenario without aborting the run.
#[macro_export]
macro_rules! verify {
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            return Err($crate::error::HarnessError::Assertion(format!($($arg)+)));
        }
    };
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn result(name: &str, status: Status) -> ScenarioResult {
        ScenarioResult {
            name: name.to_string(),
            status,
            duration_ms: 1,
        }
    }

    #[test]
    fn test_summary_accounting() {
        let mut summary = SuiteSummary::new();
        summary.record(result("a", Status::Passed));
        summary.record(result(
            "b",
            Status::Failed {
                message: "boom".to_string(),
            },
        ));
        summary.record(result(
            "c",
            Status::Skipped {
                reason: "pending".to_string(),
            },
        ));

        assert_eq!(summary.total, 3);
        assert_eq!(summary.passed, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.skipped, 1);
        assert!(!summary.all_passed());
    }

    #[test]
    fn test_summary_serializes_status_tags() {
        let mut summary = SuiteSummary::new();
        summary.record(result("a", Status::Passed));
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["results"][0]["status"], "passed");
        assert_eq!(json["results"][0]["name"], "a");
    }

    #[test]
    fn test_verify_macro_formats_message() {
        fn check(flag: bool) -> crate::error::Result<()> {
            verify!(flag, "expected flag, got {flag}");
            Ok(())
        }
        assert!(check(true).is_ok());
        let err = check(false).unwrap_err();
        assert_eq!(err.to_string(), "Assertion failed: expected flag, got false");
    }
}
