//! Storefront E2E harness library.
//!
//! Fixtures and synchronization primitives for browser-driven tests of the
//! storefront (home, listings, product detail, cart, wishlist). The
//! application under test and the WebDriver server are external
//! collaborators; this crate only drives and observes them.
//!
//! # Architecture
//!
//! - [`wait`] - polling wait primitive every asynchronous UI effect routes
//!   through
//! - [`toast`] - transient-notification observer
//! - [`session`] - the shared browser handle and its authentication state
//!   machine
//! - [`cart`] / [`wishlist`] - state managers that drive the user's
//!   collections to a required precondition state through UI actions
//! - [`runner`] - sequential scenario runner owning pass/fail accounting
//!
//! One browser session is shared for the whole run: the suite orchestrator
//! acquires it once, threads it through every scenario, and releases it on
//! all exit paths. Scenarios must not assume isolation: side effects
//! persist across scenario boundaries unless a setup step resets them.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod config;
pub mod error;
pub mod probe;
pub mod runner;
pub mod select;
pub mod selectors;
pub mod session;
pub mod toast;
pub mod wait;
pub mod wishlist;

pub use cart::{Cart, SummaryField, VariantOptions};
pub use config::SuiteConfig;
pub use error::{HarnessError, Result};
pub use runner::{Precondition, Scenario, ScenarioFuture, SuiteSummary, run_suite};
pub use session::{Session, SessionState};
pub use toast::{Severity, expect_toast};
pub use wishlist::{ToggleOutcome, Wishlist};
