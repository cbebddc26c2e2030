//! Suite configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional; defaults target a local development instance of the
//! storefront with a seeded test account.
//!
//! - `E2E_BASE_URL` - Base URL of the storefront under test (default: `http://localhost:3000`)
//! - `E2E_WEBDRIVER_URL` - WebDriver server endpoint (default: `http://localhost:9515`)
//! - `E2E_VALID_EMAIL` - Known-registered account email
//! - `E2E_VALID_PASSWORD` - Password for the registered account
//! - `E2E_INVALID_PASSWORD` - A password known to be wrong for that account
//! - `E2E_UNREGISTERED_EMAIL` - An email with no account behind it
//! - `E2E_HEADLESS` - Run the browser headless (`1`/`true`, default: off)
//! - `E2E_WAIT_TIMEOUT_SECS` - Explicit wait window in seconds (default: 10)
//! - `E2E_SETTLE_MILLIS` - Last-resort settle delay in milliseconds (default: 1000)

use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),

    #[error("Invalid URL in {0}: {1}")]
    InvalidUrl(String, #[source] url::ParseError),
}

/// Top-level suite configuration.
#[derive(Debug, Clone)]
pub struct SuiteConfig {
    /// Base URL of the storefront under test, no trailing slash.
    pub base_url: String,
    /// WebDriver server endpoint.
    pub webdriver_url: String,
    /// Test account credentials.
    pub credentials: Credentials,
    /// Run the browser headless.
    pub headless: bool,
    /// Explicit wait window for polled conditions.
    pub wait_timeout: Duration,
    /// Bounded settle delay used only where no completion predicate exists.
    pub settle_delay: Duration,
}

/// Credentials used by the session controller.
///
/// Implements `Debug` manually to redact the passwords.
#[derive(Clone)]
pub struct Credentials {
    /// Known-registered account email.
    pub valid_email: String,
    /// Password for the registered account.
    pub valid_password: SecretString,
    /// A password known to be wrong for that account.
    pub invalid_password: SecretString,
    /// An email with no account behind it.
    pub unregistered_email: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("valid_email", &self.valid_email)
            .field("valid_password", &"[REDACTED]")
            .field("invalid_password", &"[REDACTED]")
            .field("unregistered_email", &self.unregistered_email)
            .finish()
    }
}

impl SuiteConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a numeric variable fails to parse or a
    /// URL variable is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let base_url = get_env_or_default("E2E_BASE_URL", "http://localhost:3000")
            .trim_end_matches('/')
            .to_string();
        url::Url::parse(&base_url)
            .map_err(|e| ConfigError::InvalidUrl("E2E_BASE_URL".to_string(), e))?;
        let webdriver_url = get_env_or_default("E2E_WEBDRIVER_URL", "http://localhost:9515");
        url::Url::parse(&webdriver_url)
            .map_err(|e| ConfigError::InvalidUrl("E2E_WEBDRIVER_URL".to_string(), e))?;
        let headless = get_env_flag("E2E_HEADLESS");
        let wait_timeout =
            Duration::from_secs(get_env_parsed("E2E_WAIT_TIMEOUT_SECS", 10)?);
        let settle_delay =
            Duration::from_millis(get_env_parsed("E2E_SETTLE_MILLIS", 1000)?);

        Ok(Self {
            base_url,
            webdriver_url,
            credentials: Credentials::from_env(),
            headless,
            wait_timeout,
            settle_delay,
        })
    }

    /// Build an absolute URL for a path on the target application.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Credentials {
    fn from_env() -> Self {
        Self {
            valid_email: get_env_or_default("E2E_VALID_EMAIL", "testuser@mavs.uta.edu"),
            valid_password: SecretString::from(get_env_or_default(
                "E2E_VALID_PASSWORD",
                "password@123",
            )),
            invalid_password: SecretString::from(get_env_or_default(
                "E2E_INVALID_PASSWORD",
                "wrongpassword",
            )),
            unregistered_email: get_env_or_default(
                "E2E_UNREGISTERED_EMAIL",
                "nosuchuser@example.com",
            ),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Interpret an environment variable as a boolean flag.
fn get_env_flag(key: &str) -> bool {
    std::env::var(key)
        .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Parse an environment variable into a number, with a default.
fn get_env_parsed(key: &str, default: u64) -> Result<u64, ConfigError> {
    match std::env::var(key) {
        Ok(value) => value
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_path() {
        let config = SuiteConfig {
            base_url: "http://localhost:3000".to_string(),
            webdriver_url: "http://localhost:9515".to_string(),
            credentials: Credentials::from_env(),
            headless: false,
            wait_timeout: Duration::from_secs(10),
            settle_delay: Duration::from_millis(1000),
        };
        assert_eq!(config.url("/cart"), "http://localhost:3000/cart");
        assert_eq!(config.url("/product/1"), "http://localhost:3000/product/1");
    }

    #[test]
    fn test_credentials_debug_redacts_passwords() {
        let creds = Credentials::from_env();
        let debug_output = format!("{creds:?}");
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("password@123"));
        assert!(!debug_output.contains("wrongpassword"));
    }

    #[test]
    fn test_get_env_parsed_default() {
        assert_eq!(get_env_parsed("E2E_NO_SUCH_VAR_FOR_TEST", 42).unwrap(), 42);
    }
}
