//! Web configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `CATALOG_HOST` - Bind address (default: 127.0.0.1)
//! - `CATALOG_PORT` - Listen port (default: 8080)
//! - `CATALOG_LOGIN_USERNAME` - Username accepted by the login form (default: admin)
//! - `CATALOG_LOGIN_PASSWORD` - Password accepted by the login form (default: 123)
//! - `CATALOG_STATIC_DIR` - Directory served under `/static` (default: crates/web/static)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error event sample rate, 0.0 to 1.0 (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Transaction sample rate, 0.0 to 1.0 (default: 0.0)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;

const DEFAULT_LOGIN_USERNAME: &str = "admin";
const DEFAULT_LOGIN_PASSWORD: &str = "123";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Web application configuration.
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Credentials accepted by `POST /login`
    pub login: LoginConfig,
    /// Directory holding the stylesheet served under `/static`
    pub static_dir: PathBuf,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name (e.g. "production")
    pub sentry_environment: Option<String>,
    /// Fraction of error events sent to Sentry
    pub sentry_sample_rate: f32,
    /// Fraction of transactions sent to Sentry
    pub sentry_traces_sample_rate: f32,
}

/// The single account accepted by the login form.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone)]
pub struct LoginConfig {
    pub username: String,
    pub password: SecretString,
}

impl std::fmt::Debug for LoginConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginConfig")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            username: DEFAULT_LOGIN_USERNAME.to_string(),
            password: SecretString::from(DEFAULT_LOGIN_PASSWORD),
        }
    }
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 8080,
            login: LoginConfig::default(),
            static_dir: PathBuf::from("crates/web/static"),
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.0,
        }
    }
}

impl WebConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = match lookup("CATALOG_HOST") {
            Some(raw) => parse_var("CATALOG_HOST", &raw)?,
            None => defaults.host,
        };
        let port = match lookup("CATALOG_PORT") {
            Some(raw) => parse_var("CATALOG_PORT", &raw)?,
            None => defaults.port,
        };

        let username = lookup("CATALOG_LOGIN_USERNAME")
            .unwrap_or_else(|| DEFAULT_LOGIN_USERNAME.to_string());
        if username.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "CATALOG_LOGIN_USERNAME".to_string(),
                "must not be empty".to_string(),
            ));
        }
        let password = lookup("CATALOG_LOGIN_PASSWORD")
            .map_or_else(|| SecretString::from(DEFAULT_LOGIN_PASSWORD), SecretString::from);

        let static_dir = lookup("CATALOG_STATIC_DIR").map_or(defaults.static_dir, PathBuf::from);

        let sentry_sample_rate = match lookup("SENTRY_SAMPLE_RATE") {
            Some(raw) => parse_rate("SENTRY_SAMPLE_RATE", &raw)?,
            None => defaults.sentry_sample_rate,
        };
        let sentry_traces_sample_rate = match lookup("SENTRY_TRACES_SAMPLE_RATE") {
            Some(raw) => parse_rate("SENTRY_TRACES_SAMPLE_RATE", &raw)?,
            None => defaults.sentry_traces_sample_rate,
        };

        Ok(Self {
            host,
            port,
            login: LoginConfig { username, password },
            static_dir,
            sentry_dsn: lookup("SENTRY_DSN").filter(|dsn| !dsn.is_empty()),
            sentry_environment: lookup("SENTRY_ENVIRONMENT"),
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a variable into any `FromStr` type.
fn parse_var<T>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Parse a sample rate, which must lie in `0.0..=1.0`.
fn parse_rate(key: &str, raw: &str) -> Result<f32, ConfigError> {
    let rate: f32 = parse_var(key, raw)?;
    if (0.0..=1.0).contains(&rate) {
        Ok(rate)
    } else {
        Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("must be between 0.0 and 1.0 (got {rate})"),
        ))
    }
}
