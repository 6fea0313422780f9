//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `STOREFRONT_BASE_URL` - Public URL for the storefront (default: http://localhost:3000)
//! - `STOREFRONT_CATALOG_PATH` - JSON product catalog; the bundled seed catalog is used when unset
//! - `STOREFRONT_STATIC_DIR` - Directory served under `/static` (default: crates/storefront/static)
//! - `STOREFRONT_LOG_FORMAT` - `text` or `json` (default: text)
//! - `STOREFRONT_SESSION_CAPACITY` - Maximum sessions held in memory (default: 100000)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name (e.g., production)
//! - `SENTRY_SAMPLE_RATE` - Error event sample rate, 0.0 to 1.0 (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Transaction sample rate, 0.0 to 1.0 (default: 0.0)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;
use url::Url;

/// Static assets directory, relative to the workspace root.
const DEFAULT_STATIC_DIR: &str = "crates/storefront/static";

/// Default upper bound on in-memory sessions.
const DEFAULT_SESSION_CAPACITY: u64 = 100_000;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront (validated as an absolute URL)
    pub base_url: String,
    /// Product catalog file; `None` selects the bundled seed catalog
    pub catalog_path: Option<PathBuf>,
    /// Directory of static assets
    pub static_dir: PathBuf,
    /// Emit logs as JSON lines instead of human-readable text
    pub log_json: bool,
    /// Maximum number of sessions kept in memory
    pub session_capacity: u64,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment tag
    pub sentry_environment: Option<String>,
    /// Fraction of error events sent to Sentry
    pub sentry_sample_rate: f32,
    /// Fraction of transactions sent to Sentry
    pub sentry_traces_sample_rate: f32,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            catalog_path: None,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            log_json: false,
            session_capacity: DEFAULT_SESSION_CAPACITY,
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.0,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = parse_env("STOREFRONT_HOST", "127.0.0.1")?;
        let port = parse_env("STOREFRONT_PORT", "3000")?;
        let base_url = get_env_or_default("STOREFRONT_BASE_URL", "http://localhost:3000");
        Url::parse(&base_url).map_err(|e| {
            ConfigError::InvalidEnvVar("STOREFRONT_BASE_URL".to_string(), e.to_string())
        })?;
        let catalog_path = get_optional_env("STOREFRONT_CATALOG_PATH").map(PathBuf::from);
        let static_dir =
            PathBuf::from(get_env_or_default("STOREFRONT_STATIC_DIR", DEFAULT_STATIC_DIR));
        let log_json = parse_log_format(&get_env_or_default("STOREFRONT_LOG_FORMAT", "text"))?;
        let session_capacity = parse_capacity(&get_env_or_default(
            "STOREFRONT_SESSION_CAPACITY",
            &DEFAULT_SESSION_CAPACITY.to_string(),
        ))?;

        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");
        let sentry_sample_rate = parse_rate("SENTRY_SAMPLE_RATE", "1.0")?;
        let sentry_traces_sample_rate = parse_rate("SENTRY_TRACES_SAMPLE_RATE", "0.0")?;

        Ok(Self {
            host,
            port,
            base_url,
            catalog_path,
            static_dir,
            log_json,
            session_capacity,
            sentry_dsn,
            sentry_environment,
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether the storefront is served over HTTPS (secure cookies).
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    get_optional_env(key).unwrap_or_else(|| default.to_string())
}

/// Parse an environment variable, falling back to a default.
fn parse_env<T>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    parse_value(key, &get_env_or_default(key, default))
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Parse `STOREFRONT_LOG_FORMAT`; `true` selects JSON output.
fn parse_log_format(raw: &str) -> Result<bool, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "text" => Ok(false),
        "json" => Ok(true),
        other => Err(ConfigError::InvalidEnvVar(
            "STOREFRONT_LOG_FORMAT".to_string(),
            format!("expected `text` or `json`, got `{other}`"),
        )),
    }
}

/// Parse `STOREFRONT_SESSION_CAPACITY`; zero is rejected.
fn parse_capacity(raw: &str) -> Result<u64, ConfigError> {
    match parse_value("STOREFRONT_SESSION_CAPACITY", raw)? {
        0 => Err(ConfigError::InvalidEnvVar(
            "STOREFRONT_SESSION_CAPACITY".to_string(),
            "must be at least 1".to_string(),
        )),
        capacity => Ok(capacity),
    }
}

/// Parse a sample rate and check it lies within 0.0..=1.0.
fn parse_rate(key: &str, default: &str) -> Result<f32, ConfigError> {
    let raw = get_env_or_default(key, default);
    validate_rate(key, parse_value(key, &raw)?)
}

fn validate_rate(key: &str, rate: f32) -> Result<f32, ConfigError> {
    if (0.0..=1.0).contains(&rate) {
        Ok(rate)
    } else {
        Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("must be between 0.0 and 1.0 (got {rate})"),
        ))
    }
}
