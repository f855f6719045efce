use crate::error::ConfigError;
use serde::Deserialize;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub logging: LoggingSettings,
}

/// Contains parameters for the PostgreSQL connection pool.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// The connection URL. `DATABASE_URL` overrides this when set.
    pub url: String,
    /// Upper bound on pooled connections.
    pub max_connections: u32,
    /// How long an operation may wait for a free connection before failing.
    pub acquire_timeout_secs: u64,
}

/// Contains parameters for the tracing subscriber.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// An `EnvFilter` directive such as "info" or "swiss=debug,sqlx=warn".
    /// `RUST_LOG` takes precedence when it is set.
    pub level: String,
    /// When present, logs are also written to a daily rolling file in this directory.
    pub directory: Option<String>,
    /// File name prefix for the rolling log files.
    pub file_prefix: String,
}

// --- Default Implementations ---
// These allow a user to omit any section, or the whole file, and still have
// the application start against a local database.

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: "postgres://localhost/tournament".to_string(),
            max_connections: 5,
            acquire_timeout_secs: 5,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
            file_prefix: "swiss".to_string(),
        }
    }
}

impl Settings {
    /// Checks the values that deserialization alone cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.url.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "database.url must not be empty".to_string(),
            ));
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::ValidationError(
                "database.max_connections must be greater than 0".to_string(),
            ));
        }
        if self.database.acquire_timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "database.acquire_timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.logging.file_prefix.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "logging.file_prefix must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
