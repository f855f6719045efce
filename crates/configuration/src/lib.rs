use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_logging;
pub use settings::{DatabaseSettings, LoggingSettings, Settings};

/// Prefix of the environment variables that override file settings,
/// e.g. `SWISS__DATABASE__MAX_CONNECTIONS`.
pub const ENV_PREFIX: &str = "SWISS";

/// Loads the application configuration.
///
/// Sources, lowest priority first: built-in defaults, an optional
/// `config.toml` in the working directory, `SWISS__*` environment variables,
/// and finally `DATABASE_URL`. A `.env` file is read first if one exists;
/// a `.env` that exists but cannot be parsed is an error.
pub fn load_settings() -> Result<Settings, ConfigError> {
    accept_missing_env_file(dotenvy::dotenv())?;
    layered_settings()
}

/// Like `load_settings`, reading environment overrides from `env_file`
/// instead of searching for `.env`.
pub fn load_settings_with_env_file(env_file: impl AsRef<Path>) -> Result<Settings, ConfigError> {
    accept_missing_env_file(dotenvy::from_path(env_file.as_ref()))?;
    layered_settings()
}

fn accept_missing_env_file<T>(loaded: Result<T, dotenvy::Error>) -> Result<(), ConfigError> {
    match loaded {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(ConfigError::EnvFileError(e)),
    }
}

fn layered_settings() -> Result<Settings, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::with_name("config").required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?;

    finish(builder)
}

/// Builds settings from TOML text alone, on top of the defaults.
pub fn settings_from_toml(contents: &str) -> Result<Settings, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from_str(contents, config::FileFormat::Toml));
    finish(builder)
}

fn finish(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> Result<Settings, ConfigError> {
    // Attempt to deserialize the entire configuration into our `Settings` struct
    let settings = builder.build()?.try_deserialize::<Settings>()?;
    settings.validate()?;
    Ok(settings)
}
