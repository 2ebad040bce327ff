use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::constants::DEFAULT_PREVIEW_COUNT;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub preview: PreviewConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PreviewConfig {
    /// How many occurrences a preview expansion asks for.
    pub count: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and an optional
    /// `config.toml` into a `Settings`. Environment variables take
    /// precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it
    /// fails.
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .set_default("preview.count", i64::try_from(DEFAULT_PREVIEW_COUNT)?)?
            .set_default("logging.level", "info")?
            // Env file
            .add_source(
                config::Environment::default()
                    .convert_case(config::Case::Snake)
                    .separator("_")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Self>()?;
        tracing::debug!(settings = ?settings, "Settings resolved");
        Ok(settings)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
