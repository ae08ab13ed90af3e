//! Application configuration.

use serde::Deserialize;
use std::path::Path;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    /// Display conventions for mobile responses.
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Display conventions for dates and money in mobile responses.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// `chrono` format string for dates shown to the app.
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// Currency code used when a document carries none.
    #[serde(default = "default_currency")]
    pub default_currency: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            default_currency: default_currency(),
        }
    }
}

fn default_date_format() -> String {
    "%d-%m-%Y".to_string()
}

fn default_currency() -> String {
    "INR".to_string()
}

impl Settings {
    /// Load configuration from files and environment variables.
    ///
    /// Configuration is loaded in the following order:
    /// 1. `config/default.toml`
    /// 2. `config/{environment}.toml` (based on `ESS_ENV`)
    /// 3. Environment variables with `ESS_` prefix
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();
        let env = std::env::var("ESS_ENV").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("ESS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Load configuration from a specific file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(
                config::Environment::with_prefix("ESS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
