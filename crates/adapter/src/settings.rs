use std::str::FromStr;

use config::{Config, Environment, File, FileFormat};
use error_stack::{Report, ResultExt};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::ENV_PREFIX;
use crate::error::AdapterError;

const DEFAULT_SETTINGS_TOML: &str = include_str!("../../../nano-adapter.toml");

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct NanoInteractiveConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Partner endpoint every outbound request is posted to.
    #[validate(url)]
    pub endpoint: String,
}

fn default_enabled() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct Logging {
    #[serde(default = "default_log_level")]
    #[validate(custom(function = "validate_log_level"))]
    pub level: String,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Logging {
    /// Parsed log level, falling back to `Info` for anything unrecognised.
    #[must_use]
    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.level).unwrap_or(LevelFilter::Info)
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn validate_log_level(level: &str) -> Result<(), validator::ValidationError> {
    LevelFilter::from_str(level)
        .map(|_| ())
        .map_err(|_| validator::ValidationError::new("invalid_log_level"))
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct Settings {
    #[validate(nested)]
    pub nanointeractive: NanoInteractiveConfig,
    #[serde(default)]
    #[validate(nested)]
    pub logging: Logging,
}

impl Settings {
    /// Load the settings bundled with the crate, with environment overrides.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::Configuration`] if the merged settings cannot be
    /// deserialized.
    pub fn new() -> Result<Self, Report<AdapterError>> {
        Self::from_toml(DEFAULT_SETTINGS_TOML)
    }

    /// Parse settings from TOML and layer `NANO_ADAPTER__*` variables on top.
    ///
    /// For example `NANO_ADAPTER__NANOINTERACTIVE__ENDPOINT` overrides
    /// `nanointeractive.endpoint`. Validation is left to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::Configuration`] on malformed TOML or missing
    /// required fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, Report<AdapterError>> {
        let environment = Environment::default()
            .prefix(ENV_PREFIX)
            .separator("__");

        let toml = File::from_str(toml_str, FileFormat::Toml);
        let config = Config::builder()
            .add_source(toml)
            .add_source(environment)
            .build()
            .change_context(AdapterError::Configuration {
                message: "Failed to build configuration".to_string(),
            })?;

        config
            .try_deserialize()
            .change_context(AdapterError::Configuration {
                message: "Failed to deserialize configuration".to_string(),
            })
    }

    /// Render the effective settings (after environment overrides) as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::Configuration`] if serialization fails.
    pub fn to_canonical_toml(&self) -> Result<String, Report<AdapterError>> {
        toml::to_string(self).change_context(AdapterError::Configuration {
            message: "Failed to serialize settings".to_string(),
        })
    }
}
