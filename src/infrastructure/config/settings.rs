//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Every section is optional in the TOML file and falls back to defaults that
//! point at the public FPL API.
//!
//! # Example
//!
//! ```no_run
//! use qfpl::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::league::LeagueConfig;
use super::logging::LoggingConfig;
use crate::adapter::outbound::fpl::{api_root, ApiConfig, CacheConfig};
use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub leagues: LeagueConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load `path` if it exists, otherwise use defaults.
    ///
    /// A file that exists but fails to parse or validate is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn init_logging(&self) {
        self.logging.init();
    }

    /// Render as TOML, defaults included.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| {
            ConfigError::InvalidValue {
                field: "config",
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "base_url" }.into());
        }
        if let Err(e) = api_root(&self.api.base_url) {
            return Err(ConfigError::InvalidValue {
                field: "base_url",
                reason: e.to_string(),
            }
            .into());
        }
        if self.api.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.api.connect_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "connect_timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if !self.leagues.qfpl_main.is_valid() {
            return Err(ConfigError::InvalidValue {
                field: "qfpl_main",
                reason: "must be a positive league id".to_string(),
            }
            .into());
        }
        if !self.leagues.nfo_mini.is_valid() {
            return Err(ConfigError::InvalidValue {
                field: "nfo_mini",
                reason: "must be a positive league id".to_string(),
            }
            .into());
        }
        if self.leagues.minimum_squad_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "minimum_squad_size",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: format!("expected \"pretty\" or \"json\", got {:?}", self.logging.format),
            }
            .into());
        }
        Ok(())
    }
}
