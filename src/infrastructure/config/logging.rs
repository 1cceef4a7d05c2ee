//! Logging configuration and initialization.

use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, EnvFilter};

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_level() -> String {
    "info".into()
}

fn default_format() -> String {
    "pretty".into()
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    ///
    /// `RUST_LOG` overrides the configured level. Logs go to stderr so they
    /// never interleave with command output.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        // try_init: a subscriber installed earlier wins.
        match self.format.as_str() {
            "json" => {
                let _ = fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .try_init();
            }
            _ => {
                let _ = fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .try_init();
            }
        }
    }

    /// Return a copy with the level raised or lowered by CLI verbosity flags.
    #[must_use]
    pub fn with_verbosity(&self, quiet: bool, verbose: u8) -> Self {
        let level = if quiet {
            "error".to_string()
        } else {
            match verbose {
                0 => self.level.clone(),
                1 => "debug".to_string(),
                _ => "trace".to_string(),
            }
        };
        Self {
            level,
            format: self.format.clone(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_overrides_level() {
        let base = LoggingConfig::default();
        assert_eq!(base.with_verbosity(false, 0).level, "info");
        assert_eq!(base.with_verbosity(false, 1).level, "debug");
        assert_eq!(base.with_verbosity(false, 3).level, "trace");
        assert_eq!(base.with_verbosity(true, 2).level, "error");
    }
}
