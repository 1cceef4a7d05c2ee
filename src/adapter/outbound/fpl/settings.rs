//! Fantasy Premier League API settings.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Public FPL API root. Every endpoint path is relative to it.
pub const DEFAULT_BASE_URL: &str = "https://fantasy.premierleague.com/api/";

/// FPL HTTP client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API root URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Connect timeout in milliseconds.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
    /// User-Agent header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

const fn default_timeout_ms() -> u64 {
    10_000
}

const fn default_connect_timeout_ms() -> u64 {
    5_000
}

fn default_user_agent() -> String {
    concat!("qfpl/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            connect_timeout_ms: default_connect_timeout_ms(),
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }
}

/// Freshness windows for cached responses, in seconds.
///
/// Picks change during live play, so they get a shorter window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    #[serde(default = "default_long_ttl_secs")]
    pub bootstrap_ttl_secs: u64,
    #[serde(default = "default_long_ttl_secs")]
    pub standings_ttl_secs: u64,
    #[serde(default = "default_picks_ttl_secs")]
    pub picks_ttl_secs: u64,
    #[serde(default = "default_long_ttl_secs")]
    pub entry_ttl_secs: u64,
    #[serde(default = "default_long_ttl_secs")]
    pub fixtures_ttl_secs: u64,
    #[serde(default = "default_long_ttl_secs")]
    pub transfers_ttl_secs: u64,
}

const fn default_long_ttl_secs() -> u64 {
    300
}

const fn default_picks_ttl_secs() -> u64 {
    60
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            bootstrap_ttl_secs: default_long_ttl_secs(),
            standings_ttl_secs: default_long_ttl_secs(),
            picks_ttl_secs: default_picks_ttl_secs(),
            entry_ttl_secs: default_long_ttl_secs(),
            fixtures_ttl_secs: default_long_ttl_secs(),
            transfers_ttl_secs: default_long_ttl_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_upstream_windows() {
        let cache = CacheConfig::default();
        assert_eq!(cache.bootstrap_ttl_secs, 300);
        assert_eq!(cache.standings_ttl_secs, 300);
        assert_eq!(cache.picks_ttl_secs, 60);

        let api = ApiConfig::default();
        assert_eq!(api.base_url, DEFAULT_BASE_URL);
        assert_eq!(api.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn partial_tables_fill_defaults() {
        let cache: CacheConfig = toml::from_str("picks_ttl_secs = 15").unwrap();
        assert_eq!(cache.picks_ttl_secs, 15);
        assert_eq!(cache.bootstrap_ttl_secs, 300);
    }
}
