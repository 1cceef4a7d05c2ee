//! Upstream endpoint table.
//!
//! An [`Endpoint`] is both the URL template for a request and the key it is
//! cached under, so two calls with the same arguments always share a cache
//! entry.

use std::fmt;
use std::time::Duration;

use url::Url;

use super::settings::CacheConfig;
use crate::domain::{GameweekId, LeagueId, TeamId};
use crate::error::FetchError;

/// One distinct upstream request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Bootstrap,
    Fixtures,
    ClassicStandings(LeagueId),
    /// Head-to-head standings. Modelled for completeness; nothing fetches it.
    H2hStandings(LeagueId),
    Entry(TeamId),
    Picks { team: TeamId, gameweek: GameweekId },
    Transfers(TeamId),
}

impl Endpoint {
    /// Path relative to the API root, always with a trailing slash.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Bootstrap => "bootstrap-static/".to_string(),
            Self::Fixtures => "fixtures/".to_string(),
            Self::ClassicStandings(league) => format!("leagues-classic/{league}/standings/"),
            Self::H2hStandings(league) => format!("leagues-h2h/{league}/standings/"),
            Self::Entry(team) => format!("entry/{team}/"),
            Self::Picks { team, gameweek } => {
                format!("entry/{team}/event/{}/picks/", gameweek.get())
            }
            Self::Transfers(team) => format!("entry/{team}/transfers/"),
        }
    }

    /// Resolve against `base`, which must end with a slash.
    pub fn url(&self, base: &Url) -> Result<Url, url::ParseError> {
        base.join(&self.path())
    }

    /// Freshness window for this request.
    #[must_use]
    pub const fn ttl(&self, cache: &CacheConfig) -> Duration {
        let secs = match self {
            Self::Bootstrap => cache.bootstrap_ttl_secs,
            Self::Fixtures => cache.fixtures_ttl_secs,
            Self::ClassicStandings(_) | Self::H2hStandings(_) => cache.standings_ttl_secs,
            Self::Entry(_) => cache.entry_ttl_secs,
            Self::Picks { .. } => cache.picks_ttl_secs,
            Self::Transfers(_) => cache.transfers_ttl_secs,
        };
        Duration::from_secs(secs)
    }

    /// Reject non-positive identifiers before any I/O.
    pub fn validate(&self) -> Result<(), FetchError> {
        let valid = match self {
            Self::Bootstrap | Self::Fixtures => true,
            Self::ClassicStandings(league) | Self::H2hStandings(league) => league.is_valid(),
            Self::Entry(team) | Self::Transfers(team) => team.is_valid(),
            Self::Picks { team, gameweek } => team.is_valid() && gameweek.is_valid(),
        };
        if valid {
            Ok(())
        } else {
            Err(FetchError::InvalidRequest(format!(
                "identifiers must be positive: {}",
                self.path()
            )))
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
