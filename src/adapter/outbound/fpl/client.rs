//! Fantasy Premier League REST API client.
//!
//! The only network boundary of the crate. Every fetch operation follows the
//! same soft-failure contract: on success it returns the decoded payload, and
//! on a transport failure, timeout, non-200 status or malformed body it logs
//! the cause and returns `None`. Callers render a "data unavailable" state
//! instead of handling errors.
//!
//! Successful responses are memoized per [`Endpoint`] for a configurable
//! freshness window. A failed fetch never touches the cache, so a stale
//! entry survives a flaky upstream and the next call goes back to the
//! network rather than replaying a failure. Entries hold the decoded value,
//! so a hit neither re-parses the body nor repeats its decode warnings.

use std::any::Any;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};
use url::Url;

use super::endpoint::Endpoint;
use super::http::HttpTransport;
use super::settings::{ApiConfig, CacheConfig};
use crate::application::cache::ResponseCache;
use crate::domain::{
    BootstrapSnapshot, EntrySummary, Fixture, GameweekId, LeagueId, LeagueStandings, PicksResult,
    TeamId, Transfer,
};
use crate::error::{FetchError, Result};
use crate::port::outbound::Transport;

/// A decoded response; the concrete type is fixed by its [`Endpoint`].
type CachedPayload = Arc<dyn Any + Send + Sync>;

/// Cached client for the public FPL API.
///
/// Construct one per process and pass it by reference (or `Arc`) to whatever
/// needs league data. The client is `Sync`; concurrent callers share the
/// cache.
pub struct LeagueDataClient<T = HttpTransport> {
    transport: T,
    base_url: Url,
    ttls: CacheConfig,
    cache: ResponseCache<Endpoint, CachedPayload>,
}

impl LeagueDataClient<HttpTransport> {
    /// Build a client backed by `reqwest` from configuration.
    pub fn from_config(api: &ApiConfig, ttls: CacheConfig) -> Result<Self> {
        let transport = HttpTransport::from_config(api)?;
        let base_url = api_root(&api.base_url)?;
        Ok(Self::new(transport, base_url, ttls))
    }
}

impl<T: Transport> LeagueDataClient<T> {
    /// Create a client over an arbitrary transport.
    ///
    /// `base_url` is used as a directory: a trailing slash is added if missing.
    #[must_use]
    pub fn new(transport: T, mut base_url: Url, ttls: CacheConfig) -> Self {
        ensure_directory(&mut base_url);
        Self {
            transport,
            base_url,
            ttls,
            cache: ResponseCache::new(),
        }
    }

    /// Players, clubs and gameweeks.
    pub async fn fetch_bootstrap(&self) -> Option<BootstrapSnapshot> {
        self.fetch(Endpoint::Bootstrap).await
    }

    /// Classic league standings, ordered by rank when ranks are present.
    pub async fn fetch_league_standings(&self, league_id: LeagueId) -> Option<LeagueStandings> {
        self.fetch::<LeagueStandings>(Endpoint::ClassicStandings(league_id))
            .await
            .map(LeagueStandings::normalized)
    }

    /// A team's picks for one gameweek.
    pub async fn fetch_team_picks(
        &self,
        team_id: TeamId,
        gameweek: GameweekId,
    ) -> Option<PicksResult> {
        self.fetch(Endpoint::Picks {
            team: team_id,
            gameweek,
        })
        .await
    }

    pub async fn fetch_entry(&self, team_id: TeamId) -> Option<EntrySummary> {
        self.fetch(Endpoint::Entry(team_id)).await
    }

    pub async fn fetch_fixtures(&self) -> Option<Vec<Fixture>> {
        self.fetch(Endpoint::Fixtures).await
    }

    pub async fn fetch_transfers(&self, team_id: TeamId) -> Option<Vec<Transfer>> {
        self.fetch(Endpoint::Transfers(team_id)).await
    }

    /// The gameweek flagged as current upstream.
    ///
    /// Falls back to gameweek 1 when bootstrap is unavailable or no gameweek
    /// is flagged.
    pub async fn current_gameweek(&self) -> GameweekId {
        self.fetch_bootstrap()
            .await
            .map_or(GameweekId::FIRST, |snapshot| snapshot.current_gameweek())
    }

    /// Drop every cached response; the next fetch of anything hits the network.
    pub fn invalidate_cache(&self) {
        let dropped = self.cache.len();
        self.cache.clear();
        info!(dropped, "Response cache cleared");
    }

    /// Number of cached responses, fresh or stale.
    #[must_use]
    pub fn cached_responses(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn fetch<D>(&self, endpoint: Endpoint) -> Option<D>
    where
        D: DeserializeOwned + Clone + Send + Sync + 'static,
    {
        match self.try_fetch(&endpoint).await {
            Ok(parsed) => Some(parsed),
            Err(err) => {
                warn!(
                    endpoint = %endpoint,
                    transport = self.transport.name(),
                    kind = err.kind(),
                    error = %err,
                    "Upstream data unavailable"
                );
                None
            }
        }
    }

    async fn try_fetch<D>(&self, endpoint: &Endpoint) -> std::result::Result<D, FetchError>
    where
        D: DeserializeOwned + Clone + Send + Sync + 'static,
    {
        endpoint.validate()?;

        let ttl = endpoint.ttl(&self.ttls);
        if let Some(payload) = self.cache.get_fresh(endpoint, ttl) {
            if let Some(parsed) = payload.downcast_ref::<D>() {
                debug!(endpoint = %endpoint, "Cache hit");
                return Ok(parsed.clone());
            }
            debug!(endpoint = %endpoint, "Cached payload has another type, refetching");
        }

        let url = endpoint
            .url(&self.base_url)
            .map_err(|e| FetchError::InvalidRequest(e.to_string()))?;
        info!(url = %url, "Fetching from upstream");

        let body = self.transport.get(url.as_str()).await?;
        let parsed = serde_json::from_str::<D>(&body)?;
        // Only bodies that decoded are cached.
        let payload: CachedPayload = Arc::new(parsed.clone());
        self.cache.insert(*endpoint, payload);
        debug!(endpoint = %endpoint, "Cache updated");

        Ok(parsed)
    }
}

/// Parse an API root URL, forcing a trailing slash so endpoint paths join
/// underneath it.
pub fn api_root(base: &str) -> std::result::Result<Url, url::ParseError> {
    let mut url = Url::parse(base)?;
    ensure_directory(&mut url);
    Ok(url)
}

fn ensure_directory(url: &mut Url) {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
}
