//! qfpl - Fantasy Premier League league data and dashboard aggregates.
//!
//! This crate fetches public FPL data (gameweeks, classic league standings,
//! team picks), memoizes successful responses for a short freshness window,
//! and derives the summaries a league dashboard shows.
//!
//! # Architecture
//!
//! - **`domain`** - Typed upstream payloads and pure aggregate builders
//!   (`classify_phase`, `summarize`, `summarize_forming`, name filtering)
//! - **`port::outbound::Transport`** - The single network seam
//! - **`adapter::outbound::fpl`** - `LeagueDataClient`, the cached, soft-failing
//!   API client, and its `reqwest` transport
//! - **`application`** - Response cache and dashboard views that keep
//!   "unavailable" and "empty" apart
//! - **`adapter::inbound::cli`** - The `qfpl` command-line front-end
//!
//! # Modules
//!
//! - [`domain`] - League, bootstrap, picks and entry types; summaries
//! - [`port`] - Trait boundaries
//! - [`application`] - Cache and view assembly
//! - [`adapter`] - HTTP client and CLI
//! - [`infrastructure`] - Configuration and logging
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use qfpl::adapter::outbound::fpl::{ApiConfig, CacheConfig, LeagueDataClient};
//! use qfpl::domain::{summarize, LeagueId};
//!
//! # async fn demo() -> qfpl::error::Result<()> {
//! let client = LeagueDataClient::from_config(&ApiConfig::default(), CacheConfig::default())?;
//! if let Some(league) = client.fetch_league_standings(LeagueId::new(65_689)).await {
//!     let summary = summarize(league.standings());
//!     println!("{} teams, top GW score {}", summary.player_count, summary.top_gw);
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
