//! Upstream-agnostic league domain: typed payloads and derived aggregates.

pub mod bootstrap;
pub mod entry;
pub mod id;
pub mod league;
pub mod picks;
pub mod summary;

pub use bootstrap::{BootstrapSnapshot, Club, Gameweek, Player};
pub use entry::{EntrySummary, Fixture, Transfer};
pub use id::{GameweekId, LeagueId, TeamId};
pub use league::{LeagueInfo, LeagueStandings, NewEntry, Page, StandingsEntry};
pub use picks::{AutomaticSub, EntryHistory, Pick, PicksResult};
pub use summary::{
    classify_phase, distribution, filter_by_name_substring, summarize, summarize_forming,
    top_performers, Bucket, FormingSummary, Phase, Summary, MINIMUM_SQUAD_SIZE,
};
