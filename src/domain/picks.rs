//! A team's squad selection for one gameweek.

use serde::{Deserialize, Serialize};

use super::id::{GameweekId, TeamId};

/// Payload of the `entry/{team_id}/event/{event_id}/picks/` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PicksResult {
    #[serde(default)]
    pub active_chip: Option<String>,
    #[serde(default)]
    pub entry_history: Option<EntryHistory>,
    pub picks: Vec<Pick>,
    #[serde(default)]
    pub automatic_subs: Vec<AutomaticSub>,
}

/// The team's score line for the gameweek.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntryHistory {
    pub event: GameweekId,
    #[serde(default)]
    pub points: i64,
    #[serde(default)]
    pub total_points: i64,
    #[serde(default)]
    pub rank: Option<u64>,
    #[serde(default)]
    pub overall_rank: Option<u64>,
    /// Money in the bank, tenths of a million.
    #[serde(default)]
    pub bank: i64,
    /// Squad value, tenths of a million.
    #[serde(default)]
    pub value: i64,
    #[serde(default)]
    pub event_transfers: u32,
    #[serde(default)]
    pub event_transfers_cost: i64,
    #[serde(default)]
    pub points_on_bench: i64,
}

/// One selected player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pick {
    /// Player id, see [`crate::domain::Player::id`].
    pub element: u32,
    /// Squad slot 1..=15; slots 12..=15 are the bench.
    pub position: u8,
    #[serde(default)]
    pub multiplier: u8,
    #[serde(default)]
    pub is_captain: bool,
    #[serde(default)]
    pub is_vice_captain: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutomaticSub {
    pub entry: TeamId,
    pub element_in: u32,
    pub element_out: u32,
    pub event: GameweekId,
}

/// Starting XI occupy squad slots 1 through 11.
pub const STARTING_SLOTS: u8 = 11;

impl Pick {
    #[must_use]
    pub const fn is_starter(&self) -> bool {
        self.position <= STARTING_SLOTS
    }
}

impl PicksResult {
    #[must_use]
    pub fn captain(&self) -> Option<&Pick> {
        self.picks.iter().find(|p| p.is_captain)
    }

    #[must_use]
    pub fn vice_captain(&self) -> Option<&Pick> {
        self.picks.iter().find(|p| p.is_vice_captain)
    }

    pub fn starters(&self) -> impl Iterator<Item = &Pick> {
        self.picks.iter().filter(|p| p.is_starter())
    }

    pub fn bench(&self) -> impl Iterator<Item = &Pick> {
        self.picks.iter().filter(|p| !p.is_starter())
    }

    /// Gameweek points net of transfer hits, zero without a history line.
    #[must_use]
    pub fn net_points(&self) -> i64 {
        self.entry_history
            .as_ref()
            .map_or(0, |h| h.points.saturating_sub(h.event_transfers_cost))
    }
}
