//! Whole-game metadata: gameweeks, clubs and players.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::GameweekId;

/// Payload of the `bootstrap-static/` endpoint.
///
/// Only the fields the dashboard uses are modelled; everything else in the
/// upstream document is ignored during decoding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BootstrapSnapshot {
    /// Required: without it the document is not a bootstrap snapshot.
    pub events: Vec<Gameweek>,
    #[serde(default)]
    pub teams: Vec<Club>,
    #[serde(default)]
    pub elements: Vec<Player>,
    #[serde(default)]
    pub total_players: u64,
}

/// A single round of the season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gameweek {
    pub id: GameweekId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub deadline_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default)]
    pub is_next: bool,
    #[serde(default)]
    pub finished: bool,
    #[serde(default)]
    pub average_entry_score: i64,
    #[serde(default)]
    pub highest_score: Option<i64>,
}

/// A Premier League club.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Club {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub short_name: String,
}

/// A selectable player ("element" upstream).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub web_name: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub second_name: String,
    /// Club id, see [`Club::id`].
    pub team: u32,
    /// 1 = GK, 2 = DEF, 3 = MID, 4 = FWD.
    #[serde(default)]
    pub element_type: u8,
    /// Price in tenths of a million.
    #[serde(default)]
    pub now_cost: u32,
    #[serde(default)]
    pub total_points: i64,
}

impl BootstrapSnapshot {
    /// The gameweek flagged as current, if any.
    ///
    /// Upstream guarantees at most one; if several are flagged the first in
    /// sequence order wins.
    #[must_use]
    pub fn current(&self) -> Option<&Gameweek> {
        self.events.iter().find(|gw| gw.is_current)
    }

    /// Current gameweek id, falling back to gameweek 1.
    #[must_use]
    pub fn current_gameweek(&self) -> GameweekId {
        self.current().map_or(GameweekId::FIRST, |gw| gw.id)
    }

    /// The gameweek flagged as next, if any.
    #[must_use]
    pub fn next(&self) -> Option<&Gameweek> {
        self.events.iter().find(|gw| gw.is_next)
    }

    #[must_use]
    pub fn player(&self, id: u32) -> Option<&Player> {
        self.elements.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn club(&self, id: u32) -> Option<&Club> {
        self.teams.iter().find(|c| c.id == id)
    }
}

impl Player {
    /// Short position label for the player's element type.
    #[must_use]
    pub const fn position(&self) -> &'static str {
        match self.element_type {
            1 => "GK",
            2 => "DEF",
            3 => "MID",
            4 => "FWD",
            _ => "?",
        }
    }
}
