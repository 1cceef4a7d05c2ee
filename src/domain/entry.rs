//! Team-level summaries, transfer history and fixtures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::{GameweekId, TeamId};

/// Payload of the `entry/{team_id}/` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntrySummary {
    pub id: TeamId,
    pub name: String,
    #[serde(rename = "player_first_name", default)]
    pub manager_first_name: String,
    #[serde(rename = "player_last_name", default)]
    pub manager_last_name: String,
    #[serde(rename = "summary_overall_points", default)]
    pub overall_points: Option<i64>,
    #[serde(rename = "summary_overall_rank", default)]
    pub overall_rank: Option<u64>,
    #[serde(rename = "summary_event_points", default)]
    pub event_points: Option<i64>,
    #[serde(default)]
    pub current_event: Option<GameweekId>,
    #[serde(default)]
    pub started_event: Option<GameweekId>,
    #[serde(rename = "joined_time", default)]
    pub joined_at: Option<DateTime<Utc>>,
}

/// One row of the `entry/{team_id}/transfers/` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transfer {
    pub element_in: u32,
    #[serde(default)]
    pub element_in_cost: u32,
    pub element_out: u32,
    #[serde(default)]
    pub element_out_cost: u32,
    pub entry: TeamId,
    pub event: GameweekId,
    #[serde(default)]
    pub time: Option<DateTime<Utc>>,
}

/// One row of the `fixtures/` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: u32,
    /// `None` for fixtures not yet scheduled into a gameweek.
    #[serde(default)]
    pub event: Option<GameweekId>,
    #[serde(default)]
    pub kickoff_time: Option<DateTime<Utc>>,
    pub team_h: u32,
    pub team_a: u32,
    #[serde(default)]
    pub team_h_score: Option<u32>,
    #[serde(default)]
    pub team_a_score: Option<u32>,
    #[serde(default)]
    pub started: Option<bool>,
    #[serde(default)]
    pub finished: bool,
}

impl EntrySummary {
    #[must_use]
    pub fn manager_name(&self) -> String {
        format!("{} {}", self.manager_first_name, self.manager_last_name)
            .trim()
            .to_string()
    }
}

/// Fixtures scheduled in `gameweek`, in kickoff order.
#[must_use]
pub fn fixtures_in(fixtures: &[Fixture], gameweek: GameweekId) -> Vec<&Fixture> {
    let mut selected: Vec<&Fixture> = fixtures
        .iter()
        .filter(|f| f.event == Some(gameweek))
        .collect();
    selected.sort_by_key(|f| f.kickoff_time);
    selected
}

/// Net cost of a gameweek's transfers in tenths of a million.
#[must_use]
pub fn transfer_spend(transfers: &[Transfer], gameweek: GameweekId) -> i64 {
    transfers
        .iter()
        .filter(|t| t.event == gameweek)
        .map(|t| i64::from(t.element_in_cost) - i64::from(t.element_out_cost))
        .sum()
}
