//! Classic league standings and pre-season joiners.

use chrono::{DateTime, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use super::id::{LeagueId, TeamId};

/// Payload of the `leagues-classic/{league_id}/standings/` endpoint.
///
/// Both row lists are required: a body without them is not a league, and
/// must not decode as an empty one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeagueStandings {
    #[serde(default)]
    pub league: LeagueInfo,
    pub standings: Page<StandingsEntry>,
    pub new_entries: Page<NewEntry>,
}

/// League header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeagueInfo {
    #[serde(default)]
    pub id: Option<LeagueId>,
    #[serde(default)]
    pub name: String,
}

/// One page of an upstream result list.
///
/// Rows that fail to decode are dropped with a warning instead of failing
/// the whole document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct Page<T> {
    #[serde(default)]
    pub has_next: bool,
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default, deserialize_with = "skip_malformed")]
    pub results: Vec<T>,
}

const fn first_page() -> u32 {
    1
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            has_next: false,
            page: first_page(),
            results: Vec::new(),
        }
    }
}

/// A ranked team inside a league once scoring has begun.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingsEntry {
    #[serde(rename = "entry")]
    pub entry_id: TeamId,
    pub entry_name: String,
    #[serde(rename = "player_name", default)]
    pub manager_name: String,
    #[serde(rename = "total")]
    pub total_points: i64,
    #[serde(rename = "event_total")]
    pub event_points: i64,
    #[serde(default)]
    pub rank: Option<u32>,
    #[serde(default)]
    pub last_rank: Option<u32>,
}

/// A team that joined the league before standings exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEntry {
    #[serde(rename = "entry")]
    pub entry_id: TeamId,
    pub entry_name: String,
    #[serde(rename = "player_first_name", default)]
    pub manager_first_name: String,
    #[serde(rename = "player_last_name", default)]
    pub manager_last_name: String,
    #[serde(rename = "joined_time", default)]
    pub joined_at: Option<DateTime<Utc>>,
}

impl LeagueStandings {
    #[must_use]
    pub fn standings(&self) -> &[StandingsEntry] {
        &self.standings.results
    }

    #[must_use]
    pub fn new_entries(&self) -> &[NewEntry] {
        &self.new_entries.results
    }

    /// Order standings by rank ascending when every entry carries a rank.
    ///
    /// The sort is stable so entries sharing a rank keep upstream order.
    /// If any rank is missing the upstream order is left untouched.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        let results = &mut self.standings.results;
        if results.iter().all(|entry| entry.rank.is_some()) {
            results.sort_by_key(|entry| entry.rank);
        }
        self
    }
}

impl NewEntry {
    /// "First Last", trimmed when either half is missing.
    #[must_use]
    pub fn manager_name(&self) -> String {
        format!("{} {}", self.manager_first_name, self.manager_last_name)
            .trim()
            .to_string()
    }

    #[must_use]
    pub fn joined_on(&self) -> Option<NaiveDate> {
        self.joined_at.map(|at| at.date_naive())
    }
}

fn skip_malformed<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let rows = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(rows
        .into_iter()
        .enumerate()
        .filter_map(|(index, row)| match serde_json::from_value(row) {
            Ok(parsed) => Some(parsed),
            Err(err) => {
                warn!(index, error = %err, "Skipping malformed league row");
                None
            }
        })
        .collect())
}
