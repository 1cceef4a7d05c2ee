//! Derived league aggregates.
//!
//! Everything here is a pure function of the standings or new-entry rows it
//! is given. Nothing is cached: views are recomputed from (possibly cached)
//! source data on every call. Empty inputs never fail; numeric aggregates
//! default to zero, readiness to `false`, and leaders to `None`.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;

use super::league::{NewEntry, StandingsEntry};

/// Squad size a league needs before it counts as ready.
pub const MINIMUM_SQUAD_SIZE: usize = 11;

/// Lifecycle phase of a league, derived from which row lists are populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Neither standings nor new entries exist.
    Empty,
    /// Teams have joined but scoring has not started.
    Forming,
    /// Standings exist.
    Active,
}

impl Phase {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Forming => "forming",
            Self::Active => "active",
        }
    }
}

/// Aggregates for a league in the [`Phase::Active`] phase.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    pub player_count: usize,
    pub average_total: f64,
    pub average_gw: f64,
    pub top_gw: i64,
    pub total_points: i64,
    pub squad_ready: bool,
    pub leader: Option<StandingsEntry>,
    pub gw_leader: Option<StandingsEntry>,
}

/// Aggregates for a league in the [`Phase::Forming`] phase.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormingSummary {
    pub player_count: usize,
    pub minimum_squad_size: usize,
    pub ready: bool,
    pub players_needed: usize,
    /// Share of the minimum squad that has joined, capped at 1.0.
    pub progress: f64,
    /// Distinct calendar days on which teams joined.
    pub join_days: usize,
    pub latest_join: Option<NaiveDate>,
}

/// One fixed-width histogram bucket covering `lower..=upper`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bucket {
    pub lower: i64,
    pub upper: i64,
    pub count: usize,
}

/// Classify a league by the rows it currently has.
///
/// Non-empty standings always mean [`Phase::Active`], whatever the new
/// entry list contains.
#[must_use]
pub fn classify_phase(standings: &[StandingsEntry], new_entries: &[NewEntry]) -> Phase {
    if !standings.is_empty() {
        Phase::Active
    } else if !new_entries.is_empty() {
        Phase::Forming
    } else {
        Phase::Empty
    }
}

/// Summarize an active league.
#[must_use]
pub fn summarize(standings: &[StandingsEntry]) -> Summary {
    summarize_with(standings, MINIMUM_SQUAD_SIZE)
}

/// Summarize an active league against a custom squad size.
#[must_use]
pub fn summarize_with(standings: &[StandingsEntry], minimum_squad_size: usize) -> Summary {
    if standings.is_empty() {
        return Summary::default();
    }

    let player_count = standings.len();
    let total_points = saturating_sum(standings.iter().map(|e| e.total_points));
    let gw_points = saturating_sum(standings.iter().map(|e| e.event_points));
    let top_gw = standings
        .iter()
        .map(|e| e.event_points)
        .max()
        .unwrap_or_default();

    Summary {
        player_count,
        average_total: mean(total_points, player_count),
        average_gw: mean(gw_points, player_count),
        top_gw,
        total_points,
        squad_ready: player_count >= minimum_squad_size,
        leader: leader(standings).cloned(),
        gw_leader: first_max_by_key(standings, |e| e.event_points).cloned(),
    }
}

/// Summarize a league that is still collecting teams.
#[must_use]
pub fn summarize_forming(new_entries: &[NewEntry], minimum_squad_size: usize) -> FormingSummary {
    let player_count = new_entries.len();
    let join_dates: BTreeSet<NaiveDate> =
        new_entries.iter().filter_map(NewEntry::joined_on).collect();

    let progress = if minimum_squad_size == 0 {
        1.0
    } else {
        (player_count as f64 / minimum_squad_size as f64).min(1.0)
    };

    FormingSummary {
        player_count,
        minimum_squad_size,
        ready: player_count >= minimum_squad_size,
        players_needed: minimum_squad_size.saturating_sub(player_count),
        progress,
        join_days: join_dates.len(),
        latest_join: join_dates.last().copied(),
    }
}

/// League leader: the entry ranked 1, else the highest total.
///
/// Ties on total go to the entry that appears first.
#[must_use]
pub fn leader(standings: &[StandingsEntry]) -> Option<&StandingsEntry> {
    standings
        .iter()
        .find(|e| e.rank == Some(1))
        .or_else(|| first_max_by_key(standings, |e| e.total_points))
}

/// Entries whose name contains any of `substrings`, ignoring case.
///
/// Input order is preserved. No match yields an empty vec.
#[must_use]
pub fn filter_by_name_substring<'a, S>(
    standings: &'a [StandingsEntry],
    substrings: &[S],
) -> Vec<&'a StandingsEntry>
where
    S: AsRef<str>,
{
    let needles: Vec<String> = substrings
        .iter()
        .map(|s| s.as_ref().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();

    standings
        .iter()
        .filter(|entry| {
            let name = entry.entry_name.to_lowercase();
            needles.iter().any(|needle| name.contains(needle.as_str()))
        })
        .collect()
}

/// The `n` highest season totals, ties kept in input order.
#[must_use]
pub fn top_performers(standings: &[StandingsEntry], n: usize) -> Vec<&StandingsEntry> {
    let mut sorted: Vec<&StandingsEntry> = standings.iter().collect();
    sorted.sort_by(|a, b| b.total_points.cmp(&a.total_points));
    sorted.truncate(n);
    sorted
}

/// Upper bound on the number of buckets [`distribution`] returns.
pub const MAX_BUCKETS: usize = 200;

/// Fixed-width histogram over `values`.
///
/// Buckets start at the floor of the smallest value and run contiguously to
/// the largest, so every value lands in exactly one bucket and empty buckets
/// in between are kept. A width of 0 is treated as 1. When the range would
/// need more than [`MAX_BUCKETS`] buckets the width is widened to fit.
#[must_use]
pub fn distribution(values: &[i64], bucket_width: i64) -> Vec<Bucket> {
    let (Some(&min), Some(&max)) = (values.iter().min(), values.iter().max()) else {
        return Vec::new();
    };

    // i128 holds any i64 span without overflow.
    let (min, max) = (i128::from(min), i128::from(max));
    let cap = MAX_BUCKETS as i128;
    let mut width = i128::from(bucket_width.max(1));
    if (max - min) / width + 2 > cap {
        width = (max - min) / (cap - 1) + 1;
    }

    let start = min.div_euclid(width) * width;
    let buckets = ((max - start) / width + 1) as usize;
    let mut counts = vec![0usize; buckets];
    for value in values {
        let index = ((i128::from(*value) - start) / width) as usize;
        if let Some(slot) = counts.get_mut(index) {
            *slot += 1;
        }
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| {
            let lower = start + width * i as i128;
            Bucket {
                lower: clamp_i64(lower),
                upper: clamp_i64(lower + width - 1),
                count,
            }
        })
        .collect()
}

fn clamp_i64(value: i128) -> i64 {
    i64::try_from(value).unwrap_or(if value < 0 { i64::MIN } else { i64::MAX })
}

fn saturating_sum(values: impl Iterator<Item = i64>) -> i64 {
    values.fold(0, i64::saturating_add)
}

fn mean(sum: i64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}

// Iterator::max_by_key keeps the last maximum; leaders break ties by position.
fn first_max_by_key<T, F>(items: &[T], key: F) -> Option<&T>
where
    F: Fn(&T) -> i64,
{
    items.iter().fold(None, |best: Option<&T>, item| match best {
        Some(current) if key(current) >= key(item) => Some(current),
        _ => Some(item),
    })
}
