//! Handler for the `gameweek` command.

use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::output;
use crate::adapter::outbound::fpl::LeagueDataClient;
use crate::application::dashboard::{self, FixtureRow};
use crate::domain::{Gameweek, GameweekId};
use crate::error::{Error, Result};
use crate::port::outbound::Transport;

const DEADLINE_FORMAT: &str = "%a %d %b %H:%M UTC";

#[derive(Tabled)]
struct FixtureLine {
    #[tabled(rename = "Kickoff")]
    kickoff: String,
    #[tabled(rename = "Home")]
    home: String,
    #[tabled(rename = "Score")]
    score: String,
    #[tabled(rename = "Away")]
    away: String,
}

impl From<&FixtureRow> for FixtureLine {
    fn from(row: &FixtureRow) -> Self {
        Self {
            kickoff: row
                .kickoff
                .map_or_else(|| "TBC".to_string(), |k| k.format("%a %H:%M").to_string()),
            home: row.home.clone(),
            score: row.score.clone().unwrap_or_else(|| "v".to_string()),
            away: row.away.clone(),
        }
    }
}

/// Execute the gameweek command.
pub async fn execute<T: Transport>(client: &LeagueDataClient<T>) -> Result<()> {
    let spinner = output::spinner("Fetching gameweeks...");
    let Some(overview) = dashboard::gameweek_overview(client).await else {
        output::spinner_fail(&spinner, "Gameweek data unavailable");
        output::warning(&format!(
            "gameweek unknown, assuming {}",
            GameweekId::FIRST
        ));
        return Err(Error::Unavailable("gameweek data".into()));
    };
    output::spinner_success(&spinner, "Gameweeks loaded");

    if output::is_json() {
        output::json_value("gameweek", serde_json::to_value(&overview)?);
        return Ok(());
    }

    output::section("Gameweek");
    output::field("Current", output::highlight(overview.current));
    match &overview.detail {
        Some(gw) => describe(gw),
        None => output::note("No gameweek is live yet; the season has not started."),
    }
    if overview.total_players > 0 {
        output::field("Managers", overview.total_players);
    }

    if let Some(next) = &overview.next {
        output::section("Next");
        output::field("Gameweek", next.id);
        if let Some(deadline) = next.deadline_time {
            output::field("Deadline", deadline.format(DEADLINE_FORMAT));
        }
    }

    if !overview.fixtures.is_empty() {
        output::section("Fixtures");
        let rows: Vec<FixtureLine> = overview.fixtures.iter().map(FixtureLine::from).collect();
        output::lines(&Table::new(rows).to_string());
    }

    Ok(())
}

fn describe(gw: &Gameweek) {
    if !gw.name.is_empty() {
        output::field("Name", &gw.name);
    }
    if let Some(deadline) = gw.deadline_time {
        output::field("Deadline", deadline.format(DEADLINE_FORMAT));
    }
    output::field("Finished", if gw.finished { "yes" } else { "no" });
    output::field("Average", gw.average_entry_score);
    if let Some(high) = gw.highest_score {
        output::field("Highest", output::positive(high));
    }
}
