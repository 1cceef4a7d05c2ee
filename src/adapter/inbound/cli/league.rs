//! Handlers for the `league` and `representatives` commands.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::command::{LeagueArgs, RepresentativesArgs};
use crate::adapter::inbound::cli::output;
use crate::adapter::outbound::fpl::LeagueDataClient;
use crate::application::dashboard::{self, LeagueLabel, LeagueView, ViewRules};
use crate::domain::{Bucket, FormingSummary, NewEntry, StandingsEntry, Summary};
use crate::error::{Error, Result};
use crate::infrastructure::config::Config;
use crate::port::outbound::Transport;

const PROGRESS_WIDTH: usize = 22;
const HISTOGRAM_WIDTH: usize = 30;

#[derive(Tabled)]
struct StandingRow {
    #[tabled(rename = "#")]
    rank: String,
    #[tabled(rename = "Team")]
    team: String,
    #[tabled(rename = "Manager")]
    manager: String,
    #[tabled(rename = "GW")]
    gameweek: i64,
    #[tabled(rename = "Total")]
    total: i64,
}

impl From<&StandingsEntry> for StandingRow {
    fn from(entry: &StandingsEntry) -> Self {
        Self {
            rank: entry
                .rank
                .map_or_else(|| "-".to_string(), |r| r.to_string()),
            team: entry.entry_name.clone(),
            manager: entry.manager_name.clone(),
            gameweek: entry.event_points,
            total: entry.total_points,
        }
    }
}

#[derive(Tabled)]
struct JoinerRow {
    #[tabled(rename = "Team")]
    team: String,
    #[tabled(rename = "Manager")]
    manager: String,
    #[tabled(rename = "Joined")]
    joined: String,
}

impl From<&NewEntry> for JoinerRow {
    fn from(entry: &NewEntry) -> Self {
        Self {
            team: entry.entry_name.clone(),
            manager: entry.manager_name(),
            joined: entry
                .joined_on()
                .map_or_else(|| "-".to_string(), |d| d.to_string()),
        }
    }
}

/// Execute `league`.
pub async fn execute<T: Transport>(
    client: &LeagueDataClient<T>,
    config: &Config,
    args: &LeagueArgs,
) -> Result<()> {
    let league_id = args.league.resolve(&config.leagues);
    let rules = ViewRules {
        minimum_squad_size: config.leagues.minimum_squad_size,
        podium_size: args.top,
        bucket_width: args.bucket,
    };

    let spinner = output::spinner(&format!("Fetching league {league_id}..."));
    let view = dashboard::league_view(client, league_id, &rules).await;
    if view.is_unavailable() {
        output::spinner_fail(&spinner, "League data unavailable");
    } else {
        output::spinner_success(&spinner, "League loaded");
    }

    if output::is_json() {
        output::json_value("league", serde_json::to_value(&view)?);
        return match view {
            LeagueView::Unavailable { .. } => Err(unavailable(league_id)),
            _ => Ok(()),
        };
    }

    match &view {
        LeagueView::Unavailable { league } => {
            output::warning(&format!(
                "League {} data unavailable. Try again in a moment.",
                league.id
            ));
            return Err(unavailable(league.id));
        }
        LeagueView::Empty { league } => {
            describe_league(league);
            output::note("No data yet. Nobody has joined this league.");
        }
        LeagueView::Forming {
            league,
            summary,
            entries,
        } => {
            describe_league(league);
            render_forming(summary, entries);
        }
        LeagueView::Active {
            league,
            summary,
            standings,
            podium,
            total_distribution,
            gameweek_distribution,
        } => {
            describe_league(league);
            render_summary(summary);
            if !podium.is_empty() {
                output::section("Podium");
                for (place, entry) in podium.iter().enumerate() {
                    output::field(
                        &format!("{}.", place + 1),
                        format!(
                            "{} {}",
                            output::highlight(&entry.entry_name),
                            output::muted(format!("{} pts", entry.total_points))
                        ),
                    );
                }
            }
            output::section("Standings");
            let rows: Vec<StandingRow> = standings.iter().map(StandingRow::from).collect();
            output::lines(&Table::new(rows).to_string());
            render_histogram("Season totals", total_distribution);
            render_histogram(&format!("{} points", league.gameweek), gameweek_distribution);
        }
    }

    Ok(())
}

/// Execute `representatives`.
pub async fn execute_representatives<T: Transport>(
    client: &LeagueDataClient<T>,
    config: &Config,
    args: &RepresentativesArgs,
) -> Result<()> {
    let league_id = args.league.resolve(&config.leagues);
    let markers = if args.markers.is_empty() {
        &config.leagues.representative_markers
    } else {
        &args.markers
    };

    let spinner = output::spinner(&format!("Searching league {league_id}..."));
    let Some(found) = dashboard::representatives(client, league_id, markers).await else {
        output::spinner_fail(&spinner, "League data unavailable");
        output::warning(&format!("League {league_id} data unavailable"));
        return Err(unavailable(league_id));
    };
    output::spinner_success(&spinner, "League searched");

    if output::is_json() {
        output::json_value(
            "representatives",
            json!({
                "league": league_id,
                "markers": markers,
                "teams": found,
            }),
        );
        return Ok(());
    }

    output::section("Representatives");
    output::field("League", league_id);
    output::field("Markers", markers.join(", "));
    if found.is_empty() {
        output::note("No matching teams in this league.");
        return Ok(());
    }
    let rows: Vec<StandingRow> = found.iter().map(StandingRow::from).collect();
    output::lines(&Table::new(rows).to_string());
    Ok(())
}

fn unavailable(league_id: impl std::fmt::Display) -> Error {
    Error::Unavailable(format!("league {league_id}"))
}

fn describe_league(league: &LeagueLabel) {
    output::section(if league.name.is_empty() {
        "League"
    } else {
        league.name.as_str()
    });
    output::field("League ID", league.id);
    output::field("Gameweek", league.gameweek);
}

fn render_summary(summary: &Summary) {
    output::field("Teams", summary.player_count);
    output::field("Avg total", format!("{:.1}", summary.average_total));
    output::field("Avg GW", format!("{:.1}", summary.average_gw));
    output::field("Top GW", output::positive(summary.top_gw));
    if let Some(leader) = &summary.leader {
        output::field("Leader", output::highlight(&leader.entry_name));
    }
    if let Some(leader) = &summary.gw_leader {
        output::field("GW leader", &leader.entry_name);
    }
    if !summary.squad_ready {
        output::note("Squad not complete yet.");
    }
}

fn render_forming(summary: &FormingSummary, entries: &[NewEntry]) {
    output::field("Joined", summary.player_count);
    output::field(
        "Squad",
        output::progress_bar(summary.progress, PROGRESS_WIDTH),
    );
    if summary.ready {
        output::success("Squad ready; waiting for the first gameweek.");
    } else {
        output::note(&format!(
            "{} more team(s) needed for a full squad of {}.",
            summary.players_needed, summary.minimum_squad_size
        ));
    }
    if let Some(latest) = summary.latest_join {
        output::field("Latest join", latest);
    }

    output::section("New entries");
    let rows: Vec<JoinerRow> = entries.iter().map(JoinerRow::from).collect();
    output::lines(&Table::new(rows).to_string());
}

fn render_histogram(title: &str, buckets: &[Bucket]) {
    let Some(peak) = buckets.iter().map(|b| b.count).max().filter(|&c| c > 0) else {
        return;
    };
    output::section(title);
    let lines: Vec<String> = buckets
        .iter()
        .map(|b| {
            let len = b.count * HISTOGRAM_WIDTH / peak;
            format!("{:>5}-{:<5} {} {}", b.lower, b.upper, "▇".repeat(len), b.count)
        })
        .collect();
    output::lines(&lines.join("\n"));
}
