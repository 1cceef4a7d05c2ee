//! Handler for the `picks` command.

use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::command::PicksArgs;
use crate::adapter::inbound::cli::output;
use crate::adapter::outbound::fpl::LeagueDataClient;
use crate::application::dashboard::{self, PickRow};
use crate::domain::picks::STARTING_SLOTS;
use crate::domain::{GameweekId, TeamId};
use crate::error::{Error, Result};
use crate::port::outbound::Transport;

#[derive(Tabled)]
struct PickLine {
    #[tabled(rename = "Player")]
    player: String,
    #[tabled(rename = "Pos")]
    position: &'static str,
    #[tabled(rename = "Club")]
    club: String,
    #[tabled(rename = "x")]
    multiplier: u8,
    #[tabled(rename = "")]
    armband: &'static str,
}

impl From<&PickRow> for PickLine {
    fn from(row: &PickRow) -> Self {
        let armband = if row.captain {
            "C"
        } else if row.vice_captain {
            "V"
        } else {
            ""
        };
        Self {
            player: row.player.clone(),
            position: row.position,
            club: row.club.clone(),
            multiplier: row.multiplier,
            armband,
        }
    }
}

/// Execute `picks`.
pub async fn execute<T: Transport>(client: &LeagueDataClient<T>, args: &PicksArgs) -> Result<()> {
    let team = TeamId::new(args.team);
    let gameweek = args.gameweek.map(GameweekId::new);

    let spinner = output::spinner(&format!("Fetching picks for team {team}..."));
    let Some(view) = dashboard::picks_view(client, team, gameweek).await else {
        output::spinner_fail(&spinner, "Picks unavailable");
        output::warning(&format!("No picks available for team {team}"));
        return Err(Error::Unavailable(format!("picks for team {team}")));
    };
    output::spinner_success(&spinner, "Picks loaded");

    if output::is_json() {
        output::json_value("picks", serde_json::to_value(&view)?);
        return Ok(());
    }

    output::section(view.team_name.as_deref().unwrap_or("Team"));
    if let Some(manager) = &view.manager {
        output::field("Manager", manager);
    }
    output::field("Gameweek", view.gameweek);
    output::field("Points", output::positive(view.points));
    if view.net_points != view.points {
        output::field("After hits", view.net_points);
    }
    if let Some(chip) = &view.active_chip {
        output::field("Chip", output::highlight(chip));
    }
    if let Some(spend) = view.transfer_spend {
        output::field("Transfers", format!("{:+.1}m", spend as f64 / 10.0));
    }

    if view.rows.is_empty() {
        output::note("No picks recorded for this gameweek.");
        return Ok(());
    }

    let (starting, bench): (Vec<&PickRow>, Vec<&PickRow>) = view
        .rows
        .iter()
        .partition(|row| row.slot <= STARTING_SLOTS);

    output::section("Starting XI");
    let rows: Vec<PickLine> = starting.into_iter().map(PickLine::from).collect();
    output::lines(&Table::new(rows).to_string());

    if !bench.is_empty() {
        output::section("Bench");
        let rows: Vec<PickLine> = bench.into_iter().map(PickLine::from).collect();
        output::lines(&Table::new(rows).to_string());
    }

    Ok(())
}
