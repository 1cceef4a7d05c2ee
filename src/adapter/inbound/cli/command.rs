//! Command-line interface definitions.
//!
//! Defines the CLI structure for the qfpl dashboard using `clap`. Every
//! command reads through the cached league data client and prints the
//! derived view; none of them write anything upstream.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

use crate::domain::LeagueId;
use crate::infrastructure::config::LeagueConfig;

/// Fantasy Premier League league dashboard
#[derive(Parser, Debug)]
#[command(name = "qfpl")]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults apply when it does not exist)
    #[arg(long, global = true, default_value = "config.toml")]
    pub config: PathBuf,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the current gameweek
    Gameweek,

    /// Show a league's standings and summary
    League(LeagueArgs),

    /// Find our teams inside the main league
    Representatives(RepresentativesArgs),

    /// Show a team's picks for a gameweek
    Picks(PicksArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `qfpl config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display the effective configuration with defaults applied.
    Show,
    /// Validate the configuration file for correctness.
    Validate,
}

/// Which league to show: a well-known alias or a numeric id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeagueSelector {
    NfoMini,
    QfplMain,
    Id(LeagueId),
}

impl LeagueSelector {
    #[must_use]
    pub const fn resolve(self, leagues: &LeagueConfig) -> LeagueId {
        match self {
            Self::NfoMini => leagues.nfo_mini,
            Self::QfplMain => leagues.qfpl_main,
            Self::Id(id) => id,
        }
    }
}

impl FromStr for LeagueSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nfo" | "nfo-mini" => Ok(Self::NfoMini),
            "qfpl" | "qfpl-main" | "main" => Ok(Self::QfplMain),
            other => match other.parse::<LeagueId>() {
                Ok(id) if id.is_valid() => Ok(Self::Id(id)),
                _ => Err(format!(
                    "expected `nfo`, `qfpl` or a positive league id, got `{s}`"
                )),
            },
        }
    }
}

/// Arguments for `qfpl league`.
#[derive(Args, Debug)]
pub struct LeagueArgs {
    /// League to show [nfo, qfpl, or a numeric id]
    #[arg(default_value = "nfo")]
    pub league: LeagueSelector,

    /// Number of teams on the podium
    #[arg(long, default_value_t = 3)]
    pub top: usize,

    /// Histogram bucket width in points
    #[arg(long, default_value_t = 10)]
    pub bucket: i64,
}

/// Arguments for `qfpl representatives`.
#[derive(Args, Debug)]
pub struct RepresentativesArgs {
    /// League to search [nfo, qfpl, or a numeric id]
    #[arg(long, default_value = "qfpl")]
    pub league: LeagueSelector,

    /// Name fragments to match, overriding the configured markers
    #[arg(long = "marker")]
    pub markers: Vec<String>,
}

/// Arguments for `qfpl picks`.
#[derive(Args, Debug)]
pub struct PicksArgs {
    /// Team entry id
    #[arg(long)]
    pub team: u64,

    /// Gameweek (defaults to the current one)
    #[arg(long)]
    pub gameweek: Option<u32>,
}
