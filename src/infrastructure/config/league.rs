//! Well-known leagues and squad rules.

use serde::{Deserialize, Serialize};

use crate::domain::{LeagueId, MINIMUM_SQUAD_SIZE};

/// The main QFPL classic league.
pub const QFPL_MAIN: LeagueId = LeagueId::new(65_689);

/// The Nottingham Forest supporters' mini league.
pub const NFO_MINI: LeagueId = LeagueId::new(1_384_506);

/// League identifiers and team-matching rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueConfig {
    #[serde(default = "default_qfpl_main")]
    pub qfpl_main: LeagueId,
    #[serde(default = "default_nfo_mini")]
    pub nfo_mini: LeagueId,
    #[serde(default = "default_minimum_squad_size")]
    pub minimum_squad_size: usize,
    /// Case-insensitive name fragments that mark a team as one of ours
    /// inside a larger league.
    #[serde(default = "default_representative_markers")]
    pub representative_markers: Vec<String>,
}

const fn default_qfpl_main() -> LeagueId {
    QFPL_MAIN
}

const fn default_nfo_mini() -> LeagueId {
    NFO_MINI
}

const fn default_minimum_squad_size() -> usize {
    MINIMUM_SQUAD_SIZE
}

fn default_representative_markers() -> Vec<String> {
    vec!["NFO".to_string(), "FOREST".to_string()]
}

impl Default for LeagueConfig {
    fn default() -> Self {
        Self {
            qfpl_main: default_qfpl_main(),
            nfo_mini: default_nfo_mini(),
            minimum_squad_size: default_minimum_squad_size(),
            representative_markers: default_representative_markers(),
        }
    }
}
