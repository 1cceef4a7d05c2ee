//! Infrastructure configuration modules.

pub mod league;
pub mod logging;
pub mod settings;

pub use league::{LeagueConfig, NFO_MINI, QFPL_MAIN};
pub use logging::LoggingConfig;
pub use settings::Config;
