//! Handler for the `config` command group.

use std::path::Path;

use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::config::Config;

/// Execute `config show`.
///
/// A missing file is not an error here: the defaults are what would run.
pub fn execute_show(path: &Path) -> Result<()> {
    let config = Config::load_or_default(path)?;

    if output::is_json() {
        output::json_value("config", serde_json::to_value(&config)?);
        return Ok(());
    }

    output::section("Effective Configuration");
    output::field(
        "Source",
        if path.exists() {
            path.display().to_string()
        } else {
            format!("{} (not found, defaults)", path.display())
        },
    );

    output::section("API");
    output::field("Base URL", &config.api.base_url);
    output::field("Timeout", format!("{}ms", config.api.timeout_ms));
    output::field("Connect", format!("{}ms", config.api.connect_timeout_ms));

    output::section("Cache");
    output::field("Bootstrap", format!("{}s", config.cache.bootstrap_ttl_secs));
    output::field("Standings", format!("{}s", config.cache.standings_ttl_secs));
    output::field("Picks", format!("{}s", config.cache.picks_ttl_secs));

    output::section("Leagues");
    output::field("QFPL main", config.leagues.qfpl_main);
    output::field("NFO mini", config.leagues.nfo_mini);
    output::field("Min squad", config.leagues.minimum_squad_size);
    output::field("Markers", config.leagues.representative_markers.join(", "));

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);

    output::section("TOML");
    output::lines(&config.to_toml()?);

    Ok(())
}

/// Execute `config validate`. The file must exist.
pub fn execute_validate(path: &Path) -> Result<()> {
    output::section("Config Validation");
    output::field("Path", path.display());
    Config::load(path)?;
    output::success("Config file is valid");
    output::hint(&format!(
        "run {} to see the effective values",
        output::highlight(format!("qfpl config show --config {}", path.display()))
    ));
    Ok(())
}
