use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use qfpl::error::{ConfigError, Error};
use qfpl::infrastructure::config::{Config, NFO_MINI, QFPL_MAIN};

fn write_temp_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).expect("write temp config");
    path
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = Config::load_or_default(dir.path().join("absent.toml")).expect("defaults");

    assert_eq!(config.leagues.qfpl_main, QFPL_MAIN);
    assert_eq!(config.leagues.nfo_mini, NFO_MINI);
    assert_eq!(config.cache.standings_ttl_secs, 300);
    assert_eq!(config.cache.picks_ttl_secs, 60);
    assert_eq!(config.api.timeout_ms, 10_000);
}

#[test]
fn missing_file_is_an_error_for_strict_load() {
    let dir = tempfile::tempdir().expect("tempdir");
    let result = Config::load(dir.path().join("absent.toml"));

    assert!(matches!(result, Err(Error::Config(ConfigError::ReadFile(_)))));
}

#[test]
fn partial_file_keeps_defaults_for_the_rest() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_temp_config(
        &dir,
        r#"
[leagues]
nfo_mini = 123456
minimum_squad_size = 8

[logging]
level = "debug"
format = "json"
"#,
    );

    let config = Config::load(&path).expect("valid config");
    assert_eq!(config.leagues.nfo_mini.get(), 123_456);
    assert_eq!(config.leagues.minimum_squad_size, 8);
    assert_eq!(config.leagues.qfpl_main, QFPL_MAIN);
    assert_eq!(config.logging.format, "json");
    assert_eq!(
        config.api.base_url,
        "https://fantasy.premierleague.com/api/"
    );
}

#[test]
fn config_rejects_empty_base_url() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_temp_config(&dir, "[api]\nbase_url = \"  \"\n");

    match Config::load(&path) {
        Err(Error::Config(ConfigError::MissingField { field: "base_url" })) => {}
        Err(err) => panic!("Expected missing base_url error, got {err}"),
        Ok(_) => panic!("Expected empty base_url to be rejected"),
    }
}

#[test]
fn config_rejects_unparseable_base_url() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_temp_config(&dir, "[api]\nbase_url = \"not a url\"\n");

    assert!(matches!(
        Config::load(&path),
        Err(Error::Config(ConfigError::InvalidValue {
            field: "base_url",
            ..
        }))
    ));
}

#[test]
fn config_rejects_zero_connect_timeout() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_temp_config(&dir, "[api]\nconnect_timeout_ms = 0\n");

    assert!(matches!(
        Config::load(&path),
        Err(Error::Config(ConfigError::InvalidValue {
            field: "connect_timeout_ms",
            ..
        }))
    ));
}

#[test]
fn config_rejects_zero_league_id() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_temp_config(&dir, "[leagues]\nqfpl_main = 0\n");

    assert!(matches!(
        Config::load(&path),
        Err(Error::Config(ConfigError::InvalidValue {
            field: "qfpl_main",
            ..
        }))
    ));
}

#[test]
fn config_rejects_zero_squad_size() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_temp_config(&dir, "[leagues]\nminimum_squad_size = 0\n");

    assert!(matches!(
        Config::load(&path),
        Err(Error::Config(ConfigError::InvalidValue {
            field: "minimum_squad_size",
            ..
        }))
    ));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_temp_config(&dir, "[api\nbase_url = ");

    assert!(matches!(
        Config::load(&path),
        Err(Error::Config(ConfigError::Parse(_)))
    ));
}

#[test]
fn example_config_is_valid() {
    let config = Config::parse_toml(include_str!("../config.toml.example")).expect("valid example");
    assert_eq!(config.leagues.qfpl_main, QFPL_MAIN);
    assert_eq!(config.leagues.representative_markers, vec!["NFO", "FOREST"]);
}
