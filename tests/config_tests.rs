//! Configuration loading tests.

use std::io::Write;

use tempfile::NamedTempFile;

use freeroll::config::Config;
use freeroll::error::{ConfigError, Error};

fn write_temp_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}

#[test]
fn full_config_parses() {
    let file = write_temp_config(
        r#"
[provider]
api_url = "https://api.the-odds-api.com/v4"
regions = "eu,uk"

[scan]
preferred_bookmaker = "parionsport_fr"

[logging]
level = "debug"
format = "json"
"#,
    );

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.provider.regions, "eu,uk");
    assert_eq!(
        config.scan.preferred_bookmaker.as_deref(),
        Some("parionsport_fr")
    );
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, "json");
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let file = write_temp_config("");

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.provider.api_url, "https://api.the-odds-api.com/v4");
    assert_eq!(config.provider.regions, "eu");
    assert!(config.scan.preferred_bookmaker.is_none());
    assert_eq!(config.logging.level, "info");
}

#[test]
fn empty_api_url_is_rejected() {
    let file = write_temp_config(
        r#"
[provider]
api_url = ""
"#,
    );

    match Config::load(file.path()) {
        Err(Error::Config(ConfigError::MissingField { field: "api_url" })) => {}
        other => panic!("expected missing api_url error, got {other:?}"),
    }
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let file = write_temp_config("provider = not valid toml");

    assert!(matches!(
        Config::load(file.path()),
        Err(Error::Config(ConfigError::Parse(_)))
    ));
}

#[test]
fn missing_file_is_a_read_error() {
    assert!(matches!(
        Config::load("/nonexistent/freeroll-config.toml"),
        Err(Error::Config(ConfigError::ReadFile(_)))
    ));
}

#[test]
fn load_or_default_tolerates_a_missing_file() {
    let config = Config::load_or_default("/nonexistent/freeroll-config.toml").unwrap();
    assert_eq!(config.provider.regions, "eu");
}

#[test]
fn api_key_comes_from_the_environment_only() {
    let file = write_temp_config(
        r#"
[provider]
api_url = "https://api.the-odds-api.com/v4"
"#,
    );

    std::env::set_var("ODDS_API_KEY", "test-key-from-env");
    let config = Config::load(file.path()).unwrap();
    std::env::remove_var("ODDS_API_KEY");

    assert_eq!(config.provider.api_key.as_deref(), Some("test-key-from-env"));
}
