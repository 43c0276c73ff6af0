//! Configuration management commands.

use std::path::Path;

use crate::cli::{output, ConfigCommand};
use crate::config::Config;
use crate::error::{Error, Result};

pub fn run(path: &Path, config: &Config, command: &ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Init => init(path),
        ConfigCommand::Show => show(config),
        ConfigCommand::Validate => validate(path),
    }
}

fn init(path: &Path) -> Result<()> {
    if path.exists() {
        return Err(Error::Io(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("{} already exists", path.display()),
        )));
    }

    std::fs::write(path, Config::template())?;
    output::success(&format!("Wrote {}", path.display()));
    output::hint("set ODDS_API_KEY in the environment; the key never lives in the file");
    Ok(())
}

fn show(config: &Config) -> Result<()> {
    if output::is_json() {
        output::json_output(serde_json::to_value(config)?);
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));

    output::section("Provider");
    output::field("api_url", &config.provider.api_url);
    output::field("regions", &config.provider.regions);
    output::field(
        "api_key",
        if config.provider.api_key.is_some() {
            output::positive("set (from ODDS_API_KEY)")
        } else {
            output::negative("not set")
        },
    );

    output::section("Scan");
    output::field(
        "preferred_bookmaker",
        config
            .scan
            .preferred_bookmaker
            .as_deref()
            .unwrap_or("none"),
    );

    output::section("Logging");
    output::field("level", &config.logging.level);
    output::field("format", &config.logging.format);

    Ok(())
}

fn validate(path: &Path) -> Result<()> {
    Config::load(path)?;
    if output::is_json() {
        output::json_output(serde_json::json!({ "valid": true }));
    } else {
        output::success("configuration is valid");
    }
    Ok(())
}
