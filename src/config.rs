//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file. The odds provider API key is
//! supplied through the `ODDS_API_KEY` environment variable and never lives
//! in the file.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Odds provider endpoint settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Bookmaker regions requested from the provider.
    #[serde(default = "default_regions")]
    pub regions: String,

    /// API key loaded from `ODDS_API_KEY` env var at runtime (never from the config file).
    #[serde(skip)]
    pub api_key: Option<String>,
}

fn default_api_url() -> String {
    "https://api.the-odds-api.com/v4".into()
}

fn default_regions() -> String {
    "eu".into()
}

/// Scan behavior settings.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ScanConfig {
    /// Bookmaker key used as the default filter when the caller gives none.
    #[serde(default)]
    pub preferred_bookmaker: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".into()
}

fn default_log_format() -> String {
    "pretty".into()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            regions: default_regions(),
            api_key: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: ProviderConfig::default(),
            scan: ScanConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;

        let mut config: Self = toml::from_str(&content).map_err(ConfigError::Parse)?;

        // The key is environment-only for security.
        config.provider.api_key = std::env::var("ODDS_API_KEY").ok();

        config.validate()?;

        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    ///
    /// The env-supplied API key is honored either way, so subcommands that
    /// never touch the network work without a config file.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            let mut config = Self::default();
            config.provider.api_key = std::env::var("ODDS_API_KEY").ok();
            Ok(config)
        }
    }

    fn validate(&self) -> Result<()> {
        if self.provider.api_url.is_empty() {
            return Err(ConfigError::MissingField { field: "api_url" }.into());
        }
        if self.provider.regions.is_empty() {
            return Err(ConfigError::MissingField { field: "regions" }.into());
        }
        match self.logging.format.as_str() {
            "pretty" | "json" => {}
            other => {
                return Err(ConfigError::InvalidValue {
                    field: "logging.format",
                    reason: format!("expected \"pretty\" or \"json\", got \"{other}\""),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Initialize tracing. `-v` flags override the configured level.
    ///
    /// Logs go to stderr so `--json` output on stdout stays machine-readable.
    pub fn init_logging(&self, verbosity: u8) {
        let level = match verbosity {
            0 => self.logging.level.as_str(),
            1 => "debug",
            _ => "trace",
        };
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        match self.logging.format.as_str() {
            "json" => {
                fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
            _ => {
                fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
        }
    }

    /// TOML template written by `freeroll config init`.
    pub fn template() -> &'static str {
        r#"# freeroll configuration.
# The provider API key is read from the ODDS_API_KEY environment variable.

[provider]
api_url = "https://api.the-odds-api.com/v4"
regions = "eu"

[scan]
# Bookmaker key used as the default filter when none is given on the
# command line, e.g. "parionsport_fr".
# preferred_bookmaker = ""

[logging]
level = "info"
format = "pretty"
"#
    }
}
