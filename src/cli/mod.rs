//! Command-line interface definitions.
//!
//! The CLI maps the tool's surfaces onto subcommands: catalog listing,
//! group scans, the global best opportunity, the manual allocation
//! calculator, and configuration management.

pub mod allocate;
pub mod best;
pub mod config;
pub mod output;
pub mod render;
pub mod scan;
pub mod sports;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Freeroll - sports-odds arbitrage detection and stake allocation.
#[derive(Parser, Debug)]
#[command(name = "freeroll")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, default_value = "config.toml")]
    pub config: PathBuf,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List sport groups and active competitions
    Sports(SportsArgs),

    /// Scan one sport group for arbitrage opportunities
    Scan(ScanArgs),

    /// Show the single best opportunity across all active sports
    Best(BestArgs),

    /// Split cash and freebet budgets across a market's outcomes
    Allocate(AllocateArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Arguments for the `sports` subcommand.
#[derive(Parser, Debug)]
pub struct SportsArgs {
    /// Only list sport groups, not individual competitions
    #[arg(long)]
    pub groups: bool,
}

/// Arguments for the `scan` subcommand.
#[derive(Parser, Debug)]
pub struct ScanArgs {
    /// Sport group to scan (as listed by `freeroll sports --groups`)
    #[arg(short, long)]
    pub group: String,

    /// Restrict the scan to one bookmaker key
    #[arg(short, long)]
    pub bookmaker: Option<String>,

    /// Show at most this many opportunities
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the `best` subcommand.
#[derive(Parser, Debug)]
pub struct BestArgs {
    /// Restrict the scan to one bookmaker key
    #[arg(short, long)]
    pub bookmaker: Option<String>,

    /// Cash budget to allocate over the best opportunity
    #[arg(long)]
    pub cash: Option<f64>,

    /// Freebet budget to allocate over the best opportunity
    #[arg(long)]
    pub freebet: Option<f64>,
}

/// Arguments for the `allocate` subcommand.
#[derive(Parser, Debug)]
pub struct AllocateArgs {
    /// Comma-separated decimal odds, e.g. 2.5,3.2,2.8
    #[arg(short, long, value_delimiter = ',', num_args = 2..=3, required = true)]
    pub odds: Vec<f64>,

    /// Cash budget
    #[arg(long, default_value_t = 0.0)]
    pub cash: f64,

    /// Freebet budget
    #[arg(long, default_value_t = 0.0)]
    pub freebet: f64,
}

/// Subcommands for `freeroll config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template
    Init,
    /// Display the effective configuration with defaults applied
    Show,
    /// Validate a configuration file for correctness
    Validate,
}
