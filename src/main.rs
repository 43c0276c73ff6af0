use clap::Parser;

use freeroll::cli::{allocate, best, config as config_cmd, output, scan, sports};
use freeroll::cli::{Cli, Commands, ConfigCommand};
use freeroll::config::Config;
use freeroll::error::Result;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(output::OutputConfig::new(cli.json, cli.quiet));

    // `config init` must work over a missing or broken file.
    let config = if matches!(cli.command, Commands::Config(ConfigCommand::Init)) {
        Config::default()
    } else {
        match Config::load_or_default(&cli.config) {
            Ok(config) => config,
            Err(error) => {
                output::error(&error.to_string());
                std::process::exit(1);
            }
        }
    };
    config.init_logging(cli.verbose);

    if let Err(error) = run(&cli, &config).await {
        output::error(&error.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: &Cli, config: &Config) -> Result<()> {
    match &cli.command {
        Commands::Sports(args) => sports::run(config, args).await,
        Commands::Scan(args) => scan::run(config, args).await,
        Commands::Best(args) => best::run(config, args).await,
        Commands::Allocate(args) => allocate::run(args),
        Commands::Config(command) => config_cmd::run(&cli.config, config, command),
    }
}
