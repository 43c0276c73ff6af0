//! Per-group opportunity scan.

use crate::app::App;
use crate::cli::{output, render, ScanArgs};
use crate::config::Config;
use crate::error::Result;

pub async fn run(config: &Config, args: &ScanArgs) -> Result<()> {
    let app = App::from_config(config)?;

    output::header(env!("CARGO_PKG_VERSION"));
    let pb = output::spinner(&format!("Scanning {}", args.group));

    let mut opportunities = match app
        .scan_group(&args.group, args.bookmaker.as_deref())
        .await
    {
        Ok(opportunities) => opportunities,
        Err(error) => {
            output::spinner_fail(&pb, "Scan failed");
            return Err(error);
        }
    };
    output::spinner_success(
        &pb,
        &format!("{} opportunities found", opportunities.len()),
    );

    if let Some(limit) = args.limit {
        opportunities.truncate(limit);
    }

    if output::is_json() {
        output::json_output(serde_json::to_value(&opportunities)?);
        return Ok(());
    }

    if opportunities.is_empty() {
        output::note("No arbitrage opportunity found.");
        return Ok(());
    }

    for opportunity in &opportunities {
        render::opportunity(opportunity);
    }
    println!();
    output::hint("allocate budgets with `freeroll best --cash <amount> --freebet <amount>`");

    Ok(())
}
