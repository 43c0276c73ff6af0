//! Best opportunity across all active sports.

use crate::app::App;
use crate::cli::{output, render, BestArgs};
use crate::config::Config;
use crate::domain::allocate;
use crate::error::Result;

pub async fn run(config: &Config, args: &BestArgs) -> Result<()> {
    let app = App::from_config(config)?;

    output::header(env!("CARGO_PKG_VERSION"));
    let pb = output::spinner("Scanning all active sports");

    let best = match app.best(args.bookmaker.as_deref()).await {
        Ok(best) => best,
        Err(error) => {
            output::spinner_fail(&pb, "Scan failed");
            return Err(error);
        }
    };

    let Some(opportunity) = best else {
        output::spinner_success(&pb, "Scan complete");
        if output::is_json() {
            output::json_output(serde_json::Value::Null);
        } else {
            output::note("No arbitrage opportunity found.");
        }
        return Ok(());
    };
    output::spinner_success(&pb, "Best opportunity found");

    let cash = args.cash.unwrap_or(0.0);
    let freebet = args.freebet.unwrap_or(0.0);
    let split = (cash > 0.0 || freebet > 0.0).then(|| allocate(&opportunity, cash, freebet));

    if output::is_json() {
        output::json_output(serde_json::json!({
            "opportunity": &opportunity,
            "stakes": &split,
        }));
        return Ok(());
    }

    render::opportunity(&opportunity);
    if let Some(split) = &split {
        let labels: Vec<String> = opportunity
            .outcomes
            .iter()
            .map(|outcome| outcome.name.clone())
            .collect();
        render::stakes(&labels, split);
    }

    Ok(())
}
