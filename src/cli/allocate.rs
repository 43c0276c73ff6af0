//! Manual allocation calculator.
//!
//! Works from raw odds with no provider involved, so it needs neither a
//! config file nor an API key.

use crate::cli::{output, render, AllocateArgs};
use crate::domain::{cash_roi, freebet_profit, split_budgets, DRAW_LABEL};
use crate::error::Result;

pub fn run(args: &AllocateArgs) -> Result<()> {
    let odds = &args.odds;
    let split = split_budgets(odds, args.cash, args.freebet);
    let profit_per_100 = freebet_profit(odds);
    let roi = cash_roi(odds);

    if output::is_json() {
        output::json_output(serde_json::json!({
            "odds": odds,
            "cash": args.cash,
            "freebet": args.freebet,
            "freebet_profit_per_100": profit_per_100,
            "cash_roi": roi,
            "distribution": split,
        }));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));

    if odds.iter().any(|&price| price <= 1.0) {
        output::warning("odds at or below even money: the freebet leg is skipped");
    }

    match profit_per_100 {
        Some(profit) => output::field(
            "Freebet profit",
            output::positive(format!("{profit:.2} per 100 staked")),
        ),
        None => output::field("Freebet profit", output::muted("not backable")),
    }
    match roi {
        Some(roi) => output::field("Cash ROI", output::positive(format!("+{roi:.2}%"))),
        None => output::field("Cash ROI", output::muted("none")),
    }

    render::stakes(&outcome_labels(odds.len()), &split);

    Ok(())
}

/// Generic labels for manual odds: home/draw/away for three-way markets,
/// positional otherwise.
fn outcome_labels(count: usize) -> Vec<String> {
    if count == 3 {
        vec!["Home win".into(), DRAW_LABEL.into(), "Away win".into()]
    } else {
        (1..=count).map(|i| format!("Outcome {i}")).collect()
    }
}
