//! Terminal rendering of opportunities and stake splits.

use tabled::{Table, Tabled};

use crate::cli::output;
use crate::domain::{Opportunity, StakeDistribution};

#[derive(Tabled)]
struct OutcomeRow {
    #[tabled(rename = "Outcome")]
    name: String,
    #[tabled(rename = "Odds")]
    odds: String,
    #[tabled(rename = "Bookmaker")]
    bookmaker: String,
}

#[derive(Tabled)]
struct StakeRow {
    #[tabled(rename = "Outcome")]
    name: String,
    #[tabled(rename = "Cash stake")]
    cash: String,
    #[tabled(rename = "Freebet stake")]
    freebet: String,
}

fn print_table(table: Table) {
    for line in table.to_string().lines() {
        println!("  {line}");
    }
}

/// Signed money amount, green when positive, red when negative.
fn signed(amount: f64) -> String {
    if amount >= 0.0 {
        output::positive(format!("+{amount:.2}"))
    } else {
        output::negative(format!("{amount:.2}"))
    }
}

/// Render one detected opportunity.
pub fn opportunity(opp: &Opportunity) {
    let event = &opp.event;
    output::section(&format!("{} vs {}", event.home_team, event.away_team));
    output::field(
        "Kickoff",
        event.commence_time.format("%Y-%m-%d %H:%M UTC"),
    );
    if let Some(bookmaker) = opp.bookmaker() {
        output::field("Bookmaker", output::highlight(bookmaker));
    }
    output::field(
        "Freebet profit",
        output::positive(format!(
            "{:.2} per 100 staked",
            opp.freebet_profit
        )),
    );
    match opp.cash_roi {
        Some(roi) => output::field("Cash ROI", output::positive(format!("+{roi:.2}%"))),
        None => output::field("Cash ROI", output::muted("none")),
    }

    let rows: Vec<OutcomeRow> = opp
        .outcomes
        .iter()
        .map(|outcome| OutcomeRow {
            name: outcome.name.clone(),
            odds: format!("{:.2}", outcome.price),
            bookmaker: outcome.bookmaker.clone(),
        })
        .collect();
    print_table(Table::new(rows));
}

/// Render a stake split aligned with the given outcome labels.
pub fn stakes(labels: &[String], split: &StakeDistribution) {
    output::section("Stake split");

    let rows: Vec<StakeRow> = labels
        .iter()
        .enumerate()
        .map(|(i, label)| StakeRow {
            name: label.clone(),
            cash: format!("{:.2}", split.cash_stakes.get(i).copied().unwrap_or(0.0)),
            freebet: format!(
                "{:.2}",
                split.freebet_stakes.get(i).copied().unwrap_or(0.0)
            ),
        })
        .collect();
    print_table(Table::new(rows));

    println!();
    output::field("Cash profit", signed(split.cash_profit));
    output::field("Freebet profit", signed(split.freebet_profit));
    output::field("Guaranteed profit", signed(split.guaranteed_profit));
}
