//! Detected arbitrage opportunities.

use serde::Serialize;

use super::event::Event;

/// One outcome of an opportunity, attributed to the bookmaker quoting it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BackedOutcome {
    pub name: String,
    pub price: f64,
    pub bookmaker: String,
}

/// A (bookmaker, market) combination worth backing on every outcome.
///
/// `freebet_profit` is the guaranteed profit from staking the conventional
/// 100-unit free-bet credit proportionally across the outcomes, and is the
/// ranking key. `cash_roi` is populated only when the market is a true cash
/// surebet (combined implied probability below 1).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Opportunity {
    pub event: Event,
    /// Backed outcomes in canonical slot order.
    pub outcomes: Vec<BackedOutcome>,
    pub freebet_profit: f64,
    pub cash_roi: Option<f64>,
}

impl Opportunity {
    /// Quoted prices in slot order.
    pub fn prices(&self) -> Vec<f64> {
        self.outcomes.iter().map(|outcome| outcome.price).collect()
    }

    /// Bookmaker title common to all backed outcomes.
    pub fn bookmaker(&self) -> Option<&str> {
        self.outcomes.first().map(|outcome| outcome.bookmaker.as_str())
    }
}
