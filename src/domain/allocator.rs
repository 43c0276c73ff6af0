//! Stake allocation that equalizes payout across outcomes.

use serde::Serialize;

use super::opportunity::Opportunity;

/// Per-outcome stake split for one opportunity and one budget pair.
///
/// Stake vectors are positionally aligned with the opportunity's outcomes.
/// The defining invariant: for every outcome i,
/// `cash_stakes[i] * C_i + freebet_stakes[i] * (C_i - 1)` is identical, so
/// the net result does not depend on which outcome occurs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StakeDistribution {
    pub cash_stakes: Vec<f64>,
    pub freebet_stakes: Vec<f64>,
    /// Net cash result: gross return minus the cash staked. Negative when
    /// this bookmaker alone offers no cash edge.
    pub cash_profit: f64,
    /// Net freebet winnings; freebets cost nothing, so never negative.
    pub freebet_profit: f64,
    pub guaranteed_profit: f64,
}

/// Split `cash` and `freebet` budgets across the opportunity's outcomes so
/// the net payout is identical whichever outcome occurs.
pub fn allocate(opportunity: &Opportunity, cash: f64, freebet: f64) -> StakeDistribution {
    split_budgets(&opportunity.prices(), cash, freebet)
}

/// Budget split over raw decimal prices; used directly by the manual
/// calculator.
///
/// The cash leg equalizes gross return (stakes proportional to `1/C_i`).
/// The freebet leg equalizes net winnings (stakes proportional to
/// `1/(C_i - 1)`) and is skipped entirely when any outcome is priced at or
/// below even money. Legs with a zero budget are skipped. Non-finite
/// intermediate values are clamped to zero.
pub fn split_budgets(prices: &[f64], cash: f64, freebet: f64) -> StakeDistribution {
    let n = prices.len();

    let mut cash_stakes = vec![0.0; n];
    let mut cash_profit = 0.0;
    if cash > 0.0 {
        let sum_inv: f64 = prices.iter().map(|price| price.recip()).sum();
        let total_return = finite_or_zero(cash / sum_inv);
        for (stake, price) in cash_stakes.iter_mut().zip(prices) {
            *stake = finite_or_zero(total_return / price);
        }
        cash_profit = finite_or_zero(total_return - cash);
    }

    let mut freebet_stakes = vec![0.0; n];
    let mut freebet_profit = 0.0;
    let nets: Vec<f64> = prices.iter().map(|price| price - 1.0).collect();
    if freebet > 0.0 && !nets.is_empty() && nets.iter().all(|&net| net > 0.0) {
        let sum_inv: f64 = nets.iter().map(|net| net.recip()).sum();
        freebet_profit = finite_or_zero(freebet / sum_inv);
        for (stake, net) in freebet_stakes.iter_mut().zip(&nets) {
            *stake = finite_or_zero(freebet_profit / net);
        }
    }

    StakeDistribution {
        cash_stakes,
        freebet_stakes,
        cash_profit,
        freebet_profit,
        guaranteed_profit: cash_profit + freebet_profit,
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
