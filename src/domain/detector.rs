//! Arbitrage detection over bookmaker quotes.

use super::event::{BookmakerQuote, Event};
use super::normalize::normalize;
use super::opportunity::{BackedOutcome, Opportunity};

/// Free-bet credit the profit metric is normalized to, in currency units.
pub const FREEBET_REFERENCE: f64 = 100.0;

/// Scan events and emit every viable (bookmaker, market) combination.
///
/// When `bookmaker_filter` is given and non-empty, only that bookmaker's
/// quotes are scanned. Output is in scan order — events in input order,
/// bookmakers in quote order; pass it to [`rank`] for the ranked list.
/// Malformed markets are skipped, never fatal.
pub fn detect(events: &[Event], bookmaker_filter: Option<&str>) -> Vec<Opportunity> {
    let filter = bookmaker_filter.filter(|key| !key.is_empty());

    let mut opportunities = Vec::new();
    for event in events {
        for quote in &event.bookmakers {
            if filter.is_some_and(|key| quote.key != key) {
                continue;
            }
            if let Some(opportunity) = evaluate_quote(event, quote) {
                opportunities.push(opportunity);
            }
        }
    }
    opportunities
}

/// Stable sort by descending freebet profit; ties keep scan order.
pub fn rank(opportunities: &mut [Opportunity]) {
    opportunities.sort_by(|a, b| b.freebet_profit.total_cmp(&a.freebet_profit));
}

/// Evaluate one bookmaker's h2h market for one event.
fn evaluate_quote(event: &Event, quote: &BookmakerQuote) -> Option<Opportunity> {
    let market = quote.h2h_market()?;
    let normalized = normalize(market, &event.home_team, &event.away_team)?;
    let prices = normalized.prices();

    let freebet_profit = freebet_profit(&prices)?;
    if freebet_profit <= 0.0 {
        return None;
    }
    let cash_roi = cash_roi(&prices);

    let outcomes = normalized
        .labels()
        .into_iter()
        .zip(&prices)
        .map(|(name, &price)| BackedOutcome {
            name,
            price,
            bookmaker: quote.title.clone(),
        })
        .collect();

    Some(Opportunity {
        event: event.clone(),
        outcomes,
        freebet_profit,
        cash_roi,
    })
}

/// Guaranteed profit from staking [`FREEBET_REFERENCE`] of free-bet credit
/// proportionally across all outcomes.
///
/// `None` when any outcome cannot be backed profitably with a freebet
/// (price non-finite or at/below even money), or when there are no prices.
pub fn freebet_profit(prices: &[f64]) -> Option<f64> {
    let mut sum_inv = 0.0;
    for &price in prices {
        if !price.is_finite() {
            return None;
        }
        let net = price - 1.0;
        if net <= 0.0 {
            return None;
        }
        sum_inv += net.recip();
    }
    (sum_inv > 0.0).then(|| FREEBET_REFERENCE / sum_inv)
}

/// Percentage return of a cash surebet, or `None` when the combined implied
/// probability is at or above 1 and cash betting alone cannot guarantee
/// profit.
pub fn cash_roi(prices: &[f64]) -> Option<f64> {
    let sum_inv: f64 = prices.iter().map(|price| price.recip()).sum();
    (sum_inv < 1.0).then(|| (sum_inv.recip() - 1.0) * 100.0)
}
