//! Provider-sourced event and market types.
//!
//! These are read-only inputs to the detector: the fetch layer materializes
//! them once per scan and the core never mutates them.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Market key of the head-to-head (moneyline) betting line.
pub const H2H_MARKET: &str = "h2h";

/// A single quoted outcome of a market.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    pub name: String,
    /// Decimal odds.
    pub price: f64,
}

impl Outcome {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// A backable outcome pays out more than its stake.
    pub fn is_backable(&self) -> bool {
        self.price.is_finite() && self.price > 1.0
    }
}

/// One betting line quoted by one bookmaker for one event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Market {
    pub key: String,
    pub outcomes: Vec<Outcome>,
}

impl Market {
    /// Construct a head-to-head market.
    pub fn h2h(outcomes: Vec<Outcome>) -> Self {
        Self {
            key: H2H_MARKET.into(),
            outcomes,
        }
    }

    pub fn is_h2h(&self) -> bool {
        self.key == H2H_MARKET
    }
}

/// One bookmaker's quoted markets for one event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookmakerQuote {
    /// Stable provider key, e.g. `"unibet_eu"`.
    pub key: String,
    /// Human-readable name, e.g. `"Unibet"`.
    pub title: String,
    pub markets: Vec<Market>,
}

impl BookmakerQuote {
    /// The single h2h market of interest, if this bookmaker quotes one.
    pub fn h2h_market(&self) -> Option<&Market> {
        self.markets.iter().find(|market| market.is_h2h())
    }
}

/// A sporting event with the bookmaker quotes attached by the provider.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    pub id: String,
    pub sport_key: String,
    pub home_team: String,
    pub away_team: String,
    pub commence_time: DateTime<Utc>,
    pub bookmakers: Vec<BookmakerQuote>,
}

/// Catalog entry describing one competition offered by the provider.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sport {
    pub key: String,
    pub group: String,
    pub title: String,
    pub active: bool,
}
