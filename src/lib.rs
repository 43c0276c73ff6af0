//! Freeroll - sports-odds arbitrage detection and stake allocation.
//!
//! Given decimal odds quoted by independent bookmakers for the mutually
//! exclusive outcomes of a sporting event, this crate finds combinations
//! that guarantee a profit — with real cash, or with zero-cost freebet
//! credit — and computes the stake split that pays the same whichever
//! outcome occurs.
//!
//! # Architecture
//!
//! The core is pure, synchronous computation over in-memory values; the
//! shell around it fetches odds and renders results:
//!
//! - [`domain`] - normalization, detection, ranking, allocation
//! - [`provider`] - the odds feed trait the app layer scans through
//! - [`adapter`] - The Odds API implementation of the provider trait
//! - [`app`] - fetch → detect → rank orchestration
//! - [`config`] - TOML configuration; the API key comes from `ODDS_API_KEY`
//! - [`error`] - error types for the crate
//! - [`cli`] - terminal interface
//!
//! # Example
//!
//! ```
//! use freeroll::domain::{freebet_profit, split_budgets};
//!
//! let prices = [2.5, 3.2, 2.8];
//!
//! // Guaranteed winnings from 100 of free-bet credit.
//! let profit = freebet_profit(&prices).unwrap();
//! assert!(profit > 59.0 && profit < 60.0);
//!
//! // Stake split equalizing the payout across all three outcomes.
//! let split = split_budgets(&prices, 100.0, 100.0);
//! assert!(split.guaranteed_profit > 0.0);
//! ```

pub mod adapter;
pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod provider;
