//! Outbound adapters (driven side).

pub mod oddsapi;
