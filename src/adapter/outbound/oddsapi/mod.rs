//! The Odds API integration.
//!
//! Maps The Odds API's v4 REST payloads into domain events.

pub mod client;
pub mod dto;

pub use client::OddsApiClient;
