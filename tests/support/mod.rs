//! Shared fixtures: canned events and a stub odds provider.

#![allow(dead_code)]

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use freeroll::domain::{BookmakerQuote, Event, Market, Outcome, Sport};
use freeroll::error::{Error, Result};
use freeroll::provider::OddsProvider;

pub fn h2h_market(outcomes: &[(&str, f64)]) -> Market {
    Market::h2h(
        outcomes
            .iter()
            .map(|(name, price)| Outcome::new(*name, *price))
            .collect(),
    )
}

pub fn quote(key: &str, title: &str, market: Market) -> BookmakerQuote {
    BookmakerQuote {
        key: key.into(),
        title: title.into(),
        markets: vec![market],
    }
}

pub fn event(id: &str, home: &str, away: &str, quotes: Vec<BookmakerQuote>) -> Event {
    Event {
        id: id.into(),
        sport_key: "soccer_test_league".into(),
        home_team: home.into(),
        away_team: away.into(),
        commence_time: Utc.with_ymd_and_hms(2024, 5, 4, 19, 0, 0).unwrap(),
        bookmakers: quotes,
    }
}

pub fn sport(key: &str, group: &str, active: bool) -> Sport {
    Sport {
        key: key.into(),
        group: group.into(),
        title: key.replace('_', " "),
        active,
    }
}

/// Provider serving canned data, with optional per-competition failures.
#[derive(Default)]
pub struct StubProvider {
    pub sports: Vec<Sport>,
    pub events: HashMap<String, Vec<Event>>,
    pub failing: Vec<String>,
}

impl StubProvider {
    pub fn with_sports(sports: Vec<Sport>) -> Self {
        Self {
            sports,
            ..Self::default()
        }
    }

    pub fn events_for(mut self, sport_key: &str, events: Vec<Event>) -> Self {
        self.events.insert(sport_key.into(), events);
        self
    }

    pub fn failing_for(mut self, sport_key: &str) -> Self {
        self.failing.push(sport_key.into());
        self
    }
}

#[async_trait]
impl OddsProvider for StubProvider {
    async fn sports(&self) -> Result<Vec<Sport>> {
        Ok(self.sports.clone())
    }

    async fn h2h_events(&self, sport_key: &str) -> Result<Vec<Event>> {
        if self.failing.iter().any(|key| key == sport_key) {
            return Err(Error::Provider {
                status: 500,
                message: "upstream unavailable".into(),
            });
        }
        Ok(self.events.get(sport_key).cloned().unwrap_or_default())
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}
