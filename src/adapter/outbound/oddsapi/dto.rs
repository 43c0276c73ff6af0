//! The Odds API data transfer objects.
//!
//! Response shapes for `GET /v4/sports` and `GET /v4/sports/{key}/odds`.
//! Unknown fields are ignored so upstream additions do not break parsing.
//!
//! Example odds payload element:
//! ```json
//! {"id":"a1b2","sport_key":"soccer_france_ligue_one","home_team":"Marseille",
//!  "away_team":"Lyon","commence_time":"2024-05-04T19:00:00Z",
//!  "bookmakers":[{"key":"unibet_eu","title":"Unibet",
//!    "markets":[{"key":"h2h","outcomes":[{"name":"Marseille","price":2.5}]}]}]}
//! ```

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::{BookmakerQuote, Event, Market, Outcome, Sport};

/// Catalog entry from `GET /v4/sports`.
#[derive(Debug, Clone, Deserialize)]
pub struct SportDto {
    pub key: String,
    pub group: String,
    pub title: String,
    pub active: bool,
}

impl From<SportDto> for Sport {
    fn from(dto: SportDto) -> Self {
        Self {
            key: dto.key,
            group: dto.group,
            title: dto.title,
            active: dto.active,
        }
    }
}

/// Event with bookmaker odds from `GET /v4/sports/{key}/odds`.
#[derive(Debug, Clone, Deserialize)]
pub struct EventDto {
    pub id: String,
    pub sport_key: String,
    pub home_team: String,
    pub away_team: String,
    pub commence_time: DateTime<Utc>,
    #[serde(default)]
    pub bookmakers: Vec<BookmakerDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BookmakerDto {
    pub key: String,
    pub title: String,
    #[serde(default)]
    pub markets: Vec<MarketDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MarketDto {
    pub key: String,
    #[serde(default)]
    pub outcomes: Vec<OutcomeDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutcomeDto {
    pub name: String,
    pub price: f64,
}

impl From<EventDto> for Event {
    fn from(dto: EventDto) -> Self {
        Self {
            id: dto.id,
            sport_key: dto.sport_key,
            home_team: dto.home_team,
            away_team: dto.away_team,
            commence_time: dto.commence_time,
            bookmakers: dto.bookmakers.into_iter().map(BookmakerQuote::from).collect(),
        }
    }
}

impl From<BookmakerDto> for BookmakerQuote {
    fn from(dto: BookmakerDto) -> Self {
        Self {
            key: dto.key,
            title: dto.title,
            markets: dto.markets.into_iter().map(Market::from).collect(),
        }
    }
}

impl From<MarketDto> for Market {
    fn from(dto: MarketDto) -> Self {
        Self {
            key: dto.key,
            outcomes: dto
                .outcomes
                .into_iter()
                .map(|outcome| Outcome::new(outcome.name, outcome.price))
                .collect(),
        }
    }
}

/// Error body returned by the provider on non-success statuses.
#[derive(Debug, Deserialize)]
pub struct ErrorDto {
    pub message: String,
}
