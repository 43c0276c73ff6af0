//! Provider trait definitions.
//!
//! This trait defines the interface any odds feed must provide for the app
//! layer to scan it.

use async_trait::async_trait;

use crate::domain::{Event, Sport};
use crate::error::Result;

/// Upstream source of sport catalogs and quoted events.
#[async_trait]
pub trait OddsProvider: Send + Sync {
    /// The provider's sport catalog.
    async fn sports(&self) -> Result<Vec<Sport>>;

    /// Upcoming events with head-to-head quotes for one competition.
    async fn h2h_events(&self, sport_key: &str) -> Result<Vec<Event>>;

    /// Provider name for logging/debugging.
    fn name(&self) -> &'static str;
}
