//! App orchestration module.
//!
//! Fetches the sport catalog, fans out per-competition odds requests
//! concurrently, and runs detection over the merged events.

use std::sync::Arc;

use futures_util::future::join_all;
use tracing::{info, warn};

use crate::adapter::outbound::oddsapi::OddsApiClient;
use crate::config::Config;
use crate::domain::{detect, rank, Event, Opportunity, Sport};
use crate::error::Result;
use crate::provider::OddsProvider;

/// Scan orchestrator over one odds provider.
pub struct App {
    provider: Arc<dyn OddsProvider>,
    preferred_bookmaker: Option<String>,
}

impl App {
    pub fn new(provider: Arc<dyn OddsProvider>, config: &Config) -> Self {
        Self {
            provider,
            preferred_bookmaker: config.scan.preferred_bookmaker.clone(),
        }
    }

    /// Build an app over the real The Odds API client.
    pub fn from_config(config: &Config) -> Result<Self> {
        let provider = Arc::new(OddsApiClient::from_config(&config.provider)?);
        Ok(Self::new(provider, config))
    }

    /// The active part of the provider's sport catalog.
    pub async fn active_sports(&self) -> Result<Vec<Sport>> {
        let sports = self.provider.sports().await?;
        Ok(sports.into_iter().filter(|sport| sport.active).collect())
    }

    /// Distinct groups of active sports, sorted.
    pub async fn sport_groups(&self) -> Result<Vec<String>> {
        let mut groups: Vec<String> = self
            .active_sports()
            .await?
            .into_iter()
            .map(|sport| sport.group)
            .collect();
        groups.sort();
        groups.dedup();
        Ok(groups)
    }

    /// Ranked opportunities for one sport group.
    pub async fn scan_group(
        &self,
        group: &str,
        bookmaker: Option<&str>,
    ) -> Result<Vec<Opportunity>> {
        let keys: Vec<String> = self
            .active_sports()
            .await?
            .into_iter()
            .filter(|sport| sport.group == group)
            .map(|sport| sport.key)
            .collect();
        self.scan_keys(&keys, bookmaker).await
    }

    /// Ranked opportunities across every active sport.
    pub async fn scan_all(&self, bookmaker: Option<&str>) -> Result<Vec<Opportunity>> {
        let keys: Vec<String> = self
            .active_sports()
            .await?
            .into_iter()
            .map(|sport| sport.key)
            .collect();
        self.scan_keys(&keys, bookmaker).await
    }

    /// The single best opportunity across every active sport, if any.
    pub async fn best(&self, bookmaker: Option<&str>) -> Result<Option<Opportunity>> {
        Ok(self.scan_all(bookmaker).await?.into_iter().next())
    }

    /// Fetch every competition concurrently and run detection over the
    /// merged events.
    ///
    /// A competition whose fetch fails is excluded from the scan rather
    /// than failing the whole batch.
    async fn scan_keys(
        &self,
        keys: &[String],
        bookmaker: Option<&str>,
    ) -> Result<Vec<Opportunity>> {
        let fetches = keys.iter().map(|key| self.provider.h2h_events(key));

        let mut events: Vec<Event> = Vec::new();
        for (key, fetched) in keys.iter().zip(join_all(fetches).await) {
            match fetched {
                Ok(batch) => events.extend(batch),
                Err(error) => {
                    warn!(sport = %key, error = %error, "excluding competition from scan");
                }
            }
        }

        let filter = bookmaker.or(self.preferred_bookmaker.as_deref());
        let mut opportunities = detect(&events, filter);
        rank(&mut opportunities);

        info!(
            provider = self.provider.name(),
            competitions = keys.len(),
            events = events.len(),
            opportunities = opportunities.len(),
            "scan complete"
        );
        Ok(opportunities)
    }
}
