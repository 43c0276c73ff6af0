//! The Odds API REST client.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::config::ProviderConfig;
use crate::domain::{Event, Sport, H2H_MARKET};
use crate::error::{ConfigError, Error, Result};
use crate::provider::OddsProvider;

use super::dto::{ErrorDto, EventDto, SportDto};

/// REST client for The Odds API v4.
pub struct OddsApiClient {
    http: Client,
    base_url: Url,
    api_key: String,
    regions: String,
}

impl OddsApiClient {
    pub fn new(
        base_url: &str,
        api_key: impl Into<String>,
        regions: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            http: Client::new(),
            base_url: Url::parse(base_url)?,
            api_key: api_key.into(),
            regions: regions.into(),
        })
    }

    /// Build a client from configuration; fails when `ODDS_API_KEY` is unset.
    pub fn from_config(config: &ProviderConfig) -> Result<Self> {
        let api_key = config.api_key.clone().ok_or(ConfigError::MissingField {
            field: "ODDS_API_KEY",
        })?;
        Self::new(&config.api_url, api_key, config.regions.clone())
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}/{path}"))?)
    }

    /// GET `url` and decode the JSON body. Non-success statuses surface the
    /// provider's error message. The URL carries the API key, so only the
    /// path is ever logged.
    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!(path = url.path(), "GET");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ErrorDto>().await {
                Ok(body) => body.message,
                Err(_) => status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string(),
            };
            return Err(Error::Provider {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl OddsProvider for OddsApiClient {
    async fn sports(&self) -> Result<Vec<Sport>> {
        let mut url = self.endpoint("sports")?;
        url.query_pairs_mut().append_pair("apiKey", &self.api_key);

        let dtos: Vec<SportDto> = self.get_json(url).await?;
        debug!(count = dtos.len(), "fetched sport catalog");

        Ok(dtos.into_iter().map(Sport::from).collect())
    }

    async fn h2h_events(&self, sport_key: &str) -> Result<Vec<Event>> {
        let mut url = self.endpoint(&format!("sports/{sport_key}/odds"))?;
        url.query_pairs_mut()
            .append_pair("apiKey", &self.api_key)
            .append_pair("regions", &self.regions)
            .append_pair("markets", H2H_MARKET);

        let dtos: Vec<EventDto> = self.get_json(url).await?;
        debug!(sport = sport_key, count = dtos.len(), "fetched events");

        Ok(dtos.into_iter().map(Event::from).collect())
    }

    fn name(&self) -> &'static str {
        "the-odds-api"
    }
}
