//! Sakenowa data API client
//!
//! Fetches the four reference datasets (areas, breweries, brands, flavor
//! charts) as JSON from the Sakenowa data API. Each dataset arrives inside
//! an envelope object keyed by dataset name (`areas`, `breweries`, `brands`,
//! `flavorCharts`).
//!
//! All four lookups are idempotent, read-only GETs. A client-side rate
//! limiter keeps a polite minimum interval between requests; the snapshot
//! fetch runs the four lookups sequentially and fails as a whole if any of
//! them fails, so the service never starts on partial reference data.

use sakenavi_common::config::SakenowaConfig;
use sakenavi_common::models::{Area, Brand, Brewery, FlavorChart};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::sync::Mutex;

use crate::snapshot::ReferenceSnapshot;

const USER_AGENT: &str = concat!("sakenavi/", env!("CARGO_PKG_VERSION"));

/// Sakenowa client errors
#[derive(Debug, Error)]
pub enum SakenowaError {
    /// Network communication error
    #[error("Network error: {0}")]
    Network(String),

    /// Sakenowa API returned a non-success status
    #[error("API error {0}: {1}")]
    ApiStatus(u16, String),

    /// Failed to decode an API response body
    #[error("Parse error: {0}")]
    Parse(String),
}

#[derive(Debug, Deserialize)]
struct AreasEnvelope {
    areas: Vec<Area>,
}

#[derive(Debug, Deserialize)]
struct BreweriesEnvelope {
    breweries: Vec<Brewery>,
}

#[derive(Debug, Deserialize)]
struct BrandsEnvelope {
    brands: Vec<Brand>,
}

#[derive(Debug, Deserialize)]
struct FlavorChartsEnvelope {
    #[serde(rename = "flavorCharts")]
    flavor_charts: Vec<FlavorChart>,
}

/// Minimum-interval limiter for upstream requests
struct RateLimiter {
    last_request: Mutex<Option<Instant>>,
    min_interval: Duration,
}

impl RateLimiter {
    fn new(min_interval_ms: u64) -> Self {
        Self {
            last_request: Mutex::new(None),
            min_interval: Duration::from_millis(min_interval_ms),
        }
    }

    async fn wait(&self) {
        let mut last = self.last_request.lock().await;

        if let Some(last_time) = *last {
            let elapsed = last_time.elapsed();
            if elapsed < self.min_interval {
                let wait_time = self.min_interval - elapsed;
                tracing::debug!("Sakenowa rate limiting: waiting {:?}", wait_time);
                tokio::time::sleep(wait_time).await;
            }
        }

        *last = Some(Instant::now());
    }
}

/// Sakenowa data API client
pub struct SakenowaClient {
    http_client: reqwest::Client,
    base_url: String,
    rate_limiter: RateLimiter,
}

impl SakenowaClient {
    pub fn new(config: &SakenowaConfig) -> Result<Self, SakenowaError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SakenowaError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            rate_limiter: RateLimiter::new(config.rate_limit_ms),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, SakenowaError> {
        self.rate_limiter.wait().await;

        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!(url = %url, "Querying Sakenowa API");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| SakenowaError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(SakenowaError::ApiStatus(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| SakenowaError::Parse(e.to_string()))
    }

    pub async fn fetch_areas(&self) -> Result<Vec<Area>, SakenowaError> {
        let envelope: AreasEnvelope = self.get_json("areas").await?;
        Ok(envelope.areas)
    }

    pub async fn fetch_breweries(&self) -> Result<Vec<Brewery>, SakenowaError> {
        let envelope: BreweriesEnvelope = self.get_json("breweries").await?;
        Ok(envelope.breweries)
    }

    pub async fn fetch_brands(&self) -> Result<Vec<Brand>, SakenowaError> {
        let envelope: BrandsEnvelope = self.get_json("brands").await?;
        Ok(envelope.brands)
    }

    pub async fn fetch_flavor_charts(&self) -> Result<Vec<FlavorChart>, SakenowaError> {
        let envelope: FlavorChartsEnvelope = self.get_json("flavor-charts").await?;
        Ok(envelope.flavor_charts)
    }

    /// Fetch all four datasets and build the session snapshot
    ///
    /// Runs sequentially; any failed stage fails the whole fetch.
    pub async fn fetch_snapshot(&self) -> Result<ReferenceSnapshot, SakenowaError> {
        let areas = self.fetch_areas().await?;
        tracing::info!(count = areas.len(), "Fetched areas");

        let breweries = self.fetch_breweries().await?;
        tracing::info!(count = breweries.len(), "Fetched breweries");

        let brands = self.fetch_brands().await?;
        tracing::info!(count = brands.len(), "Fetched brands");

        let charts = self.fetch_flavor_charts().await?;
        tracing::info!(count = charts.len(), "Fetched flavor charts");

        Ok(ReferenceSnapshot::from_records(
            areas, breweries, brands, charts,
        ))
    }
}
