use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::error::ProviderError;
use crate::model::{ForecastRecord, PlaceMatch};

/// Free-tier API root.
pub const DEFAULT_BASE_URL: &str = "https://www.meteosource.com/api/v1/free";

const FIND_PLACES_PATH: &str = "/find_places";
const POINT_PATH: &str = "/point";
const DAILY_SECTION: &str = "daily";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the Meteosource HTTP API.
///
/// Holds the API key and a reqwest client with a fixed 10 second timeout.
/// Both operations are single requests; failures surface as
/// [`ProviderError`] without retries.
#[derive(Debug, Clone)]
pub struct Meteosource {
    api_key: String,
    base_url: String,
    http: Client,
}

impl Meteosource {
    pub fn new(api_key: String) -> Result<Self, ProviderError> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Same client against a different API root. Used by tests to point at a
    /// mock server.
    pub fn with_base_url(api_key: String, base_url: String) -> Result<Self, ProviderError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self { api_key, base_url, http })
    }

    /// Resolve a free-text place name to the provider's place identifier.
    ///
    /// Returns the first match of the search; an empty match list is
    /// reported as [`ProviderError::NoMatch`].
    pub async fn find_place(&self, query: &str) -> Result<PlaceMatch, ProviderError> {
        let url = format!("{}{}", self.base_url, FIND_PLACES_PATH);

        debug!(query, "searching for place");

        let res = self
            .http
            .get(&url)
            .query(&[("text", query), ("key", self.api_key.as_str())])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(ProviderError::Status {
                status,
                description: error_description(&body),
            });
        }

        let matches: Vec<PlaceMatch> = serde_json::from_str(&body)?;

        debug!(count = matches.len(), "place search returned");

        matches
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::NoMatch { query: query.to_string() })
    }

    /// Fetch today's forecast for a previously resolved place identifier.
    pub async fn daily_forecast(&self, place_id: &str) -> Result<ForecastRecord, ProviderError> {
        let url = format!("{}{}", self.base_url, POINT_PATH);

        debug!(place_id, "fetching daily forecast");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("place_id", place_id),
                ("sections", DAILY_SECTION),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(ProviderError::Status {
                status,
                description: error_description(&body),
            });
        }

        let parsed: PointResponse = serde_json::from_str(&body)?;

        parsed
            .daily
            .data
            .into_iter()
            .next()
            .ok_or(ProviderError::EmptyForecast)
    }
}

#[derive(Debug, Deserialize)]
struct PointResponse {
    daily: DailySection,
}

#[derive(Debug, Deserialize)]
struct DailySection {
    data: Vec<ForecastRecord>,
}

/// Error bodies are JSON `{"detail": "..."}` on this API; fall back to the
/// raw body when they aren't.
fn error_description(body: &str) -> String {
    #[derive(Deserialize)]
    struct ApiError {
        detail: String,
    }

    match serde_json::from_str::<ApiError>(body) {
        Ok(err) => err.detail,
        Err(_) => truncate_body(body),
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX { format!("{}...", &body[..MAX]) } else { body.to_string() }
}
