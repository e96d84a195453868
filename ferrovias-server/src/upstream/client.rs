//! Ferrovias timetable HTTP client.
//!
//! Submits the station form the same way the public timetable page does and
//! parses the HTML it returns.

use std::time::Duration;

use tracing::debug;

use crate::domain::{FetchOutcome, StationId};

use super::error::FetchError;
use super::parse::parse_timetable;
use super::source::TimetableSource;

/// Default upstream timetable endpoint.
pub const DEFAULT_BASE_URL: &str = "http://proximostrenes.ferrovias.com.ar/estaciones.asp";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Constant `adm` form field the upstream expects.
const ADM_FIELD: &str = "1";

/// Configuration for the upstream client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamConfig {
    /// Timetable endpoint URL
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl UpstreamConfig {
    /// Create a config pointing at the production endpoint.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom endpoint URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the Ferrovias timetable page.
///
/// Cloning is cheap and shares the connection pool.
#[derive(Debug, Clone)]
pub struct FerroviasClient {
    http: reqwest::Client,
    base_url: String,
}

impl FerroviasClient {
    /// Create a new client with the given configuration.
    pub fn new(config: UpstreamConfig) -> Result<Self, FetchError> {
        // A redirect is a non-success answer, not a page to follow
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Fetch and parse the timetable for a station.
    ///
    /// Makes exactly one attempt. Transport failures, timeouts and non-success
    /// statuses are all reported as [`FetchError::Network`].
    pub async fn fetch(&self, station: StationId) -> Result<FetchOutcome, FetchError> {
        debug!(station = %station, url = %self.base_url, "Fetching timetable");

        let response = self
            .http
            .post(&self.base_url)
            .form(&[("idEst", station.to_string().as_str()), ("adm", ADM_FIELD)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Network(format!(
                "upstream returned status {status} for station {station}"
            )));
        }

        let body = response.text().await?;
        let outcome = parse_timetable(&body)?;

        debug!(
            station = %station,
            empty = matches!(outcome, FetchOutcome::Empty),
            "Parsed timetable"
        );
        Ok(outcome)
    }
}

impl TimetableSource for FerroviasClient {
    async fn fetch(&self, station: StationId) -> Result<FetchOutcome, FetchError> {
        FerroviasClient::fetch(self, station).await
    }
}
