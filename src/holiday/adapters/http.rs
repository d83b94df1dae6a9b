//! HTTP adapter fetching the holiday calendar from a JSON endpoint.

use crate::holiday::{
    domain::{HolidaySnapshot, HolidayUnavailable},
    ports::{HolidayLookup, HolidaySource},
};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Published UK bank holiday calendar.
pub const GOV_UK_BANK_HOLIDAYS_URL: &str = "https://www.gov.uk/bank-holidays.json";

/// Configuration for [`HttpHolidaySource`].
///
/// # Examples
///
/// ```
/// use caseworker_tasks::holiday::adapters::HttpHolidaySourceConfig;
/// use std::time::Duration;
///
/// let config = HttpHolidaySourceConfig::default().with_timeout(Duration::from_secs(2));
/// assert_eq!(config.timeout, Duration::from_secs(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpHolidaySourceConfig {
    /// Calendar document URL.
    pub endpoint: String,
    /// Upper bound on the whole request, connection included.
    pub timeout: Duration,
}

impl Default for HttpHolidaySourceConfig {
    fn default() -> Self {
        Self {
            endpoint: GOV_UK_BANK_HOLIDAYS_URL.to_owned(),
            timeout: Duration::from_secs(5),
        }
    }
}

impl HttpHolidaySourceConfig {
    /// Sets the calendar endpoint.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Errors returned while constructing an [`HttpHolidaySource`].
#[derive(Debug, Error)]
pub enum HttpHolidaySourceError {
    /// The configured endpoint is not a valid URL.
    #[error("invalid holiday calendar endpoint '{endpoint}': {source}")]
    InvalidEndpoint {
        /// Rejected endpoint value.
        endpoint: String,
        /// Parse failure.
        source: url::ParseError,
    },

    /// The HTTP client could not be built.
    #[error("failed to build holiday calendar client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Holiday source backed by a single unauthenticated GET request.
#[derive(Debug, Clone)]
pub struct HttpHolidaySource {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpHolidaySource {
    /// Creates a source for the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`HttpHolidaySourceError`] when the endpoint does not parse or
    /// the client cannot be initialised.
    pub fn new(config: &HttpHolidaySourceConfig) -> Result<Self, HttpHolidaySourceError> {
        let endpoint =
            Url::parse(&config.endpoint).map_err(|source| HttpHolidaySourceError::InvalidEndpoint {
                endpoint: config.endpoint.clone(),
                source,
            })?;
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, endpoint })
    }

    /// Returns the endpoint this source reads from.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn fetch_document(&self) -> Result<String, HolidayUnavailable> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|err| HolidayUnavailable::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(HolidayUnavailable::Status(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|err| HolidayUnavailable::Transport(err.to_string()))
    }
}

#[async_trait]
impl HolidaySource for HttpHolidaySource {
    async fn fetch(&self) -> HolidayLookup {
        tracing::info!(endpoint = %self.endpoint, "fetching holiday calendar");
        let lookup: HolidayLookup = self
            .fetch_document()
            .await
            .and_then(|body| HolidaySnapshot::from_json(&body))
            .into();

        if let HolidayLookup::Unavailable(reason) = &lookup {
            tracing::warn!(endpoint = %self.endpoint, %reason, "holiday calendar unavailable");
        }
        lookup
    }
}
