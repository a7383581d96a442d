//! HTTP access to the search API
//!
//! This module issues the search request, and the [`loader`] submodule
//! turns a request into a list state for the front end.

pub mod loader;
pub mod query;

pub use loader::{LoadOutcome, NewsLoader};
pub use query::SearchQuery;

use reqwest::{Client, StatusCode};
use std::time::Duration;
use url::Url;

use crate::config::Config;
use crate::utils::error::FetchError;

/// Thin wrapper over a configured reqwest client
///
/// One GET per call, no retry: a failed fetch is recovered by the caller
/// loading again.
#[derive(Debug, Clone)]
pub struct NewsClient {
    /// HTTP client with configured timeouts and compression
    client: Client,
}

impl NewsClient {
    /// Create a client from configuration
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Http` if the HTTP client cannot be created
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        Self::with_timeouts(
            config.connect_timeout(),
            config.request_timeout(),
            &config.http.user_agent,
        )
    }

    /// Create a client with explicit timeouts
    ///
    /// # Arguments
    ///
    /// * `connect_timeout` - Time allowed to establish the connection
    /// * `request_timeout` - Time allowed for the whole request
    /// * `user_agent` - User-Agent header value
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Http` if the HTTP client cannot be created
    pub fn with_timeouts(
        connect_timeout: Duration,
        request_timeout: Duration,
        user_agent: &str,
    ) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .gzip(true)
            .build()?;

        Ok(Self { client })
    }

    /// Fetch a response body as text
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Status` for any status other than 200,
    /// `FetchError::Timeout` or `FetchError::Connect` for transport
    /// failures, and `FetchError::Http` otherwise
    pub async fn fetch_body(&self, url: &Url) -> Result<String, FetchError> {
        tracing::debug!(url = %query::redact_api_key(url), "Fetching search results");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(FetchError::from_transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(status = status.as_u16(), "Search request failed");
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(FetchError::from_transport)?;

        tracing::debug!(bytes = body.len(), "Received search response");
        Ok(body)
    }
}
