//! Search request URL construction
//!
//! The query combines the static API settings with the user's topic and
//! sort order preferences.

use url::Url;

use crate::config::{ApiConfig, OrderBy, Preferences};
use crate::utils::error::FetchError;

/// Name of the query parameter carrying the API key
pub const API_KEY_PARAM: &str = "api-key";

/// Parameters of one search request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub endpoint: String,
    pub query_prefix: String,
    pub topic: String,
    pub order_by: OrderBy,
    pub show_tags: String,
    pub page_size: u32,
    pub from_date: String,
    pub api_key: String,
}

impl SearchQuery {
    /// Combine API settings and user preferences
    pub fn new(api: &ApiConfig, preferences: &Preferences) -> Self {
        Self {
            endpoint: api.endpoint.clone(),
            query_prefix: api.query_prefix.clone(),
            topic: preferences.topic.clone(),
            order_by: preferences.order_by,
            show_tags: api.show_tags.clone(),
            page_size: api.page_size,
            from_date: api.from_date.clone(),
            api_key: api.api_key.clone(),
        }
    }

    /// Search term: `"{prefix} AND {topic}"`, or the bare topic
    pub fn search_term(&self) -> String {
        let prefix = self.query_prefix.trim();
        let topic = self.topic.trim();
        if prefix.is_empty() {
            topic.to_string()
        } else {
            format!("{prefix} AND {topic}")
        }
    }

    /// Build the full request URL
    ///
    /// # Errors
    ///
    /// Returns `FetchError::InvalidUrl` if the endpoint cannot be parsed
    pub fn to_url(&self) -> Result<Url, FetchError> {
        let mut url = Url::parse(&self.endpoint)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {e}", self.endpoint)))?;

        url.query_pairs_mut()
            .append_pair("q", &self.search_term())
            .append_pair("order-by", self.order_by.as_str())
            .append_pair("show-tags", &self.show_tags)
            .append_pair("page-size", &self.page_size.to_string())
            .append_pair("from-date", &self.from_date)
            .append_pair(API_KEY_PARAM, &self.api_key);

        Ok(url)
    }
}

/// Render a URL with its API key masked, for logs and display
pub fn redact_api_key(url: &Url) -> String {
    if !url.query_pairs().any(|(key, _)| key == API_KEY_PARAM) {
        return url.to_string();
    }

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(key, value)| {
            let value = if key == API_KEY_PARAM {
                "***".to_string()
            } else {
                value.into_owned()
            };
            (key.into_owned(), value)
        })
        .collect();

    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}
