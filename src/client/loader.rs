//! Fetch orchestration
//!
//! [`NewsLoader`] runs one search at a time, parses the body, and maps
//! every outcome to a list state plus the message the list shows when it
//! is empty. Failures never escape as errors: a network problem or a bad
//! body degrades to an empty list, and loading again is the only retry.

use tokio::sync::Mutex;

use crate::client::{NewsClient, SearchQuery};
use crate::config::{ApiConfig, Config, Preferences};
use crate::error::{Error, ErrorCategory, NewsErrorTrait, NO_NEWS_MESSAGE};
use crate::models::Article;
use crate::parser;
use crate::utils::error::FetchError;

/// Result of one load cycle
#[derive(Debug)]
pub enum LoadOutcome {
    /// Articles in response order
    Loaded(Vec<Article>),

    /// The search succeeded but returned nothing
    Empty,

    /// Fetch or parse failed; the list stays empty
    Failed(Error),
}

impl LoadOutcome {
    /// Articles to show (empty unless loaded)
    pub fn articles(&self) -> &[Article] {
        match self {
            Self::Loaded(articles) => articles,
            Self::Empty | Self::Failed(_) => &[],
        }
    }

    /// Take ownership of the loaded articles
    pub fn into_articles(self) -> Vec<Article> {
        match self {
            Self::Loaded(articles) => articles,
            Self::Empty | Self::Failed(_) => Vec::new(),
        }
    }

    /// Text for the list's empty view, if the list is empty
    pub fn status_message(&self) -> Option<String> {
        match self {
            Self::Loaded(_) => None,
            Self::Empty => Some(NO_NEWS_MESSAGE.to_string()),
            Self::Failed(err) => Some(err.user_message()),
        }
    }

    /// Category of the failure, if any
    pub fn failure_category(&self) -> Option<ErrorCategory> {
        match self {
            Self::Failed(err) => Some(err.category()),
            _ => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}

/// Fetch orchestrator with at most one request in flight
pub struct NewsLoader {
    client: NewsClient,
    api: ApiConfig,
    in_flight: Mutex<()>,
}

impl NewsLoader {
    /// Create a loader from configuration
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Http` if the HTTP client cannot be created
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        Ok(Self::with_client(NewsClient::new(config)?, config.api.clone()))
    }

    /// Create a loader around an existing client
    pub fn with_client(client: NewsClient, api: ApiConfig) -> Self {
        Self {
            client,
            api,
            in_flight: Mutex::new(()),
        }
    }

    /// Run one fetch cycle and report the list state
    ///
    /// Concurrent callers are serialized; each gets its own fresh result.
    pub async fn load(&self, preferences: &Preferences) -> LoadOutcome {
        match self.try_load(preferences).await {
            Ok(articles) if articles.is_empty() => {
                tracing::info!(topic = %preferences.topic, "Search returned no articles");
                LoadOutcome::Empty
            }
            Ok(articles) => {
                tracing::info!(
                    topic = %preferences.topic,
                    count = articles.len(),
                    "Loaded articles"
                );
                LoadOutcome::Loaded(articles)
            }
            Err(err) => {
                tracing::warn!(
                    topic = %preferences.topic,
                    category = %err.category(),
                    error = %err,
                    "Load failed, showing empty list"
                );
                LoadOutcome::Failed(err)
            }
        }
    }

    /// Fetch and parse, propagating the first failure
    ///
    /// # Errors
    ///
    /// Returns `Error::Fetch` for network failures and `Error::Parse` for
    /// unusable bodies; no partial list is returned
    pub async fn try_load(&self, preferences: &Preferences) -> Result<Vec<Article>, Error> {
        let _guard = self.in_flight.lock().await;

        let url = SearchQuery::new(&self.api, preferences).to_url()?;
        let body = self.client.fetch_body(&url).await?;
        let articles = parser::parse_articles(&body)?;

        Ok(articles)
    }
}
