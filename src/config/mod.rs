//! Configuration management for newsdesk
//!
//! This module handles loading and validating configuration from environment
//! variables and TOML files. User preferences (topic, sort order) live in the
//! `preferences` section and are only ever read.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// Default search endpoint
pub const DEFAULT_ENDPOINT: &str = "https://content.guardianapis.com/search";

/// Largest page the client asks for
pub const MAX_PAGE_SIZE: u32 = 50;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Search API settings
    pub api: ApiConfig,

    /// HTTP client settings
    pub http: HttpConfig,

    /// User preferences
    pub preferences: Preferences,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Search API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Search endpoint URL
    pub endpoint: String,

    /// Static API key
    pub api_key: String,

    /// Term every query is anchored to (`"{prefix} AND {topic}"`)
    pub query_prefix: String,

    /// Tag types to include with each result
    pub show_tags: String,

    /// Number of results requested
    pub page_size: u32,

    /// Earliest publication date, `YYYY-MM-DD`
    pub from_date: String,
}

/// HTTP client settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,

    /// Total request timeout in seconds
    pub request_timeout_secs: u64,

    /// User agent string
    pub user_agent: String,
}

/// User preferences read by the loader
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Result ordering
    pub order_by: OrderBy,

    /// Topic keyword
    pub topic: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (text, json)
    pub format: String,
}

/// Result ordering accepted by the search API
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderBy {
    #[default]
    Newest,
    Oldest,
    Relevance,
}

impl OrderBy {
    /// Query parameter value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::Relevance => "relevance",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![Self::Newest, Self::Oldest, Self::Relevance]
    }
}

impl FromStr for OrderBy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "newest" => Ok(Self::Newest),
            "oldest" => Ok(Self::Oldest),
            "relevance" => Ok(Self::Relevance),
            other => anyhow::bail!("unknown sort order: {other} (expected newest, oldest or relevance)"),
        }
    }
}

impl std::fmt::Display for OrderBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: String::from(DEFAULT_ENDPOINT),
            api_key: String::from("test"),
            query_prefix: String::from("technology"),
            show_tags: String::from("contributor"),
            page_size: 20,
            from_date: String::from("2018-01-01"),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            request_timeout_secs: 10,
            user_agent: format!("newsdesk/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            order_by: OrderBy::default(),
            topic: String::from("android"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::from("info"),
            format: String::from("text"),
        }
    }
}

impl LoggingConfig {
    /// `EnvFilter` directive for the crate's own events
    ///
    /// `verbose` forces debug output regardless of the configured level.
    pub fn filter_directive(&self, verbose: bool) -> String {
        if verbose {
            String::from("newsdesk=debug,info")
        } else {
            format!("newsdesk={},warn", self.level.trim().to_lowercase())
        }
    }

    /// Whether events are written as JSON lines
    pub fn is_json(&self) -> bool {
        self.format.trim().eq_ignore_ascii_case("json")
    }
}

fn env_parse<T: FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(variable = key, value = %raw, "Ignoring invalid environment value");
            None
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables keep their default values. Unparseable ones do too,
    /// after a warning naming the variable.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env();
        Ok(config)
    }

    /// Overlay environment variables on top of the current values
    pub fn apply_env(&mut self) {
        if let Ok(endpoint) = std::env::var("NEWSDESK_API_ENDPOINT") {
            self.api.endpoint = endpoint;
        }
        if let Ok(api_key) = std::env::var("NEWSDESK_API_KEY") {
            self.api.api_key = api_key;
        }
        if let Some(page_size) = env_parse::<u32>("NEWSDESK_PAGE_SIZE") {
            self.api.page_size = page_size;
        }
        if let Ok(from_date) = std::env::var("NEWSDESK_FROM_DATE") {
            self.api.from_date = from_date;
        }
        if let Some(secs) = env_parse::<u64>("NEWSDESK_CONNECT_TIMEOUT") {
            self.http.connect_timeout_secs = secs;
        }
        if let Some(secs) = env_parse::<u64>("NEWSDESK_REQUEST_TIMEOUT") {
            self.http.request_timeout_secs = secs;
        }
        if let Some(order_by) = env_parse::<OrderBy>("NEWSDESK_ORDER_BY") {
            self.preferences.order_by = order_by;
        }
        if let Ok(topic) = std::env::var("NEWSDESK_TOPIC") {
            self.preferences.topic = topic;
        }
        if let Ok(level) = std::env::var("NEWSDESK_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("NEWSDESK_LOG_FORMAT") {
            self.logging.format = format;
        }
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.api.endpoint.trim().is_empty() {
            anyhow::bail!("api.endpoint must not be empty");
        }

        if self.api.api_key.trim().is_empty() {
            anyhow::bail!("api.api_key must not be empty");
        }

        if self.api.page_size == 0 || self.api.page_size > MAX_PAGE_SIZE {
            anyhow::bail!("api.page_size must be between 1 and {MAX_PAGE_SIZE}");
        }

        chrono::NaiveDate::parse_from_str(&self.api.from_date, "%Y-%m-%d")
            .with_context(|| format!("api.from_date is not YYYY-MM-DD: {}", self.api.from_date))?;

        if self.http.connect_timeout_secs == 0 || self.http.request_timeout_secs == 0 {
            anyhow::bail!("http timeouts must be greater than 0");
        }

        if self.preferences.topic.trim().is_empty() {
            anyhow::bail!("preferences.topic must not be empty");
        }

        self.logging
            .level
            .trim()
            .parse::<tracing::Level>()
            .map_err(|_| anyhow::anyhow!("logging.level is not a log level: {}", self.logging.level))?;

        if !matches!(self.logging.format.trim().to_lowercase().as_str(), "text" | "json") {
            anyhow::bail!("logging.format must be text or json: {}", self.logging.format);
        }

        Ok(())
    }

    /// Get connect timeout as Duration
    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.http.connect_timeout_secs)
    }

    /// Get request timeout as Duration
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.http.request_timeout_secs)
    }
}
