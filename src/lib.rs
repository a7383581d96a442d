//! newsdesk - Guardian news search client
//!
//! Queries the Guardian content search API, parses the JSON response into
//! a short list of articles, and renders them for a list view.
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - [`models`] - Article records, list items, timestamp normalization
//! - [`parser`] - Search response parsing
//! - [`client`] - Request building, HTTP fetch, and load orchestration
//! - [`config`] - Configuration and user preferences
//! - [`error`] - Unified error handling
//! - [`utils`] - Domain error types
//!
//! # Example
//!
//! ```no_run
//! use newsdesk::client::NewsLoader;
//! use newsdesk::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let loader = NewsLoader::new(&config)?;
//!     let outcome = loader.load(&config.preferences).await;
//!     for article in outcome.articles() {
//!         println!("{}", article.list_item());
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod parser;
pub mod utils;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::client::{LoadOutcome, NewsClient, NewsLoader, SearchQuery};
    pub use crate::config::{Config, OrderBy, Preferences};
    pub use crate::error::{Error, ErrorCategory, NewsErrorTrait};
    pub use crate::models::{Article, ListItem};
    pub use crate::parser::parse_articles;
}

// Direct re-exports for convenience
pub use models::{Article, ListItem};
