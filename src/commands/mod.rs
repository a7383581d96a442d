pub mod fetch;
pub mod parse;
pub mod settings;

// Re-export command functions for convenience
pub use fetch::fetch;
pub use parse::parse;
pub use settings::settings;

use anyhow::{Context, Result};
use std::path::Path;

use newsdesk::config::Config;
use newsdesk::models::Article;

/// Load configuration: file (or defaults), then environment overrides
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let mut config = match path {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    config.apply_env();
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// Print articles as a numbered list, or as JSON
pub fn print_articles(articles: &[Article], json: bool) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(articles).context("Failed to serialize articles")?;
        println!("{out}");
        return Ok(());
    }

    for (i, article) in articles.iter().enumerate() {
        println!("{:>2}. {}", i + 1, article.list_item());
    }
    Ok(())
}
