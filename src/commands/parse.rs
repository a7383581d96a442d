use anyhow::{Context, Result};
use std::path::Path;

use newsdesk::parser;

pub fn parse(input: &Path, json: bool) -> Result<()> {
    let articles = parser::parse_file(input)
        .with_context(|| format!("Failed to parse response file: {}", input.display()))?;

    tracing::info!(count = articles.len(), "Parsed response file");

    if articles.is_empty() && !json {
        println!("No articles in {}", input.display());
        return Ok(());
    }

    super::print_articles(&articles, json)
}
