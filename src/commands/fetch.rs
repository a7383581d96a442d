use anyhow::{Context, Result};

use newsdesk::client::{LoadOutcome, NewsLoader};
use newsdesk::config::{Config, OrderBy};
use newsdesk::error::LOADING_MESSAGE;

pub async fn fetch(
    config: Config,
    topic: Option<String>,
    order_by: Option<String>,
    json: bool,
) -> Result<()> {
    let mut preferences = config.preferences.clone();
    if let Some(topic) = topic {
        preferences.topic = topic;
    }
    if let Some(order_by) = order_by {
        preferences.order_by = order_by.parse::<OrderBy>()?;
    }

    let loader = NewsLoader::new(&config).context("Failed to create HTTP client")?;

    if !json {
        eprintln!("{LOADING_MESSAGE}");
    }

    // Run the request off the main task, like a background loader
    let outcome = tokio::spawn(async move { loader.load(&preferences).await })
        .await
        .context("Fetch task panicked")?;

    match &outcome {
        LoadOutcome::Loaded(articles) => super::print_articles(articles, json)?,
        LoadOutcome::Empty | LoadOutcome::Failed(_) => {
            if json {
                println!("[]");
            }
            if let Some(message) = outcome.status_message() {
                eprintln!("{message}");
            }
        }
    }

    Ok(())
}
