use anyhow::Result;

use newsdesk::client::query::{redact_api_key, SearchQuery};
use newsdesk::config::Config;

pub fn settings(config: &Config) -> Result<()> {
    let query = SearchQuery::new(&config.api, &config.preferences);
    let url = query.to_url()?;

    println!("Preferences");
    println!("-----------");
    println!("  Topic:    {}", config.preferences.topic);
    println!("  Order by: {}", config.preferences.order_by);
    println!();
    println!("Request");
    println!("-------");
    println!("  Search:    {}", query.search_term());
    println!("  Page size: {}", query.page_size);
    println!("  From date: {}", query.from_date);
    println!(
        "  Timeouts:  connect {}s, request {}s",
        config.http.connect_timeout_secs, config.http.request_timeout_secs
    );
    println!("  URL:       {}", redact_api_key(&url));
    Ok(())
}
