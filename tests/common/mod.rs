//! Common test utilities

use newsdesk::models::Article;
use serde_json::{json, Value};

/// Directory holding saved response bodies
pub const FIXTURES_DIR: &str = "tests/fixtures";

/// Load a fixture file as text
#[allow(dead_code)]
pub fn load_fixture(filename: &str) -> String {
    let path = format!("{FIXTURES_DIR}/{filename}");
    std::fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to load fixture: {path}"))
}

/// Known-good articles covering every optional-field combination
#[allow(dead_code)]
pub fn fixture_articles() -> Vec<Article> {
    vec![
        Article::new(
            "Android P beta: hands-on",
            "https://www.theguardian.com/technology/android-p",
        )
        .with_author(Some("Samuel Gibbs".to_string()))
        .with_section(Some("Technology".to_string()))
        .with_published_at(Some("2018-05-27T08:00:20Z".to_string())),
        Article::new(
            "Why phones got boring | Alex Hern",
            "https://www.theguardian.com/commentisfree/phones",
        )
        .with_section(Some("Opinion".to_string()))
        .with_published_at(Some("2018-05-26T21:15:00Z".to_string())),
        Article::new("Untimed brief", "https://www.theguardian.com/brief")
            .with_author(Some("Guardian staff".to_string())),
        Article::new("Bare minimum", "https://www.theguardian.com/bare"),
    ]
}

/// Encode an article the way the search API would
#[allow(dead_code)]
pub fn article_json(article: &Article) -> Value {
    let mut obj = json!({
        "webTitle": article.title(),
        "webUrl": article.url(),
    });
    let map = obj.as_object_mut().unwrap();
    if let Some(section) = article.section_name() {
        map.insert("sectionName".to_string(), json!(section));
    }
    if let Some(date) = article.published_at() {
        map.insert("webPublicationDate".to_string(), json!(date));
    }
    if let Some(author) = article.author_name() {
        map.insert(
            "tags".to_string(),
            json!([{ "type": "contributor", "webTitle": author }]),
        );
    }
    obj
}

/// Wrap result objects in the search response envelope
#[allow(dead_code)]
pub fn search_payload(results: Vec<Value>) -> String {
    json!({
        "response": {
            "status": "ok",
            "total": results.len(),
            "results": results,
        }
    })
    .to_string()
}
