//! Guardian search response parser
//!
//! Walks `{"response": {"results": [...]}}` and turns each result object
//! into an [`Article`]. Each level is read key by key with a map visitor:
//! recognized keys are collected, every other key is consumed as
//! [`IgnoredAny`], so additive API changes never affect the output.
//!
//! Repeated keys follow document order. Every `response` and `results`
//! occurrence appends to the output, a repeated string field overwrites
//! the earlier value, and the author is the last tag `webTitle` seen
//! across all `tags` arrays of an article. A `null` string counts as
//! absent and never clears a value already collected.

use std::fmt;
use std::io::Read;
use std::path::Path;

use serde::de::{Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::Deserialize;

use crate::models::Article;
use crate::utils::error::ParseError;

/// Root envelope of a search response, with all `results` flattened
#[derive(Debug, Default)]
struct SearchEnvelope {
    results: Vec<RawArticle>,
}

/// Body of one `response` key
#[derive(Debug, Default)]
struct SearchResponse {
    results: Vec<RawArticle>,
}

/// One entry of `results`
#[derive(Debug, Default)]
struct RawArticle {
    section_name: Option<String>,
    web_publication_date: Option<String>,
    web_title: Option<String>,
    web_url: Option<String>,
    author: Option<String>,
}

/// One entry of an article's `tags`
#[derive(Debug, Default)]
struct RawTag {
    web_title: Option<String>,
}

/// Overwrite `slot` with the next string value unless it is `null`
fn overwrite_string<'de, A>(map: &mut A, slot: &mut Option<String>) -> Result<(), A::Error>
where
    A: MapAccess<'de>,
{
    if let Some(value) = map.next_value::<Option<String>>()? {
        *slot = Some(value);
    }
    Ok(())
}

/// Pick the author from a tag list: the last tag carrying a `webTitle` wins
fn last_tag_author(tags: Vec<RawTag>) -> Option<String> {
    tags.into_iter().filter_map(|tag| tag.web_title).last()
}

struct EnvelopeVisitor;

impl<'de> Visitor<'de> for EnvelopeVisitor {
    type Value = SearchEnvelope;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a search response object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut envelope = SearchEnvelope::default();
        while let Some(key) = map.next_key::<String>()? {
            if key == "response" {
                let response: SearchResponse = map.next_value()?;
                envelope.results.extend(response.results);
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(envelope)
    }
}

impl<'de> Deserialize<'de> for SearchEnvelope {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(EnvelopeVisitor)
    }
}

struct ResponseVisitor;

impl<'de> Visitor<'de> for ResponseVisitor {
    type Value = SearchResponse;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a `response` object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut response = SearchResponse::default();
        while let Some(key) = map.next_key::<String>()? {
            if key == "results" {
                let batch: Vec<RawArticle> = map.next_value()?;
                response.results.extend(batch);
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(response)
    }
}

impl<'de> Deserialize<'de> for SearchResponse {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ResponseVisitor)
    }
}

struct ArticleVisitor;

impl<'de> Visitor<'de> for ArticleVisitor {
    type Value = RawArticle;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an article object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut article = RawArticle::default();
        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "sectionName" => overwrite_string(&mut map, &mut article.section_name)?,
                "webPublicationDate" => {
                    overwrite_string(&mut map, &mut article.web_publication_date)?
                }
                "webTitle" => overwrite_string(&mut map, &mut article.web_title)?,
                "webUrl" => overwrite_string(&mut map, &mut article.web_url)?,
                "tags" => {
                    let tags: Vec<RawTag> = map.next_value()?;
                    if let Some(author) = last_tag_author(tags) {
                        article.author = Some(author);
                    }
                }
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(article)
    }
}

impl<'de> Deserialize<'de> for RawArticle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ArticleVisitor)
    }
}

struct TagVisitor;

impl<'de> Visitor<'de> for TagVisitor {
    type Value = RawTag;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a tag object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut tag = RawTag::default();
        while let Some(key) = map.next_key::<String>()? {
            if key == "webTitle" {
                overwrite_string(&mut map, &mut tag.web_title)?;
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(tag)
    }
}

impl<'de> Deserialize<'de> for RawTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TagVisitor)
    }
}

impl RawArticle {
    fn into_article(self, index: usize) -> Article {
        if self.web_title.is_none() || self.web_url.is_none() {
            tracing::warn!(
                index,
                has_title = self.web_title.is_some(),
                has_url = self.web_url.is_some(),
                "Result is missing a required field"
            );
        }

        Article::new(
            self.web_title.unwrap_or_default(),
            self.web_url.unwrap_or_default(),
        )
        .with_author(self.author)
        .with_section(self.section_name)
        .with_published_at(self.web_publication_date)
    }
}

/// Parse a search response body into articles, in `results` order
///
/// An empty or whitespace-only body yields no articles. Malformed JSON, or
/// a documented key holding the wrong type, aborts the whole extraction.
/// Repeated keys are accepted (see the module docs).
///
/// # Errors
///
/// Returns `ParseError::Malformed` for invalid JSON and
/// `ParseError::UnexpectedShape` when the documented structure is violated
pub fn parse_articles(body: &str) -> Result<Vec<Article>, ParseError> {
    let trimmed = body.trim_start();
    if trimmed.is_empty() {
        tracing::debug!("Empty response body");
        return Ok(Vec::new());
    }

    // serde accepts structs in sequence form; the root must be an object
    if !trimmed.starts_with('{') {
        // Surface a syntax error first if the body is not JSON at all
        serde_json::from_str::<IgnoredAny>(trimmed)?;
        return Err(ParseError::UnexpectedShape {
            message: "response root is not a JSON object".to_string(),
        });
    }

    let envelope: SearchEnvelope = serde_json::from_str(trimmed)?;

    let articles: Vec<Article> = envelope
        .results
        .into_iter()
        .enumerate()
        .map(|(index, raw)| raw.into_article(index))
        .collect();

    tracing::debug!(count = articles.len(), "Parsed search response");
    Ok(articles)
}

/// Parse a response read from `reader`
///
/// The reader is consumed and dropped before returning, on success and on
/// failure alike.
///
/// # Errors
///
/// Returns `ParseError::Io` if reading fails, otherwise as [`parse_articles`]
pub fn parse_reader<R: Read>(mut reader: R) -> Result<Vec<Article>, ParseError> {
    let mut body = String::new();
    reader.read_to_string(&mut body)?;
    drop(reader);
    parse_articles(&body)
}

/// Parse a saved response body from disk
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be opened or read
pub fn parse_file(path: &Path) -> Result<Vec<Article>, ParseError> {
    let file = std::fs::File::open(path)?;
    parse_reader(std::io::BufReader::new(file))
}
