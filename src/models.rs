// Core data structures for the newsdesk client

use chrono::{Local, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Wire format of `webPublicationDate` (always UTC)
pub const PUBLICATION_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Display format for list timestamps
pub const DISPLAY_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Separator some sources use to embed the author in the title
pub const TITLE_AUTHOR_SEPARATOR: &str = " | ";

/// One news article from a search response
///
/// Records are immutable once built: the parser is the only producer and
/// the list is replaced wholesale on every fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    title: String,
    author_name: Option<String>,
    section_name: Option<String>,
    published_at: Option<String>,
    url: String,
}

impl Article {
    /// Create an article with the two required fields
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author_name: None,
            section_name: None,
            published_at: None,
            url: url.into(),
        }
    }

    #[must_use]
    pub fn with_author(mut self, author_name: Option<String>) -> Self {
        self.author_name = author_name;
        self
    }

    #[must_use]
    pub fn with_section(mut self, section_name: Option<String>) -> Self {
        self.section_name = section_name;
        self
    }

    #[must_use]
    pub fn with_published_at(mut self, published_at: Option<String>) -> Self {
        self.published_at = published_at;
        self
    }

    /// Full title, possibly carrying an author after `" | "`
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Author taken from the contributor tags
    pub fn author_name(&self) -> Option<&str> {
        self.author_name.as_deref()
    }

    pub fn section_name(&self) -> Option<&str> {
        self.section_name.as_deref()
    }

    /// Raw publication timestamp (`YYYY-MM-DDThh:mm:ssZ`)
    pub fn published_at(&self) -> Option<&str> {
        self.published_at.as_deref()
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Publication time in the local zone, `YYYY-MM-DD hh:mm`
    ///
    /// Falls back to the raw value when it does not match the wire format.
    pub fn display_timestamp(&self) -> Option<String> {
        self.published_at.as_deref().map(format_timestamp_local)
    }

    /// Build the presentation view used by the article list
    pub fn list_item(&self) -> ListItem {
        let (headline, embedded_author) = split_title(&self.title);

        let byline = self
            .author_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .or(embedded_author)
            .map(str::to_string);

        ListItem {
            headline: headline.to_string(),
            byline,
            section: self.section_name.clone(),
            published: self.display_timestamp(),
            url: self.url.clone(),
        }
    }
}

/// Presentation view of one article row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    /// Title text before the author separator
    pub headline: String,

    /// Tag author, or the author embedded in the title
    pub byline: Option<String>,

    pub section: Option<String>,

    /// Normalized local timestamp
    pub published: Option<String>,

    /// Click-through target
    pub url: String,
}

impl std::fmt::Display for ListItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.headline)?;
        if let Some(byline) = &self.byline {
            write!(f, "\n    by {byline}")?;
        }

        let meta: Vec<&str> = [self.section.as_deref(), self.published.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        if !meta.is_empty() {
            write!(f, "\n    {}", meta.join(" · "))?;
        }

        write!(f, "\n    {}", self.url)
    }
}

/// Split a title on the first `" | "`
///
/// Returns the headline and the non-empty text after the separator, if any.
pub fn split_title(title: &str) -> (&str, Option<&str>) {
    match title.split_once(TITLE_AUTHOR_SEPARATOR) {
        Some((headline, author)) if !author.is_empty() => (headline, Some(author)),
        Some((headline, _)) => (headline, None),
        None => (title, None),
    }
}

/// Convert a wire timestamp to `YYYY-MM-DD hh:mm` in the given zone
///
/// A value that does not match [`PUBLICATION_DATE_FORMAT`] is returned
/// unchanged.
pub fn format_timestamp_in<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match NaiveDateTime::parse_from_str(raw, PUBLICATION_DATE_FORMAT) {
        Ok(naive) => Utc
            .from_utc_datetime(&naive)
            .with_timezone(tz)
            .format(DISPLAY_DATE_FORMAT)
            .to_string(),
        Err(e) => {
            tracing::debug!(raw, error = %e, "Unparseable publication date, showing raw value");
            raw.to_string()
        }
    }
}

/// Convert a wire timestamp to the local zone
pub fn format_timestamp_local(raw: &str) -> String {
    format_timestamp_in(raw, &Local)
}
