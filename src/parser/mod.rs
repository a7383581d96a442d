//! Search response parsing
//!
//! This module turns raw search API bodies into [`Article`](crate::models::Article)
//! records.

pub mod response;

pub use response::{parse_articles, parse_file, parse_reader};
