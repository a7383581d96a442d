//! Error types for the newsdesk client
//!
//! This module defines the domain error types used by the HTTP client
//! and the response parser.

use thiserror::Error;

/// Errors that can occur while fetching a search response
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request error
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-200 status
    #[error("Unexpected response status: {0}")]
    Status(u16),

    /// Request timeout
    #[error("Request timeout")]
    Timeout,

    /// Could not reach the server
    #[error("Connection failed: {0}")]
    Connect(String),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl FetchError {
    /// Classify a transport error from reqwest
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::Connect(err.to_string())
        } else {
            Self::Http(err)
        }
    }

    /// Check if a manual refresh might succeed
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Http(_) | Self::Timeout | Self::Connect(_) => true,
            Self::Status(code) => matches!(code, 429 | 500 | 502 | 503 | 504),
            Self::InvalidUrl(_) => false,
        }
    }
}

/// Errors that can occur while parsing a search response body
#[derive(Error, Debug)]
pub enum ParseError {
    /// Body is not well-formed JSON (syntax error, truncation, trailing data)
    #[error("Malformed JSON at line {line}, column {column}: {message}")]
    Malformed {
        line: usize,
        column: usize,
        message: String,
    },

    /// Body is JSON but a documented key has the wrong type
    #[error("Unexpected response shape: {message}")]
    UnexpectedShape { message: String },

    /// Reading the body failed
    #[error("Failed to read response body: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        use serde_json::error::Category;

        match err.classify() {
            Category::Data => Self::UnexpectedShape {
                message: err.to_string(),
            },
            Category::Io => Self::Io(err.into()),
            Category::Syntax | Category::Eof => Self::Malformed {
                line: err.line(),
                column: err.column(),
                message: err.to_string(),
            },
        }
    }
}
