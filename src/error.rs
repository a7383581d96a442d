//! Unified error handling for the newsdesk crate
//!
//! This module consolidates the domain-specific errors into a single
//! `Error` enum, while keeping the domain errors usable on their own.
//!
//! # Architecture
//!
//! - [`NewsErrorTrait`] - Common interface implemented by all error types
//! - [`ErrorCategory`] - Classification of errors for handling strategies
//! - [`Error`] - Unified error enum wrapping the fetch and parse errors
//!
//! # Usage
//!
//! ```rust,ignore
//! use newsdesk::error::{Error, NewsErrorTrait};
//!
//! fn report(err: Error) {
//!     if err.is_recoverable() {
//!         println!("{} (try refreshing)", err.user_message());
//!     } else {
//!         eprintln!("Fatal error: {}", err);
//!     }
//! }
//! ```

use thiserror::Error;

pub use crate::utils::error::{FetchError, ParseError};

/// Status text shown when the network cannot be reached
pub const NO_NETWORK_MESSAGE: &str = "No network connection";

/// Status text shown when a response holds no usable articles
pub const NO_NEWS_MESSAGE: &str = "No recent news found";

/// Status text shown while a fetch is in flight
pub const LOADING_MESSAGE: &str = "Communicating with the journalists. Please wait...";

/// Common trait for all newsdesk error types
pub trait NewsErrorTrait: std::error::Error {
    /// Check if this error may go away on a manual refresh
    fn is_recoverable(&self) -> bool;

    /// Short message suitable for the list's empty view
    fn user_message(&self) -> String;

    /// Get the error category for handling strategies
    fn category(&self) -> ErrorCategory;
}

/// Classification of errors for handling strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Connectivity, timeout, non-200 status
    Network,
    /// Malformed or unexpected response bodies
    Parsing,
}

impl ErrorCategory {
    /// Human-readable name of the category
    pub fn description(&self) -> &'static str {
        match self {
            Self::Network => "network error",
            Self::Parsing => "parse error",
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

impl NewsErrorTrait for FetchError {
    fn is_recoverable(&self) -> bool {
        self.is_transient()
    }

    fn user_message(&self) -> String {
        NO_NETWORK_MESSAGE.to_string()
    }

    fn category(&self) -> ErrorCategory {
        ErrorCategory::Network
    }
}

impl NewsErrorTrait for ParseError {
    fn is_recoverable(&self) -> bool {
        matches!(self, Self::Io(_))
    }

    fn user_message(&self) -> String {
        NO_NEWS_MESSAGE.to_string()
    }

    fn category(&self) -> ErrorCategory {
        ErrorCategory::Parsing
    }
}

/// Unified error type for a failed load
#[derive(Error, Debug)]
pub enum Error {
    /// Fetch-specific errors
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Parse-specific errors
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

impl NewsErrorTrait for Error {
    fn is_recoverable(&self) -> bool {
        match self {
            Self::Fetch(e) => NewsErrorTrait::is_recoverable(e),
            Self::Parse(e) => NewsErrorTrait::is_recoverable(e),
        }
    }

    fn user_message(&self) -> String {
        match self {
            Self::Fetch(e) => e.user_message(),
            Self::Parse(e) => e.user_message(),
        }
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::Fetch(e) => e.category(),
            Self::Parse(e) => e.category(),
        }
    }
}
