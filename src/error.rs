//! Custom error types for pubfetch.
//!
//! This module defines all error types used throughout the application.
//! Library functions return `Result<T, PubfetchError>` instead of using `unwrap()`.

use thiserror::Error;

/// Main error type for pubfetch operations.
///
/// Uses `thiserror` for ergonomic error handling and automatic `Display` implementation.
#[derive(Debug, Error)]
pub enum PubfetchError {
    /// Network/HTTP request error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// External API returned an error status
    #[error("API error: {code} - {message}")]
    Api {
        /// HTTP status code from the API
        code: i32,
        /// Error message from API
        message: String,
    },

    /// JSON response parsing error
    #[error("Parse error: {0}")]
    Parse(String),

    /// CSV serialization error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using `PubfetchError`
pub type Result<T> = std::result::Result<T, PubfetchError>;
