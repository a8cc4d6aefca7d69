//! # pubfetch
//!
//! PubMed paper fetcher with non-academic affiliation reporting.
//!
//! ## Modules
//!
//! - [`pubmed`] - PubMed E-utilities client (esearch + esummary)
//! - [`classifier`] - Non-academic affiliation keyword classifier
//! - [`report`] - CSV report writer
//! - [`error`] - Custom error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pubfetch::pubmed;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = reqwest::Client::new();
//!     let ids = pubmed::search_ids(&client, "cancer", false).await?;
//!     println!("Found {} papers", ids.len());
//!     Ok(())
//! }
//! ```

pub mod classifier;
pub mod error;
pub mod pubmed;
pub mod report;

pub use error::{PubfetchError, Result};
