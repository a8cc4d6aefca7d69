//! pubfetch - PubMed paper fetcher
//!
//! Searches PubMed for papers matching a query, fetches per-paper summary
//! metadata, and writes a five-column CSV report.
//!
//! ## Usage
//!
//! ```bash
//! pubfetch "cancer immunotherapy" --file results.csv
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use pubfetch::{pubmed, report};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::{fmt, EnvFilter};

// ============================================================================
// CLI Definition
// ============================================================================

/// Fetch research papers from PubMed
#[derive(Parser)]
#[command(name = "pubfetch")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Search query for PubMed
    query: String,

    /// Filename to save results
    #[arg(short, long, default_value = "results.csv")]
    file: PathBuf,

    /// Enable debug mode (prints raw API responses)
    #[arg(short, long)]
    debug: bool,
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.debug { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_string()));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .init();

    run(cli).await
}

// ============================================================================
// Pipeline
// ============================================================================

/// Search, fetch summaries sequentially, write the report.
///
/// One attempt per request: the first network, parse, or file-system failure
/// aborts the run and no partial CSV is written.
async fn run(cli: Cli) -> Result<()> {
    if cli.query.trim().is_empty() {
        anyhow::bail!("Search query must not be empty");
    }

    let client = reqwest::Client::new();

    let ids = pubmed::search_ids(&client, &cli.query, cli.debug)
        .await
        .context("PubMed search failed")?;

    let mut rows = Vec::with_capacity(ids.len());
    for pubmed_id in &ids {
        info!(pubmed_id = %pubmed_id, "Fetching summary");
        let summary = pubmed::fetch_summary(&client, pubmed_id, cli.debug)
            .await
            .with_context(|| format!("Failed to fetch summary for {}", pubmed_id))?;
        rows.push(report::ReportRow::from(&summary));
    }

    report::write_report(&cli.file, &rows)
        .with_context(|| format!("Failed to write {}", cli.file.display()))?;

    println!("Results saved to {}", cli.file.display());
    Ok(())
}
