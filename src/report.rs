//! CSV report writer.
//!
//! Serializes collected rows into a comma-delimited file with a fixed
//! five-column header. The header is written even when there are no rows.
//! The destination is created with truncation; there is no atomic rename,
//! so a crash mid-write can leave a partial file behind.

use crate::error::Result;
use crate::pubmed::PaperSummary;
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// Fixed column header for the report
pub const REPORT_HEADER: &[&str] = &[
    "PubmedID",
    "Title",
    "Publication Date",
    "Non-academic Author(s)",
    "Company Affiliation(s)",
];

/// One output row of the report
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ReportRow {
    pub pubmed_id: String,
    pub title: String,
    pub pub_date: String,
    /// Declared in the header but not populated by the current pipeline
    pub non_academic_authors: String,
    /// Declared in the header but not populated by the current pipeline
    pub company_affiliations: String,
}

impl From<&PaperSummary> for ReportRow {
    fn from(summary: &PaperSummary) -> Self {
        Self {
            pubmed_id: summary.pubmed_id.clone(),
            title: summary.title.clone(),
            pub_date: summary.pub_date.clone(),
            non_academic_authors: String::new(),
            company_affiliations: String::new(),
        }
    }
}

/// Write rows to `path` as CSV with the fixed header.
///
/// Truncates any existing file. The writer is flushed before returning so
/// the handle is released on every exit path.
pub fn write_report(path: &Path, rows: &[ReportRow]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    wtr.write_record(REPORT_HEADER)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;

    info!(path = %path.display(), rows = rows.len(), "Report written");
    Ok(())
}
