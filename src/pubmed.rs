//! PubMed E-utilities API client.
//!
//! Provides paper search via the `esearch` endpoint and per-id metadata
//! lookup via the `esummary` endpoint, both with `retmode=json`.
//!
//! API details (per NCBI E-utilities docs):
//! - esearch returns ids at `esearchresult.idlist`
//! - esummary keys each record by its own id under `result`
//! - no authentication required; default retmax applies (no pagination here)
//!
//! One attempt per request, no retry and no client timeout. The search term
//! and ids are interpolated into the URL as-is; reserved URL characters in a
//! term can produce a malformed request.

use crate::error::{PubfetchError, Result};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, info};

/// E-utilities search endpoint
const ESEARCH_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esearch.fcgi";

/// E-utilities summary endpoint
const ESUMMARY_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esummary.fcgi";

/// Placeholder for fields absent from an esummary record
pub const PLACEHOLDER: &str = "N/A";

/// Summary metadata for a single PubMed record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaperSummary {
    /// PubMed id the record was fetched for
    pub pubmed_id: String,
    /// Article title, or [`PLACEHOLDER`] if absent
    pub title: String,
    /// Publication date string as reported by PubMed, or [`PLACEHOLDER`]
    pub pub_date: String,
    /// Author display strings (esummary carries no separate affiliation text)
    pub authors: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct EsearchResponse {
    esearchresult: Option<EsearchResult>,
}

#[derive(Debug, Deserialize)]
struct EsearchResult {
    #[serde(default)]
    idlist: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct EsummaryResponse {
    result: Option<HashMap<String, Value>>,
}

/// Search PubMed for records matching `term`.
///
/// Returns the id list in API order; an esearch response without the id-list
/// field yields an empty Vec. When `debug` is set, the raw response body is
/// printed to stdout before parsing.
pub async fn search_ids(client: &Client, term: &str, debug: bool) -> Result<Vec<String>> {
    let url = build_search_url(term);
    debug!(url = %url, "Fetching esearch");

    let body = fetch(client, &url).await?;
    if debug {
        println!("PubMed API response: {}", body);
    }

    let ids = parse_search_response(&body)?;
    info!(term = term, count = ids.len(), "PubMed search complete");
    Ok(ids)
}

/// Fetch summary metadata for a single PubMed id.
///
/// Missing title or pubdate fields degrade to [`PLACEHOLDER`]; a record
/// entirely absent from the response produces a summary of placeholders.
/// When `debug` is set, the raw response body is printed to stdout.
pub async fn fetch_summary(client: &Client, pubmed_id: &str, debug: bool) -> Result<PaperSummary> {
    let url = build_summary_url(pubmed_id);
    debug!(url = %url, pubmed_id = pubmed_id, "Fetching esummary");

    let body = fetch(client, &url).await?;
    if debug {
        println!("Details for {}: {}", pubmed_id, body);
    }

    parse_summary_response(&body, pubmed_id)
}

/// Build the esearch URL for a term
fn build_search_url(term: &str) -> String {
    format!("{}?db=pubmed&term={}&retmode=json", ESEARCH_URL, term)
}

/// Build the esummary URL for a single id
fn build_summary_url(pubmed_id: &str) -> String {
    format!("{}?db=pubmed&id={}&retmode=json", ESUMMARY_URL, pubmed_id)
}

/// Perform one GET and return the response body on a success status
async fn fetch(client: &Client, url: &str) -> Result<String> {
    let response = client.get(url).send().await?;
    let status = response.status();

    if !status.is_success() {
        return Err(PubfetchError::Api {
            code: status.as_u16() as i32,
            message: format!("E-utilities error: {}", status),
        });
    }

    Ok(response.text().await?)
}

/// Parse an esearch response body into the id list
fn parse_search_response(json_str: &str) -> Result<Vec<String>> {
    let response: EsearchResponse = serde_json::from_str(json_str)
        .map_err(|e| PubfetchError::Parse(format!("Failed to parse esearch response: {}", e)))?;

    Ok(response
        .esearchresult
        .map(|r| r.idlist)
        .unwrap_or_default())
}

/// Parse an esummary response body into a [`PaperSummary`] for `pubmed_id`
fn parse_summary_response(json_str: &str, pubmed_id: &str) -> Result<PaperSummary> {
    let response: EsummaryResponse = serde_json::from_str(json_str)
        .map_err(|e| PubfetchError::Parse(format!("Failed to parse esummary response: {}", e)))?;

    let record = response
        .result
        .as_ref()
        .and_then(|result| result.get(pubmed_id));

    let title = record
        .and_then(|r| r.get("title"))
        .and_then(Value::as_str)
        .unwrap_or(PLACEHOLDER)
        .to_string();

    let pub_date = record
        .and_then(|r| r.get("pubdate"))
        .and_then(Value::as_str)
        .unwrap_or(PLACEHOLDER)
        .to_string();

    let authors = record
        .and_then(|r| r.get("authors"))
        .and_then(Value::as_array)
        .map(|list| {
            list.iter()
                .filter_map(|a| a.get("name"))
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Ok(PaperSummary {
        pubmed_id: pubmed_id.to_string(),
        title,
        pub_date,
        authors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_search_url() {
        let url = build_search_url("cancer");
        assert_eq!(
            url,
            "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esearch.fcgi?db=pubmed&term=cancer&retmode=json"
        );
    }

    #[test]
    fn test_build_summary_url() {
        let url = build_summary_url("111");
        assert_eq!(
            url,
            "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esummary.fcgi?db=pubmed&id=111&retmode=json"
        );
    }

    #[test]
    fn test_parse_search_response() {
        let json = r#"{"esearchresult": {"idlist": ["111", "222"], "count": "2"}}"#;
        let ids = parse_search_response(json).expect("valid response");
        assert_eq!(ids, vec!["111".to_string(), "222".to_string()]);
    }

    #[test]
    fn test_parse_search_response_missing_result() {
        let json = r#"{"header": {"type": "esearch"}}"#;
        let ids = parse_search_response(json).expect("valid response");
        assert!(ids.is_empty());
    }

    #[test]
    fn test_parse_search_response_missing_idlist() {
        let json = r#"{"esearchresult": {"count": "0"}}"#;
        let ids = parse_search_response(json).expect("valid response");
        assert!(ids.is_empty());
    }

    #[test]
    fn test_parse_search_response_malformed() {
        assert!(parse_search_response("not json").is_err());
    }

    #[test]
    fn test_parse_summary_response() {
        let json = r#"{
            "result": {
                "uids": ["111"],
                "111": {
                    "uid": "111",
                    "title": "Study X",
                    "pubdate": "2023-01-01",
                    "authors": [
                        {"name": "Doe J", "authtype": "Author"},
                        {"name": "Smith A", "authtype": "Author"}
                    ]
                }
            }
        }"#;

        let summary = parse_summary_response(json, "111").expect("valid response");
        assert_eq!(summary.pubmed_id, "111");
        assert_eq!(summary.title, "Study X");
        assert_eq!(summary.pub_date, "2023-01-01");
        assert_eq!(summary.authors, vec!["Doe J".to_string(), "Smith A".to_string()]);
    }

    #[test]
    fn test_parse_summary_response_missing_title() {
        let json = r#"{"result": {"111": {"uid": "111", "pubdate": "2022-05-05"}}}"#;
        let summary = parse_summary_response(json, "111").expect("valid response");
        assert_eq!(summary.title, PLACEHOLDER);
        assert_eq!(summary.pub_date, "2022-05-05");
        assert!(summary.authors.is_empty());
    }

    #[test]
    fn test_parse_summary_response_missing_record() {
        let json = r#"{"result": {"222": {"uid": "222", "title": "Other"}}}"#;
        let summary = parse_summary_response(json, "111").expect("valid response");
        assert_eq!(summary.title, PLACEHOLDER);
        assert_eq!(summary.pub_date, PLACEHOLDER);
    }
}
