//! Non-academic affiliation classifier.
//!
//! Heuristically flags commercial/industry affiliations by matching a fixed
//! keyword set against free-text author info. Matching is case-insensitive
//! and whole-word, so a keyword embedded inside a larger word does not hit.
//! Short tokens like "inc" or "ltd" can still match unrelated whole words;
//! that is an accepted trade-off of the keyword set.

use regex::Regex;
use std::sync::OnceLock;

/// Keywords indicating a commercial/industry affiliation
pub const NON_ACADEMIC_KEYWORDS: &[&str] = &["pharma", "biotech", "laboratories", "inc", "ltd"];

/// Whole-word, case-insensitive alternation over [`NON_ACADEMIC_KEYWORDS`]
fn keyword_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        let alternation = NON_ACADEMIC_KEYWORDS.join("|");
        Regex::new(&format!(r"(?i)\b(?:{})\b", alternation))
            .expect("keyword set compiles to a valid regex")
    })
}

/// Returns true if `author_info` contains any non-academic keyword as a
/// case-insensitive whole word.
///
/// Pure function: no I/O, no state, deterministic for a given input.
pub fn is_non_academic(author_info: &str) -> bool {
    keyword_pattern().is_match(author_info)
}
