//! Keyword extraction and resume/JD keyword partitioning.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// Words never treated as keywords, regardless of length.
pub const STOP_WORDS: [&str; 10] = ["and", "or", "the", "in", "on", "at", "to", "for", "with", "by"];

/// Tokens must be strictly longer than this to count as keywords.
pub const MIN_KEYWORD_LEN: usize = 2;

static STOP_WORD_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| STOP_WORDS.into_iter().collect());

// ASCII word class: every run of anything else collapses to a single space.
static NON_WORD_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9A-Za-z_]+").unwrap());

/// Extracts display-cased keywords from raw document text.
///
/// Order and duplicates are preserved as they occur in the source, so callers
/// comparing keyword lists must do so by case-insensitive membership.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let normalized = NON_WORD_RUN.replace_all(&lowered, " ");

    normalized
        .split_whitespace()
        .filter(|token| token.chars().count() > MIN_KEYWORD_LEN)
        .filter(|token| !STOP_WORD_SET.contains(token))
        .map(capitalize_first)
        .collect()
}

fn capitalize_first(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// JD keywords split by whether the resume mentions them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordPartition {
    pub found: Vec<String>,
    pub missing: Vec<String>,
}

impl KeywordPartition {
    /// Number of JD keywords that were classified.
    pub fn total(&self) -> usize {
        self.found.len() + self.missing.len()
    }
}

/// Classifies every JD keyword as found or missing in the resume keywords.
///
/// The output lists partition `job_keywords` exactly: order and duplicates
/// are kept, and each JD keyword lands in exactly one list.
pub fn partition_keywords(job_keywords: &[String], resume_keywords: &[String]) -> KeywordPartition {
    let resume_set: HashSet<String> = resume_keywords.iter().map(|k| k.to_lowercase()).collect();

    let (found, missing) = job_keywords
        .iter()
        .cloned()
        .partition(|keyword| resume_set.contains(&keyword.to_lowercase()));

    KeywordPartition { found, missing }
}
