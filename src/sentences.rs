//! Heuristic sentence segmentation.
//!
//! A sentence is a run of non-terminator characters followed by any number of
//! `.`, `!` or `?`. Abbreviations ("Dr.") and decimals ("3.5") are split like
//! any other terminator.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::text::{normalize_text, tokenize};

static SENTENCE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^.!?]+[.!?]*").unwrap());

/// Split `text` into trimmed, non-empty sentences, terminators included.
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_RE
        .find_iter(text)
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Mean token count per sentence; 0.0 when there are no sentences.
pub fn avg_words_per_sentence(text: &str) -> f64 {
    let sentences = split_sentences(text);
    if sentences.is_empty() {
        return 0.0;
    }
    let total: usize = sentences.iter().map(|s| tokenize(s).len()).sum();
    total as f64 / sentences.len() as f64
}

/// Fraction of sentences that repeat an earlier one, ignoring case and spacing.
pub fn estimate_duplication_ratio(text: &str) -> f64 {
    let sentences = split_sentences(text);
    if sentences.is_empty() {
        return 0.0;
    }
    let mut seen = HashSet::new();
    let repeats = sentences
        .iter()
        .filter(|s| !seen.insert(normalize_text(&s.to_lowercase())))
        .count();
    repeats as f64 / sentences.len() as f64
}
