use once_cell::sync::Lazy;
use regex::Regex;

use crate::scoring::score_readability;
use crate::sentences::estimate_duplication_ratio;
use crate::text::tokenize;
use crate::HP;

// Markdown-style heading: 1-6 '#' at the start of a line, then whitespace.
static HEADING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#{1,6}\s").unwrap());

pub const ADVICE_SHORT_CONTENT: &str =
    "Content is short. Consider adding more detail (200+ words).";
pub const ADVICE_LOW_READABILITY: &str =
    "Readability is low (sentences are too long). Split long sentences into shorter ones.";
pub const ADVICE_NO_KEYWORDS: &str =
    "No primary keywords yet. Pick 1-3 target keywords for SEO.";
pub const ADVICE_ADD_HEADINGS: &str =
    "Consider adding headings/subheadings for structure (H2/H3).";

pub fn heading_count(text: &str) -> usize {
    HEADING_RE.find_iter(text).count()
}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

fn rule_length(text: &str) -> Option<String> {
    (tokenize(text).len() < HP.min_words).then(|| ADVICE_SHORT_CONTENT.to_string())
}

fn rule_duplication(text: &str) -> Option<String> {
    let ratio = estimate_duplication_ratio(text);
    (ratio > HP.max_duplication).then(|| {
        format!(
            "Detected ~{}% duplicated content. Reduce repetition or merge similar paragraphs.",
            (ratio * 100.0).round()
        )
    })
}

fn rule_readability(text: &str) -> Option<String> {
    (score_readability(text) < HP.min_readability).then(|| ADVICE_LOW_READABILITY.to_string())
}

fn rule_keywords<S: AsRef<str>>(keywords: &[S]) -> Option<String> {
    keywords.is_empty().then(|| ADVICE_NO_KEYWORDS.to_string())
}

fn rule_headings(text: &str) -> Option<String> {
    (heading_count(text) < HP.min_headings).then(|| ADVICE_ADD_HEADINGS.to_string())
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Improvement suggestions in fixed priority order.
///
/// `text` should be the raw input: headings are detected by line starts,
/// which normalization would erase. The readability and heading rules only
/// run when the text has at least one word.
pub fn suggest_improvements<S: AsRef<str>>(text: &str, keywords: &[S]) -> Vec<String> {
    let has_words = !tokenize(text).is_empty();

    [
        rule_length(text),
        rule_duplication(text),
        if has_words { rule_readability(text) } else { None },
        rule_keywords(keywords),
        if has_words { rule_headings(text) } else { None },
    ]
    .into_iter()
    .flatten()
    .collect()
}
