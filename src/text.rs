use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

// ---------------------------------------------------------------------------
// Compiled patterns
// ---------------------------------------------------------------------------

// Anything that is not a letter, number, whitespace, apostrophe or hyphen.
static NON_WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\p{L}\p{N}\s'-]").unwrap());

// ---------------------------------------------------------------------------
// Stopwords
// ---------------------------------------------------------------------------

static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "and", "or", "is", "a", "an", "to", "of", "in", "for", "with", "on", "by", "this",
        "that", "it", "as", "are", "be", "from", "at", "was", "will", "can",
    ]
    .into_iter()
    .collect()
});

/// The fixed set of function words excluded from keyword ranking.
pub fn stopwords() -> &'static HashSet<&'static str> {
    &STOPWORDS
}

pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(token)
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Collapse every whitespace run to a single space and trim both ends.
///
/// Idempotent: normalizing already-normalized text returns it unchanged.
pub fn normalize_text(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split text into lowercase word tokens.
///
/// Letters and numbers from any script survive, as do apostrophes and hyphens
/// (`don't`, `long-term`). Everything else acts as a separator.
pub fn tokenize(s: &str) -> Vec<String> {
    let lowered = normalize_text(s).to_lowercase();
    NON_WORD_RE
        .replace_all(&lowered, " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Number of Unicode scalar values in `s`. All length budgets count these.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// The first `max` chars of `s`, never splitting a code point.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_and_trims() {
        assert_eq!(normalize_text("  hello \n\t world  "), "hello world");
        assert_eq!(normalize_text(""), "");
        assert_eq!(normalize_text(" \n "), "");
    }

    #[test]
    fn normalize_is_idempotent() {
        let once = normalize_text("a  b\n\nc\t d ");
        assert_eq!(normalize_text(&once), once);
    }

    #[test]
    fn tokenize_lowercases_and_strips_punctuation() {
        assert_eq!(
            tokenize("Hello, World! It's a long-term plan."),
            vec!["hello", "world", "it's", "a", "long-term", "plan"]
        );
    }

    #[test]
    fn tokenize_keeps_non_latin_scripts() {
        assert_eq!(
            tokenize("Привет мир, café 東京 42"),
            vec!["привет", "мир", "café", "東京", "42"]
        );
    }

    #[test]
    fn tokenize_empty_and_punctuation_only() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("?!... ,,;").is_empty());
    }

    #[test]
    fn stopwords_are_fixed() {
        assert!(is_stopword("the"));
        assert!(is_stopword("can"));
        assert!(!is_stopword("widget"));
        assert_eq!(stopwords().len(), 24);
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(char_len("東京"), 2);
    }
}
