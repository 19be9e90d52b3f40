use once_cell::sync::Lazy;
use regex::Regex;

use crate::frequency::extract_candidates;
use crate::text::{char_len, normalize_text, truncate_chars};
use crate::HP;

// Leading run up to and including the first terminator.
static FIRST_SENTENCE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^.!?]+[.!?]?").unwrap());

// A lone non-space character left dangling after the cut.
static TRAILING_FRAGMENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+\S$").unwrap());

/// Build a title from the lead keywords plus the top candidate terms.
///
/// Falls back to the opening clause of the first sentence when there is
/// nothing to assemble. Never longer than the title budget.
pub fn generate_title<S: AsRef<str>>(text: &str, keywords: &[S]) -> String {
    let mut parts: Vec<String> = Vec::new();
    if !keywords.is_empty() {
        let lead: Vec<&str> = keywords
            .iter()
            .take(HP.title_keyword_count)
            .map(|k| k.as_ref())
            .collect();
        parts.push(lead.join(" "));
    }
    for candidate in extract_candidates(text, HP.title_candidate_count) {
        if char_len(&parts.join(" ")) < HP.title_segment_budget {
            parts.push(candidate.term);
        }
    }

    let joined = parts.join(" - ");
    let title = if joined.is_empty() {
        first_clause(text)
    } else {
        joined
    };
    normalize_text(truncate_chars(&title, HP.title_max_chars))
}

fn first_clause(text: &str) -> String {
    let first = FIRST_SENTENCE_RE
        .find(text)
        .map_or(text, |m| m.as_str())
        .trim();
    let clause = first.split(',').next().unwrap_or_default();
    truncate_chars(clause, HP.title_fallback_chars).to_string()
}

/// Normalized text cut to the meta description budget.
///
/// Text over budget is cut shorter, loses a dangling one-character
/// fragment at the end and never ends in whitespace.
pub fn generate_meta(text: &str) -> String {
    let normalized = normalize_text(text);
    if char_len(&normalized) <= HP.meta_max_chars {
        return normalized;
    }
    let cut = truncate_chars(&normalized, HP.meta_cut_chars);
    TRAILING_FRAGMENT_RE.replace(cut, "").trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_KEYWORDS: [&str; 0] = [];

    #[test]
    fn title_leads_with_keywords() {
        let text = "Gardening tips for tomatoes. Tomatoes need sun. Tomatoes need water.";
        let title = generate_title(text, &["organic garden", "soil", "compost"]);
        assert!(title.starts_with("organic garden soil - tomatoes"), "{title}");
    }

    #[test]
    fn title_from_candidates_only() {
        let text = "Rust makes systems programming safer. Rust compiles fast.";
        let title = generate_title(text, &NO_KEYWORDS);
        assert_eq!(title, "rust - makes - systems - programming - safer");
    }

    #[test]
    fn title_stops_adding_once_segment_budget_reached() {
        let text = "Extraordinarily comprehensive documentation accompanies internationalization frameworks everywhere.";
        let title = generate_title(text, &NO_KEYWORDS);
        assert_eq!(
            title,
            "extraordinarily - comprehensive - documentation - accompanies"
        );
    }

    #[test]
    fn title_falls_back_to_first_clause() {
        // Only short words and stopwords, so no candidates.
        let text = "It is so, as we go. Be at it.";
        assert_eq!(generate_title(text, &NO_KEYWORDS), "It is so");
    }

    #[test]
    fn title_of_pathological_text() {
        assert_eq!(generate_title("", &NO_KEYWORDS), "");
        assert_eq!(generate_title("?!.", &NO_KEYWORDS), "?!.");
    }

    #[test]
    fn title_never_exceeds_budget() {
        let long_keyword = "k".repeat(300);
        let title = generate_title("whatever", &[long_keyword.as_str()]);
        assert_eq!(char_len(&title), HP.title_max_chars);
    }

    #[test]
    fn meta_passes_short_text_through() {
        assert_eq!(generate_meta("  Short   summary.\n"), "Short summary.");
    }

    #[test]
    fn meta_drops_dangling_single_char() {
        // The 155 cut lands one char into "ab", leaving " a" dangling.
        let lead = format!("{} ", "abcd ".repeat(30).trim_end());
        assert_eq!(char_len(&lead), 150);
        let text = format!("{lead}abc ab{}", " tail".repeat(20));
        let meta = generate_meta(&text);
        assert_eq!(meta, format!("{lead}abc"));
        assert_eq!(char_len(&meta), 153);
    }

    #[test]
    fn meta_cut_after_full_word_keeps_155() {
        let text = vec!["abcde"; 40].join(" ");
        let meta = generate_meta(&text);
        assert_eq!(char_len(&meta), 155);
        assert!(meta.ends_with(" abcde"));
    }

    #[test]
    fn meta_cut_right_after_space_has_no_trailing_whitespace() {
        let text = format!("{} x yyyyyyyyyy", "é".repeat(154));
        let meta = generate_meta(&text);
        assert_eq!(meta, "é".repeat(154));
    }

    #[test]
    fn meta_of_200_char_input_ends_on_word_boundary() {
        let text = format!("{} ab", vec!["abcde"; 33].join(" "));
        assert_eq!(char_len(&text), 200);
        let meta = generate_meta(&text);
        assert_eq!(char_len(&meta), 155);
        assert!(meta.ends_with(" abcde"));
        assert_eq!(text.chars().nth(155), Some(' '));
        assert!(text.starts_with(&meta));
    }

    #[test]
    fn meta_never_exceeds_budget() {
        let text = "x".repeat(1000);
        assert_eq!(char_len(&generate_meta(&text)), 155);
    }
}
