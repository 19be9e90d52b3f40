//! Deterministic SEO analysis for prose.
//!
//! [`analyze`] turns raw text into keyword rankings, a readability score, a
//! composite SEO score, a generated title and meta description, a sentence
//! duplication ratio and a short list of improvement suggestions. Every
//! function here is pure: the same input always produces the same result.
//!
//! History persistence ([`history`]), presentation ([`view`]) and
//! configuration ([`config`]) sit around the core and never feed back into it.

use serde::{Deserialize, Serialize};

pub mod advice;
pub mod config;
pub mod error;
pub mod frequency;
pub mod generate;
pub mod history;
pub mod scoring;
pub mod sentences;
pub mod text;
pub mod view;

pub use advice::suggest_improvements;
pub use error::{Error, Result};
pub use frequency::{extract_candidates, frequency, top_n, RankedTerm, TermFrequency};
pub use generate::{generate_meta, generate_title};
pub use scoring::{score_readability, score_seo};
pub use sentences::{avg_words_per_sentence, estimate_duplication_ratio, split_sentences};
pub use text::{normalize_text, stopwords, tokenize};

use text::char_len;

// ---------------------------------------------------------------------------
// Data structures
// ---------------------------------------------------------------------------

/// Everything one analysis produces.
///
/// Serializes to a flat document with exactly these keys: `title`, `meta`,
/// `topKeywords`, `keywords`, `readability`, `seoScore`, `suggestions`,
/// `duplication`, `length`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub title: String,
    pub meta: String,
    pub top_keywords: Vec<RankedTerm>,
    /// Keywords the score was computed against: caller-supplied or derived.
    pub keywords: Vec<String>,
    pub readability: u32,
    pub seo_score: u32,
    pub suggestions: Vec<String>,
    pub duplication: f64,
    /// Character count of the normalized text.
    pub length: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyzeOptions {
    /// Target keywords. Empty means derive them from the text.
    pub keywords: Vec<String>,
}

impl AnalyzeOptions {
    pub fn with_keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Hyperparameters
// ---------------------------------------------------------------------------

pub(crate) struct Hyperparameters {
    pub score_max: f64,
    pub target_sentence_words: f64,
    pub readability_slope: f64,
    pub keyword_weight: f64,
    pub readability_weight: f64,
    pub length_weight: f64,
    pub length_basis_chars: f64,
    pub candidate_min_chars: usize,
    pub top_keyword_count: usize,
    pub auto_keyword_count: usize,
    pub title_keyword_count: usize,
    pub title_candidate_count: usize,
    pub title_segment_budget: usize,
    pub title_fallback_chars: usize,
    pub title_max_chars: usize,
    pub meta_max_chars: usize,
    pub meta_cut_chars: usize,
    pub min_words: usize,
    pub max_duplication: f64,
    pub min_readability: u32,
    pub min_headings: usize,
}

pub(crate) static HP: Hyperparameters = Hyperparameters {
    score_max: 100.0,
    target_sentence_words: 16.0,
    readability_slope: 6.0,
    keyword_weight: 0.5,
    readability_weight: 0.3,
    length_weight: 0.2,
    length_basis_chars: 1000.0,
    candidate_min_chars: 2,
    top_keyword_count: 8,
    auto_keyword_count: 5,
    title_keyword_count: 2,
    title_candidate_count: 5,
    title_segment_budget: 50,
    title_fallback_chars: 60,
    title_max_chars: 70,
    meta_max_chars: 160,
    meta_cut_chars: 155,
    min_words: 200,
    max_duplication: 0.15,
    min_readability: 50,
    min_headings: 2,
};

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Analyze `text` for SEO.
///
/// Blank entries in `options.keywords` are ignored. When no keywords remain,
/// the top candidate terms of the text are used instead. `top_keywords` is
/// always ranked from the text, independent of the keyword list.
pub fn analyze(text: &str, options: &AnalyzeOptions) -> AnalysisResult {
    let normalized = normalize_text(text);

    let supplied: Vec<String> = options
        .keywords
        .iter()
        .map(|k| k.trim())
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect();
    let keywords = if supplied.is_empty() {
        extract_candidates(&normalized, HP.auto_keyword_count)
            .into_iter()
            .map(|r| r.term)
            .collect()
    } else {
        supplied
    };

    AnalysisResult {
        title: generate_title(&normalized, &keywords),
        meta: generate_meta(&normalized),
        top_keywords: extract_candidates(&normalized, HP.top_keyword_count),
        readability: score_readability(&normalized),
        seo_score: score_seo(&normalized, &keywords),
        // Headings are line-based, so the advisor needs the raw text.
        suggestions: suggest_improvements(text, &keywords),
        duplication: estimate_duplication_ratio(&normalized),
        length: char_len(&normalized),
        keywords,
    }
}

/// [`analyze`] for input that may be absent. `None` behaves like `""`.
pub fn analyze_optional(text: Option<&str>, options: &AnalyzeOptions) -> AnalysisResult {
    analyze(text.unwrap_or_default(), options)
}
