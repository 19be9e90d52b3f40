use crate::frequency::frequency;
use crate::sentences::avg_words_per_sentence;
use crate::text::{char_len, tokenize};
use crate::HP;

/// Sentence-length comfort on a 0-100 scale.
///
/// Peaks at 100 when sentences average the target length and loses a fixed
/// number of points per word of deviation in either direction.
pub fn score_readability(text: &str) -> u32 {
    let avg = avg_words_per_sentence(text);
    let raw = HP.score_max - (avg - HP.target_sentence_words).abs() * HP.readability_slope;
    raw.clamp(0.0, HP.score_max).round() as u32
}

/// Keyword density factor in [0, 1].
///
/// Keyword hits are saturated against `ln(1 + chars)`, so longer text needs
/// more mentions to max out.
pub fn keyword_factor<S: AsRef<str>>(text: &str, keywords: &[S]) -> f64 {
    let tf = frequency(&tokenize(text));
    let hits: usize = keywords
        .iter()
        .map(|k| tf.get(&k.as_ref().trim().to_lowercase()))
        .sum();
    let basis = (1.0 + char_len(text) as f64).ln().max(1.0);
    (hits as f64 / basis).min(1.0)
}

pub fn length_factor(text: &str) -> f64 {
    (char_len(text) as f64 / HP.length_basis_chars).min(1.0)
}

/// Composite SEO score on a 0-100 scale.
pub fn score_seo<S: AsRef<str>>(text: &str, keywords: &[S]) -> u32 {
    let weighted = HP.keyword_weight * keyword_factor(text, keywords)
        + HP.readability_weight * (score_readability(text) as f64 / HP.score_max)
        + HP.length_weight * length_factor(text);
    (HP.score_max * weighted).clamp(0.0, HP.score_max).round() as u32
}
