use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::text::{char_len, is_stopword, tokenize};
use crate::HP;

/// A term and how many times it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedTerm {
    pub term: String,
    pub count: usize,
}

/// Term counts that remember the order in which terms were first seen.
///
/// The first-seen order is the tie-break for [`top_n`], so ranking never
/// depends on hash iteration order.
#[derive(Debug, Clone, Default)]
pub struct TermFrequency {
    index: HashMap<String, usize>,
    entries: Vec<(String, usize)>,
}

impl TermFrequency {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, term: &str) {
        match self.index.get(term) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(term.to_string(), self.entries.len());
                self.entries.push((term.to_string(), 1));
            }
        }
    }

    /// Occurrences of `term`, zero when absent.
    pub fn get(&self, term: &str) -> usize {
        self.index
            .get(term)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(t, c)| (t.as_str(), *c))
    }
}

/// Count token occurrences.
pub fn frequency<S: AsRef<str>>(tokens: &[S]) -> TermFrequency {
    let mut tf = TermFrequency::new();
    for token in tokens {
        tf.add(token.as_ref());
    }
    tf
}

/// The `n` most frequent terms, skipping anything in `exclude`.
///
/// Sorted by count descending; equal counts keep first-seen order.
pub fn top_n(tf: &TermFrequency, n: usize, exclude: Option<&HashSet<&str>>) -> Vec<RankedTerm> {
    let mut ranked: Vec<RankedTerm> = tf
        .iter()
        .filter(|(term, _)| !exclude.is_some_and(|set| set.contains(term)))
        .map(|(term, count)| RankedTerm {
            term: term.to_string(),
            count,
        })
        .collect();
    // sort_by is stable
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(n);
    ranked
}

/// Rank candidate keywords: tokens longer than two chars that are not stopwords.
pub fn extract_candidates(text: &str, n: usize) -> Vec<RankedTerm> {
    let tokens: Vec<String> = tokenize(text)
        .into_iter()
        .filter(|t| char_len(t) > HP.candidate_min_chars && !is_stopword(t))
        .collect();
    top_n(&frequency(&tokens), n, None)
}
