//! Presentation helpers.
//!
//! [`ReportView`] is a plain view-model built from an [`AnalysisResult`]; it
//! holds display strings only and renders to whatever writer it is given.

use std::io::{self, Write};

use serde::Serialize;

use crate::history::HistoryStats;
use crate::AnalysisResult;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportView {
    pub title: String,
    pub meta: String,
    pub top_keywords: String,
    pub seo_score: String,
    pub readability: String,
    pub duplication: String,
    pub suggestions: Vec<String>,
    pub history_count: Option<usize>,
}

impl ReportView {
    pub fn build(result: &AnalysisResult) -> Self {
        let top_keywords = result
            .top_keywords
            .iter()
            .map(|k| format!("{} ({})", k.term, k.count))
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            title: result.title.clone(),
            meta: result.meta.clone(),
            top_keywords,
            seo_score: format!("{}/100", result.seo_score),
            readability: format!("{}/100", result.readability),
            duplication: format!("{}%", (result.duplication * 100.0).round()),
            suggestions: result.suggestions.clone(),
            history_count: None,
        }
    }

    pub fn with_history(mut self, stats: Option<HistoryStats>) -> Self {
        self.history_count = stats.map(|s| s.count);
        self
    }

    pub fn render(&self, target: &mut impl Write) -> io::Result<()> {
        writeln!(target, "Title suggestion")?;
        writeln!(target, "  {}", self.title)?;
        writeln!(target, "Meta description")?;
        writeln!(target, "  {}", self.meta)?;
        writeln!(target, "Top keywords")?;
        writeln!(target, "  {}", self.top_keywords)?;
        writeln!(target, "SEO score:   {}", self.seo_score)?;
        writeln!(target, "Readability: {}", self.readability)?;
        writeln!(target, "Duplication: {}", self.duplication)?;
        if !self.suggestions.is_empty() {
            writeln!(target, "Suggestions")?;
            for s in &self.suggestions {
                writeln!(target, "  - {s}")?;
            }
        }
        if let Some(count) = self.history_count {
            writeln!(target, "History: {count}")?;
        }
        Ok(())
    }
}

/// Title and meta description, ready to paste.
pub fn clipboard_text(result: &AnalysisResult) -> String {
    format!("{}\n\n{}", result.title, result.meta)
}

/// Pretty JSON export of a result.
pub fn export_json(result: &AnalysisResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}
