//! Append-only log of past analyses.
//!
//! The analysis core never reads from here. Callers own a [`HistoryStore`]
//! and hand it each finished result; [`record_analysis`] makes sure a failing
//! store can never take the result down with it.

use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::AnalysisResult;

/// One stored analysis, with the input that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub ts: DateTime<Utc>,
    pub text: String,
    pub keywords: Vec<String>,
    pub result: AnalysisResult,
}

impl HistoryRecord {
    pub fn new(text: &str, keywords: &[String], result: &AnalysisResult) -> Self {
        Self {
            ts: Utc::now(),
            text: text.to_string(),
            keywords: keywords.to_vec(),
            result: result.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryStats {
    pub count: usize,
    pub last_timestamp: Option<DateTime<Utc>>,
}

pub trait HistoryStore {
    fn append(&mut self, record: HistoryRecord) -> Result<()>;

    /// All records, oldest first.
    fn list_all(&self) -> Result<Vec<HistoryRecord>>;

    fn stats(&self) -> Result<HistoryStats> {
        let records = self.list_all()?;
        Ok(HistoryStats {
            count: records.len(),
            last_timestamp: records.last().map(|r| r.ts),
        })
    }
}

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct MemoryHistory {
    records: Vec<HistoryRecord>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryStore for MemoryHistory {
    fn append(&mut self, record: HistoryRecord) -> Result<()> {
        self.records.push(record);
        Ok(())
    }

    fn list_all(&self) -> Result<Vec<HistoryRecord>> {
        Ok(self.records.clone())
    }
}

// ---------------------------------------------------------------------------
// JSON Lines file store
// ---------------------------------------------------------------------------

/// One JSON record per line, appended in place.
#[derive(Debug, Clone)]
pub struct JsonlHistory {
    path: PathBuf,
}

impl JsonlHistory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryStore for JsonlHistory {
    fn append(&mut self, record: HistoryRecord) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let line = serde_json::to_string(&record)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")?;
        Ok(())
    }

    fn list_all(&self) -> Result<Vec<HistoryRecord>> {
        let file = match fs::File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No history at {}", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut records = Vec::new();
        for (idx, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<HistoryRecord>(&line) {
                Ok(record) => records.push(record),
                Err(e) => log::warn!(
                    "Skipping corrupt history line {} in {}: {}",
                    idx + 1,
                    self.path.display(),
                    e
                ),
            }
        }
        Ok(records)
    }
}

/// Append a timestamped record, swallowing any storage failure.
///
/// Returns the updated stats when both the append and the stats read succeed.
pub fn record_analysis(
    store: &mut dyn HistoryStore,
    text: &str,
    keywords: &[String],
    result: &AnalysisResult,
) -> Option<HistoryStats> {
    if let Err(e) = store.append(HistoryRecord::new(text, keywords, result)) {
        log::warn!("Failed to save analysis history: {e}");
        return None;
    }
    match store.stats() {
        Ok(stats) => Some(stats),
        Err(e) => {
            log::warn!("Failed to read analysis history: {e}");
            None
        }
    }
}
