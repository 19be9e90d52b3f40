use std::fs;

use seo_engine::config::SeoConfig;
use seo_engine::history::{record_analysis, HistoryStore, JsonlHistory};
use seo_engine::{analyze, AnalyzeOptions};

#[test]
fn jsonl_store_round_trips_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("history.jsonl");
    let mut store = JsonlHistory::new(&path);

    assert_eq!(store.stats().unwrap().count, 0);
    assert_eq!(store.stats().unwrap().last_timestamp, None);

    let keywords = vec!["garden".to_string()];
    let options = AnalyzeOptions::with_keywords(keywords.clone());
    let first = analyze("Garden soil matters.", &options);
    let second = analyze("Water the garden daily.", &options);

    record_analysis(&mut store, "Garden soil matters.", &keywords, &first).unwrap();
    let stats = record_analysis(&mut store, "Water the garden daily.", &keywords, &second).unwrap();
    assert_eq!(stats.count, 2);

    let records = store.list_all().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].result, first);
    assert_eq!(records[1].text, "Water the garden daily.");
    assert_eq!(records[1].keywords, keywords);
    assert_eq!(stats.last_timestamp, Some(records[1].ts));
    assert!(records[0].ts <= records[1].ts);
}

#[test]
fn corrupt_lines_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.jsonl");
    let mut store = JsonlHistory::new(&path);

    let result = analyze("Some text.", &AnalyzeOptions::default());
    record_analysis(&mut store, "Some text.", &[], &result).unwrap();
    let mut raw = fs::read_to_string(&path).unwrap();
    raw.push_str("{not json\n\n");
    fs::write(&path, raw).unwrap();
    record_analysis(&mut store, "More text.", &[], &result).unwrap();

    let records = store.list_all().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].text, "More text.");
}

#[test]
fn unwritable_store_does_not_affect_analysis() {
    let dir = tempfile::tempdir().unwrap();
    // A directory where the log file should be.
    let mut store = JsonlHistory::new(dir.path());

    let result = analyze("Still analyzed.", &AnalyzeOptions::default());
    assert!(record_analysis(&mut store, "Still analyzed.", &[], &result).is_none());
    assert_eq!(result.meta, "Still analyzed.");
}

#[test]
fn config_discovery() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(SeoConfig::discover(dir.path()), SeoConfig::default());

    fs::write(
        dir.path().join(".seo-engine.toml"),
        "[history]\nenabled = false\n",
    )
    .unwrap();
    assert!(!SeoConfig::discover(dir.path()).history.enabled);

    fs::write(dir.path().join(".seo-engine.toml"), "history = [").unwrap();
    assert_eq!(SeoConfig::discover(dir.path()), SeoConfig::default());
}
