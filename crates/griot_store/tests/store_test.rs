//! Tests for post store backends.

use chrono::{NaiveDate, Utc};
use griot_core::{content_hash, PostRecord};
use griot_interface::PostStore;
use griot_store::{JsonFileStore, MemoryStore};
use tempfile::TempDir;

fn record(date: NaiveDate, topic: &str, message: &str, seq: u32) -> PostRecord {
    PostRecord {
        date,
        topic: topic.to_string(),
        message: message.to_string(),
        content_hash: content_hash(message),
        sequence_number: seq,
        external_post_id: Some(format!("page_{seq}")),
        timestamp: Utc::now(),
    }
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
}

#[tokio::test]
async fn append_then_query_round_trips() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().join("post_log.jsonl")).unwrap();

    let r = record(day(1), "Festivals", "A festival post", 1);
    store.append(&r).await.unwrap();

    let records = store.records_for_date(day(1)).await.unwrap();
    assert_eq!(records, vec![r]);
}

#[tokio::test]
async fn missing_file_reads_as_empty_history() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().join("never_written.jsonl")).unwrap();

    assert!(store.records_for_date(day(1)).await.unwrap().is_empty());
    assert!(store.records_since(day(1)).await.unwrap().is_empty());
}

#[tokio::test]
async fn queries_are_idempotent_without_intervening_append() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().join("post_log.jsonl")).unwrap();

    store
        .append(&record(day(1), "Cuisine", "First", 1))
        .await
        .unwrap();
    store
        .append(&record(day(1), "Wildlife", "Second", 2))
        .await
        .unwrap();

    let first = store.records_for_date(day(1)).await.unwrap();
    let second = store.records_for_date(day(1)).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn records_for_date_filters_other_days() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().join("post_log.jsonl")).unwrap();

    store
        .append(&record(day(1), "Cuisine", "Day one", 1))
        .await
        .unwrap();
    store
        .append(&record(day(2), "Wildlife", "Day two", 1))
        .await
        .unwrap();

    let records = store.records_for_date(day(2)).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].topic, "Wildlife");
}

#[tokio::test]
async fn records_since_boundary_is_inclusive() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().join("post_log.jsonl")).unwrap();

    store
        .append(&record(day(1), "Cuisine", "Older", 1))
        .await
        .unwrap();
    store
        .append(&record(day(3), "Wildlife", "Boundary", 1))
        .await
        .unwrap();
    store
        .append(&record(day(5), "Music", "Newer", 1))
        .await
        .unwrap();

    let since = store.records_since(day(3)).await.unwrap();
    let topics: Vec<&str> = since.iter().map(|r| r.topic.as_str()).collect();
    assert_eq!(topics, vec!["Wildlife", "Music"]);
}

#[tokio::test]
async fn history_survives_reopening_the_store() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("post_log.jsonl");

    {
        let store = JsonFileStore::new(&path).unwrap();
        store
            .append(&record(day(1), "Languages", "Persisted", 1))
            .await
            .unwrap();
    }

    // A fresh instance, as after a process restart, sees the same history.
    let reopened = JsonFileStore::new(&path).unwrap();
    let records = reopened.records_for_date(day(1)).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].message, "Persisted");
}

#[tokio::test]
async fn corrupt_line_is_reported_not_skipped() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("post_log.jsonl");
    std::fs::write(&path, "{not valid json\n").unwrap();

    let store = JsonFileStore::new(&path).unwrap();
    let result = store.records_for_date(day(1)).await;
    assert!(result.is_err());
    assert!(matches!(
        result.unwrap_err().kind(),
        griot_error::GriotErrorKind::Store(_)
    ));
}

#[tokio::test]
async fn memory_store_matches_file_semantics() {
    let store = MemoryStore::new();
    store
        .append(&record(day(1), "Cuisine", "Day one", 1))
        .await
        .unwrap();
    store
        .append(&record(day(2), "Wildlife", "Day two", 1))
        .await
        .unwrap();

    assert_eq!(store.records_for_date(day(1)).await.unwrap().len(), 1);
    assert_eq!(store.records_since(day(1)).await.unwrap().len(), 2);
    assert_eq!(store.records_since(day(2)).await.unwrap().len(), 1);
    assert_eq!(store.len(), 2);
}
