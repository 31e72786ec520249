//! E2E tests for persisted statistics
//!
//! Drives the statistics store through the public API over both storage
//! adapters: persistence across store instances, failure degradation,
//! and shared use from several threads.

use quizzie::{
    CategoryCount, CorrectRanking, FileStorage, IncorrectRanking, MemoryStorage, StatisticsStore,
    Storage, STATS_KEY,
};
use std::sync::{Arc, Mutex};
use std::thread;
use tempfile::TempDir;

#[test]
fn test_statistics_survive_new_store_instance() {
    let dir = TempDir::new().unwrap();

    {
        let mut store = StatisticsStore::new(FileStorage::new(dir.path()));
        store.record_answer("Geography", true);
        store.record_answer("Geography", false);
        store.record_answer("History", true);
    }

    let store = StatisticsStore::new(FileStorage::new(dir.path()));
    let table = store.read();
    assert_eq!(table.get("Geography"), Some(&CategoryCount::new(1, 1)));
    assert_eq!(table.get("History"), Some(&CategoryCount::new(1, 0)));
    assert_eq!(
        store.top_correct_categories(1),
        vec![CorrectRanking {
            category: "Geography".to_string(),
            correct: 1,
            total: 2,
        }]
    );
}

#[test]
fn test_stored_blob_uses_documented_format() {
    let dir = TempDir::new().unwrap();
    let mut store = StatisticsStore::new(FileStorage::new(dir.path()));
    store.record_answer("Zufälliger Mix", false);

    let raw = std::fs::read_to_string(dir.path().join("quizzie_stats.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"Zufälliger Mix": {"correct": 0, "incorrect": 1}})
    );
}

#[test]
fn test_blob_written_by_other_tool_is_read() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("quizzie_stats.json"),
        r#"{"Music":{"correct":2,"incorrect":5},"Art":{"correct":7,"incorrect":3}}"#,
    )
    .unwrap();

    let store = StatisticsStore::new(FileStorage::new(dir.path()));
    assert_eq!(
        store.top_incorrect_categories(3),
        vec![
            IncorrectRanking {
                category: "Music".to_string(),
                incorrect: 5,
                total: 7,
            },
            IncorrectRanking {
                category: "Art".to_string(),
                incorrect: 3,
                total: 10,
            },
        ]
    );
}

#[test]
fn test_clear_removes_file() {
    let dir = TempDir::new().unwrap();
    let mut store = StatisticsStore::new(FileStorage::new(dir.path()));
    store.record_answer("History", true);
    assert!(dir.path().join("quizzie_stats.json").exists());

    store.clear_statistics();

    assert!(!dir.path().join("quizzie_stats.json").exists());
    assert!(store.read().is_empty());
}

#[test]
fn test_unreadable_data_dir_degrades_to_empty() {
    let dir = TempDir::new().unwrap();
    // A regular file where the data directory should be
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, "x").unwrap();

    let mut store = StatisticsStore::new(FileStorage::new(&blocker));
    store.record_answer("History", true);
    store.clear_statistics();

    assert!(store.read().is_empty());
    assert!(store.top_correct_categories(3).is_empty());
}

#[test]
fn test_shared_store_never_loses_increments() {
    let store = Arc::new(Mutex::new(StatisticsStore::new(MemoryStorage::new())));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for _ in 0..50 {
                    store.lock().unwrap().record_answer("History", i % 2 == 0);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let table = store.lock().unwrap().read();
    assert_eq!(table.get("History"), Some(&CategoryCount::new(200, 200)));
}

#[test]
fn test_boxed_storage_works_as_port() {
    let storage: Box<dyn Storage> = Box::new(MemoryStorage::new());
    let mut store = StatisticsStore::new(storage);
    store.record_answer("Art", true);

    assert!(store.storage().get(STATS_KEY).unwrap().is_some());
    assert_eq!(store.read().total_answers(), 1);
}
