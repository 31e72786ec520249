//! Persistent statistics store
//!
//! Every operation is a self-contained read-modify-write over the single
//! table stored at [`STATS_KEY`]. Storage failures never reach the caller:
//! reads degrade to an empty table and writes are dropped, each failure
//! reported once through `tracing`.

use super::types::{CategoryCount, CorrectRanking, IncorrectRanking, StatisticsTable};
use crate::storage::{Storage, StorageError};
use crate::{RANDOM_MIX_CATEGORY, STATS_KEY};

/// Statistics store over a key/value storage medium
///
/// Mutating operations take `&mut self`, so read-modify-write cycles are
/// serialized within a process. Share a store between threads through
/// `Arc<Mutex<StatisticsStore<_>>>`.
#[derive(Debug)]
pub struct StatisticsStore<S: Storage> {
    storage: S,
}

impl<S: Storage> StatisticsStore<S> {
    /// Create a store over the given storage medium
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Borrow the underlying storage
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Mutably borrow the underlying storage
    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Consume the store and return the storage medium
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Read the full statistics table
    ///
    /// Returns an empty table when nothing is stored or the stored value
    /// cannot be read or parsed.
    pub fn read(&self) -> StatisticsTable {
        match self.try_read() {
            Ok(table) => table,
            Err(e) => {
                tracing::error!(key = STATS_KEY, error = %e, "Error reading statistics");
                StatisticsTable::new()
            }
        }
    }

    fn try_read(&self) -> Result<StatisticsTable, StorageError> {
        match self.storage.get(STATS_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(StatisticsTable::new()),
        }
    }

    /// Overwrite the stored table. Failures are logged and dropped.
    fn write(&mut self, table: &StatisticsTable) {
        if let Err(e) = self.try_write(table) {
            tracing::error!(key = STATS_KEY, error = %e, "Error saving statistics");
        }
    }

    fn try_write(&mut self, table: &StatisticsTable) -> Result<(), StorageError> {
        let raw = serde_json::to_string(table)?;
        self.storage.set(STATS_KEY, &raw)
    }

    /// Record one answer for `category`
    ///
    /// Creates the category on its first answer. Persistence is
    /// best-effort.
    pub fn record_answer(&mut self, category: &str, is_correct: bool) {
        let mut table = self.read();
        table.entry(category).record(is_correct);
        self.write(&table);
        tracing::debug!(category, is_correct, "Recorded answer");
    }

    /// Categories with the most correct answers, highest first
    ///
    /// Skips the random-mix pseudo-category and categories without any
    /// answers. Equal counts keep table order.
    pub fn top_correct_categories(&self, limit: usize) -> Vec<CorrectRanking> {
        ranked(&self.read(), limit, |count| count.correct)
            .into_iter()
            .map(|(category, count)| CorrectRanking {
                category,
                correct: count.correct,
                total: count.total(),
            })
            .collect()
    }

    /// Categories with the most incorrect answers, highest first
    ///
    /// Same filtering and ordering rules as
    /// [`top_correct_categories`](Self::top_correct_categories).
    pub fn top_incorrect_categories(&self, limit: usize) -> Vec<IncorrectRanking> {
        ranked(&self.read(), limit, |count| count.incorrect)
            .into_iter()
            .map(|(category, count)| IncorrectRanking {
                category,
                incorrect: count.incorrect,
                total: count.total(),
            })
            .collect()
    }

    /// Remove all statistics. The storage key becomes absent.
    pub fn clear_statistics(&mut self) {
        match self.storage.remove(STATS_KEY) {
            Ok(()) => tracing::info!(key = STATS_KEY, "Statistics cleared"),
            Err(e) => tracing::error!(key = STATS_KEY, error = %e, "Error clearing statistics"),
        }
    }
}

/// Rank eligible categories by `score`, descending, truncated to `limit`
fn ranked(
    table: &StatisticsTable,
    limit: usize,
    score: impl Fn(&CategoryCount) -> u64,
) -> Vec<(String, CategoryCount)> {
    let mut rows: Vec<(String, CategoryCount)> = table
        .iter()
        .filter(|(category, count)| *category != RANDOM_MIX_CATEGORY && count.total() > 0)
        .map(|(category, count)| (category.to_string(), count.clone()))
        .collect();

    // sort_by is stable: ties keep table order
    rows.sort_by(|(_, a), (_, b)| score(b).cmp(&score(a)));
    rows.truncate(limit);
    rows
}
