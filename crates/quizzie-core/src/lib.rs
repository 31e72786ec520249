//! Quizzie Core - persistent quiz answer statistics
//!
//! This library keeps per-category counts of correct and incorrect quiz
//! answers in a string-keyed storage medium and derives top-N rankings
//! from them. Storage access is fail-soft: faults are logged and degrade
//! to empty defaults instead of reaching the caller.

pub mod stats;
pub mod storage;

pub use stats::store::StatisticsStore;
pub use stats::types::{CategoryCount, CorrectRanking, IncorrectRanking, StatisticsTable};
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};

/// Library version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Storage key holding the serialized statistics table
pub const STATS_KEY: &str = "quizzie_stats";

/// Pseudo-category aggregating questions across real categories.
/// Never appears in rankings.
pub const RANDOM_MIX_CATEGORY: &str = "Zufälliger Mix";

/// Number of rankings returned when the caller has no preference
pub const DEFAULT_TOP_LIMIT: usize = 3;
