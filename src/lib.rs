//! Quizzie - per-category quiz answer statistics
//!
//! This library re-exports the statistics store and storage adapters from
//! `quizzie-core` and adds the configuration and command-line layers used
//! by the `quizzie` binary.

pub mod cli;
pub mod config;

pub use quizzie_core::stats;
pub use quizzie_core::storage;

pub use quizzie_core::{
    CategoryCount, CorrectRanking, FileStorage, IncorrectRanking, MemoryStorage, StatisticsStore,
    StatisticsTable, Storage, StorageError,
};
pub use quizzie_core::{DEFAULT_TOP_LIMIT, RANDOM_MIX_CATEGORY, STATS_KEY, VERSION};
