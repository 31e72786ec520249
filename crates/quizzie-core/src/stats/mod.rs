//! Statistics storage and ranking
//!
//! Keeps the per-category answer table and derives the top categories
//! by correct and incorrect answers.

pub mod store;
pub mod types;
