//! Statistics data model
//!
//! The table is persisted as one JSON object keyed by category name:
//! `{ "<category>": {"correct": <int>, "incorrect": <int>}, ... }`.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Answer counts for a single category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    /// Number of correctly answered questions
    #[serde(default)]
    pub correct: u64,
    /// Number of incorrectly answered questions
    #[serde(default)]
    pub incorrect: u64,
    /// Fields written by other tools, carried through unchanged
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl CategoryCount {
    /// Create a count with the given values and no extra fields
    pub fn new(correct: u64, incorrect: u64) -> Self {
        Self {
            correct,
            incorrect,
            extra: serde_json::Map::new(),
        }
    }

    /// Total answers recorded for this category
    pub fn total(&self) -> u64 {
        self.correct.saturating_add(self.incorrect)
    }

    /// Count one answer
    pub fn record(&mut self, is_correct: bool) {
        if is_correct {
            self.correct = self.correct.saturating_add(1);
        } else {
            self.incorrect = self.incorrect.saturating_add(1);
        }
    }
}

/// Stored value under one top-level key
#[derive(Debug, Clone, PartialEq)]
enum Slot {
    Count(CategoryCount),
    /// Anything that is not a count object, written back untouched
    Raw(serde_json::Value),
}

/// Mapping of category name to answer counts.
///
/// Iterates in first-insertion order, which is also the order categories
/// appear in the stored JSON document. Rankings rely on this order to
/// break ties.
///
/// Top-level values that are not count objects (`"version": 2`,
/// `"Music": null`) are kept in place and serialized back unchanged, but
/// are invisible to lookups, iteration and rankings.
///
/// Lookups scan linearly; tables hold a handful of quiz categories.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatisticsTable {
    entries: Vec<(String, Slot)>,
}

impl StatisticsTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of categories with counts
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(name, _)| name == key)
    }

    /// Look up the counts for a category
    pub fn get(&self, category: &str) -> Option<&CategoryCount> {
        match &self.entries[self.position(category)?].1 {
            Slot::Count(count) => Some(count),
            Slot::Raw(_) => None,
        }
    }

    /// Stored value under `key` that is not a count object
    pub fn raw(&self, key: &str) -> Option<&serde_json::Value> {
        match &self.entries[self.position(key)?].1 {
            Slot::Raw(value) => Some(value),
            Slot::Count(_) => None,
        }
    }

    /// Counts for a category, inserting `{0, 0}` at the end if absent.
    /// A non-count value under the same key is replaced in place.
    pub fn entry(&mut self, category: &str) -> &mut CategoryCount {
        let index = match self.position(category) {
            Some(index) => index,
            None => {
                self.entries
                    .push((category.to_string(), Slot::Count(CategoryCount::default())));
                self.entries.len() - 1
            }
        };
        let slot = &mut self.entries[index].1;
        if let Slot::Raw(_) = slot {
            *slot = Slot::Count(CategoryCount::default());
        }
        match slot {
            Slot::Count(count) => count,
            Slot::Raw(_) => unreachable!("raw slot replaced above"),
        }
    }

    /// Replace the counts for a category, keeping its position if present
    pub fn insert(&mut self, category: impl Into<String>, count: CategoryCount) {
        self.put(category.into(), Slot::Count(count));
    }

    fn put(&mut self, key: String, slot: Slot) {
        match self.position(&key) {
            Some(index) => self.entries[index].1 = slot,
            None => self.entries.push((key, slot)),
        }
    }

    /// Iterate categories with counts in table order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CategoryCount)> {
        self.entries.iter().filter_map(|(name, slot)| match slot {
            Slot::Count(count) => Some((name.as_str(), count)),
            Slot::Raw(_) => None,
        })
    }

    /// Sum of all answers across every category
    pub fn total_answers(&self) -> u64 {
        self.iter()
            .fold(0u64, |acc, (_, count)| acc.saturating_add(count.total()))
    }
}

impl<S: Into<String>> FromIterator<(S, CategoryCount)> for StatisticsTable {
    fn from_iter<I: IntoIterator<Item = (S, CategoryCount)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (category, count) in iter {
            table.insert(category, count);
        }
        table
    }
}

impl Serialize for StatisticsTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, slot) in &self.entries {
            match slot {
                Slot::Count(count) => map.serialize_entry(key, count)?,
                Slot::Raw(value) => map.serialize_entry(key, value)?,
            }
        }
        map.end()
    }
}

struct TableVisitor;

impl<'de> Visitor<'de> for TableVisitor {
    type Value = StatisticsTable;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of category names to answer counts")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut table = StatisticsTable::new();
        // Duplicate keys: last value wins, first position is kept
        while let Some((key, value)) = access.next_entry::<String, serde_json::Value>()? {
            let slot = match value {
                serde_json::Value::Object(_) => match CategoryCount::deserialize(&value) {
                    Ok(count) => Slot::Count(count),
                    Err(_) => Slot::Raw(value),
                },
                other => Slot::Raw(other),
            };
            table.put(key, slot);
        }
        Ok(table)
    }
}

impl<'de> Deserialize<'de> for StatisticsTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TableVisitor)
    }
}

/// Ranking row for the most correctly answered categories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectRanking {
    pub category: String,
    pub correct: u64,
    /// Correct plus incorrect answers
    pub total: u64,
}

/// Ranking row for the most incorrectly answered categories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncorrectRanking {
    pub category: String,
    pub incorrect: u64,
    /// Correct plus incorrect answers
    pub total: u64,
}
