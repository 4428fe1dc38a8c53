//! # Metadata Index
//!
//! The index maps a document's path relative to the storage root
//! (`articles/paper_2021.pdf`) to the metadata only the user can provide:
//! category, year, author, title and when it was added.
//!
//! The filesystem stays the authority on existence, name and size. An entry
//! whose file disappeared is stale but harmless, and a file with no entry is
//! still listed with default metadata (see [`crate::commands::list`]).
//!
//! ## On-disk Format
//!
//! ```text
//! {
//!     "articles/paper_2021.pdf": {
//!         "type": "articles",
//!         "year": 2021,
//!         "author": "Silva",
//!         "title": "paper_2021",
//!         "added_date": "2024-03-01T10:22:13.511Z",
//!         "file_size": 18233
//!     }
//! }
//! ```
//!
//! `file_size` is the size at add time and is kept for compatibility only;
//! queries always stat the live file.

use crate::model::Category;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexEntry {
    #[serde(rename = "type")]
    pub category: Category,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "added_date", with = "timestamp")]
    pub added_at: DateTime<Utc>,
    #[serde(default)]
    pub file_size: u64,
}

/// The whole index, rewritten wholesale on every mutation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetadataIndex {
    entries: BTreeMap<String, IndexEntry>,
}

impl MetadataIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&IndexEntry> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, entry: IndexEntry) {
        self.entries.insert(key.into(), entry);
    }

    pub fn remove(&mut self, key: &str) -> Option<IndexEntry> {
        self.entries.remove(key)
    }

    /// Moves the entry stored under `from` to `to`. Returns a mutable handle
    /// to the moved entry, or `None` when `from` had no entry.
    pub fn rekey(&mut self, from: &str, to: &str) -> Option<&mut IndexEntry> {
        let entry = self.entries.remove(from)?;
        self.entries.insert(to.to_string(), entry);
        self.entries.get_mut(to)
    }

    /// Drops every entry for which `keep` returns false and reports how many
    /// were dropped.
    pub fn retain<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&str, &IndexEntry) -> bool,
    {
        let before = self.entries.len();
        self.entries.retain(|k, v| keep(k, v));
        before - self.entries.len()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// RFC 3339 on write. On read, timestamps without an offset
/// (`2023-10-01T12:00:00.123456`) are accepted as UTC.
mod timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if let Ok(dt) = DateTime::parse_from_rfc3339(&raw) {
            return Ok(dt.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| naive.and_utc())
            .map_err(|e| de::Error::custom(format!("invalid added_date '{}': {}", raw, e)))
    }
}
