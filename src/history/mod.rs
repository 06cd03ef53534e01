//! Per-session conversion history.
//!
//! A [`History`] is append-only and keeps every record for the life of its
//! session. Displays only ever show the tail (see [`History::recent`]).

pub mod session;

pub use session::{Session, SessionStore};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};

use crate::models::ConversionRecord;

/// Entries shown by default in recent history displays
pub const DEFAULT_RECENT_LIMIT: usize = 5;

#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<ConversionRecord>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record and return a reference to it
    pub fn record(
        &mut self,
        timestamp: DateTime<Local>,
        category: &str,
        value: f64,
        from_unit: &str,
        result: f64,
        to_unit: &str,
    ) -> &ConversionRecord {
        self.push(ConversionRecord {
            timestamp,
            category: category.to_string(),
            value,
            from_unit: from_unit.to_string(),
            result,
            to_unit: to_unit.to_string(),
        })
    }

    pub fn push(&mut self, record: ConversionRecord) -> &ConversionRecord {
        self.entries.push(record);
        &self.entries[self.entries.len() - 1]
    }

    /// The last `min(len, n)` records, oldest first
    pub fn recent(&self, n: usize) -> &[ConversionRecord] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    pub fn last(&self) -> Option<&ConversionRecord> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConversionRecord> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[ConversionRecord] {
        &self.entries
    }

    /// All records as a pretty JSON array
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.entries).context("Failed to serialize history")
    }
}
