use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use serde::Serialize;
use uuid::Uuid;

use super::History;
use crate::convert::{ConversionError, convert, validate_input};
use crate::models::ConversionRecord;

/// One user's interaction context. Owns its history; the conversion table is
/// shared and read-only.
#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    history: History,
}

#[derive(Serialize)]
struct HistoryExport<'a> {
    session_id: Uuid,
    exported_at: DateTime<Local>,
    entries: &'a [ConversionRecord],
}

impl Session {
    pub fn new() -> Self {
        Self { id: Uuid::new_v4(), history: History::new() }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Validate, convert, and append to history. A failure leaves the
    /// history untouched.
    pub fn convert_and_record(
        &mut self,
        value: f64,
        from_unit: &str,
        to_unit: &str,
        category: &str,
    ) -> Result<&ConversionRecord, ConversionError> {
        self.convert_and_record_at(Local::now(), value, from_unit, to_unit, category)
    }

    pub fn convert_and_record_at(
        &mut self,
        timestamp: DateTime<Local>,
        value: f64,
        from_unit: &str,
        to_unit: &str,
        category: &str,
    ) -> Result<&ConversionRecord, ConversionError> {
        let value = validate_input(value)?;
        let result = convert(value, from_unit, to_unit, category)?;
        Ok(self.history.record(timestamp, category, value, from_unit, result, to_unit))
    }

    /// The last `min(len, n)` records, oldest first
    pub fn recent_history(&self, n: usize) -> &[ConversionRecord] {
        self.history.recent(n)
    }

    /// Serialize the full history as pretty JSON
    pub fn to_json(&self) -> Result<String> {
        let export = HistoryExport {
            session_id: self.id,
            exported_at: Local::now(),
            entries: self.history.entries(),
        };
        serde_json::to_string_pretty(&export).context("Failed to serialize session history")
    }

    /// Write the full history as JSON to `path`
    pub fn export_json(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write history export: {}", path.display()))?;
        tracing::info!(path = %path.display(), entries = self.history.len(), "exported history");
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Sessions keyed by id, each with an isolated history
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<Uuid, Session>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new session and return its id
    pub fn create(&mut self) -> Uuid {
        let session = Session::new();
        let id = session.id();
        self.sessions.insert(id, session);
        id
    }

    pub fn get(&self, id: &Uuid) -> Option<&Session> {
        self.sessions.get(id)
    }

    pub fn get_mut(&mut self, id: &Uuid) -> Option<&mut Session> {
        self.sessions.get_mut(id)
    }

    pub fn remove(&mut self, id: &Uuid) -> Option<Session> {
        self.sessions.remove(id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
