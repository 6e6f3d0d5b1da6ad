use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use lexis_core::types::{ExtractionBatch, Word};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::StoreError;

/// A saved extraction, oldest first in the history file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionRecord {
    pub id: Uuid,
    /// Unix epoch milliseconds
    pub time: i64,
    pub input: String,
    pub output: Vec<Word>,
}

impl ExtractionRecord {
    pub fn new(batch: ExtractionBatch) -> Self {
        Self {
            id: Uuid::new_v4(),
            time: Utc::now().timestamp_millis(),
            input: batch.input,
            output: batch.output,
        }
    }

    pub fn recorded_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.time)
    }
}

/// Extraction history backed by a JSON file
pub struct HistoryStore {
    path: Option<PathBuf>,
    records: Vec<ExtractionRecord>,
}

impl HistoryStore {
    /// History that is never written to disk
    pub fn in_memory() -> Self {
        Self {
            path: None,
            records: Vec::new(),
        }
    }

    /// Load history from `path`, starting empty if the file does not exist yet
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let records = if path.exists() {
            let data = fs::read_to_string(&path)?;
            serde_json::from_str(&data)?
        } else {
            tracing::info!("No history at {}, starting empty", path.display());
            Vec::new()
        };

        Ok(Self {
            path: Some(path),
            records,
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Append a batch as the newest record
    pub fn add(&mut self, batch: ExtractionBatch) -> &ExtractionRecord {
        self.records.push(ExtractionRecord::new(batch));
        let index = self.records.len() - 1;
        &self.records[index]
    }

    pub fn save(&self) -> Result<(), StoreError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(&self.records)?)?;
        tracing::debug!("Saved {} records to {}", self.records.len(), path.display());
        Ok(())
    }

    pub fn all(&self) -> &[ExtractionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Result<&ExtractionRecord, StoreError> {
        self.records
            .iter()
            .find(|r| r.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    pub fn position(&self, id: Uuid) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    pub fn latest(&self) -> Option<&ExtractionRecord> {
        self.records.last()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}
