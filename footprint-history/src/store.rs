//! History storage backends

use crate::errors::{HistoryError, HistoryResult};
use crate::record::CalculationRecord;
use chrono::{DateTime, Utc};
use footprint_core::{ConsumptionInput, EmissionResult};
use log::debug;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Storage for calculation records.
pub trait HistoryStore {
    /// Store a calculation and return its id.
    ///
    /// Fails with [`HistoryError::IdsExhausted`] once no unused id remains.
    fn append(
        &mut self,
        user: &str,
        recorded_at: DateTime<Utc>,
        name: &str,
        input: ConsumptionInput,
        result: EmissionResult,
    ) -> HistoryResult<u64>;

    fn get(&self, id: u64) -> HistoryResult<&CalculationRecord>;

    /// Records for a user, oldest first. Ties are broken by id.
    fn list_for_user(&self, user: &str) -> Vec<&CalculationRecord>;

    fn remove(&mut self, id: u64) -> HistoryResult<CalculationRecord>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// History held in memory, with JSON import and export.
#[derive(Debug, Clone)]
pub struct InMemoryHistory {
    records: BTreeMap<u64, CalculationRecord>,
    /// `None` once a record holds `u64::MAX`
    next_id: Option<u64>,
}

impl InMemoryHistory {
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
            next_id: Some(1),
        }
    }

    fn insert(&mut self, record: CalculationRecord) {
        self.next_id = match (self.next_id, record.id.checked_add(1)) {
            (Some(next), Some(after)) => Some(next.max(after)),
            _ => None,
        };
        self.records.insert(record.id, record);
    }

    /// All records as pretty-printed JSON, ordered by id.
    pub fn export_json(&self) -> HistoryResult<String> {
        let records: Vec<&CalculationRecord> = self.records.values().collect();
        let json = serde_json::to_string_pretty(&records)?;
        debug!("Exported {} calculation records", records.len());
        Ok(json)
    }

    /// Merge records from JSON produced by [`InMemoryHistory::export_json`].
    ///
    /// Imported records replace existing records with the same id. Returns the
    /// number of records read.
    pub fn import_json(&mut self, json: &str) -> HistoryResult<usize> {
        let records: Vec<CalculationRecord> = serde_json::from_str(json)?;
        let count = records.len();
        for record in records {
            self.insert(record);
        }
        debug!("Imported {} calculation records", count);
        Ok(count)
    }

    /// Write the history to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> HistoryResult<PathBuf> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.export_json()?)?;
        debug!("Saved history to {}", path.display());
        Ok(path.to_path_buf())
    }

    /// Read a history previously written by [`InMemoryHistory::save`].
    pub fn load(path: impl AsRef<Path>) -> HistoryResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let mut history = Self::new();
        history.import_json(&json)?;
        debug!("Loaded history from {}", path.display());
        Ok(history)
    }
}

impl Default for InMemoryHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryStore for InMemoryHistory {
    fn append(
        &mut self,
        user: &str,
        recorded_at: DateTime<Utc>,
        name: &str,
        input: ConsumptionInput,
        result: EmissionResult,
    ) -> HistoryResult<u64> {
        let id = self.next_id.ok_or(HistoryError::IdsExhausted)?;
        self.insert(CalculationRecord {
            id,
            user: user.to_string(),
            recorded_at,
            name: name.to_string(),
            inputs: input,
            result,
        });
        debug!("Recorded calculation {} for {}", id, user);
        Ok(id)
    }

    fn get(&self, id: u64) -> HistoryResult<&CalculationRecord> {
        self.records.get(&id).ok_or(HistoryError::NotFound(id))
    }

    fn list_for_user(&self, user: &str) -> Vec<&CalculationRecord> {
        let mut records: Vec<&CalculationRecord> = self
            .records
            .values()
            .filter(|record| record.user == user)
            .collect();
        records.sort_by_key(|record| (record.recorded_at, record.id));
        records
    }

    fn remove(&mut self, id: u64) -> HistoryResult<CalculationRecord> {
        self.records.remove(&id).ok_or(HistoryError::NotFound(id))
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
