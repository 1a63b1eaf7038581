use chrono::{DateTime, Utc};
use std::sync::Mutex;

use super::{SignalStore, StoreError};
use crate::models::signal::{SignalRecord, TradingState};

/// Process-local store, for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemorySignalStore {
    record: Mutex<SignalRecord>,
}

impl MemorySignalStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(record: SignalRecord) -> Self {
        Self {
            record: Mutex::new(record),
        }
    }
}

impl SignalStore for MemorySignalStore {
    fn load(&self) -> Result<SignalRecord, StoreError> {
        self.record
            .lock()
            .map(|record| *record)
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".to_string()))
    }

    fn save(&self, state: TradingState, as_of: DateTime<Utc>) -> Result<(), StoreError> {
        let mut record = self
            .record
            .lock()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".to_string()))?;
        *record = SignalRecord::new(state, as_of);
        Ok(())
    }
}
