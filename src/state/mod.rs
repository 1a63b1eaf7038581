//! Durable record of the last classified trading state.

pub mod file;
pub mod memory;

pub use file::FileSignalStore;
pub use memory::MemorySignalStore;

use chrono::{DateTime, Utc};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

use crate::models::signal::{SignalRecord, TradingState};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read signal state from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write signal state to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("signal state at {path} is corrupt: {reason}")]
    Corrupt { path: PathBuf, reason: String },
    #[error("signal state store is unavailable: {0}")]
    Unavailable(String),
}

/// Backing for the last-known trading state.
///
/// A store that has never been written loads as an empty record. `save`
/// replaces the record atomically: readers see either the old or the new
/// record, never a partial one. Stores assume a single writer at a time.
pub trait SignalStore: Send + Sync {
    fn load(&self) -> Result<SignalRecord, StoreError>;

    fn save(&self, state: TradingState, as_of: DateTime<Utc>) -> Result<(), StoreError>;
}

impl<T: SignalStore + ?Sized> SignalStore for Arc<T> {
    fn load(&self) -> Result<SignalRecord, StoreError> {
        (**self).load()
    }

    fn save(&self, state: TradingState, as_of: DateTime<Utc>) -> Result<(), StoreError> {
        (**self).save(state, as_of)
    }
}
