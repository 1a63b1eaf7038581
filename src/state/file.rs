use chrono::{DateTime, Utc};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::{SignalStore, StoreError};
use crate::models::signal::{ParseTradingStateError, SignalRecord, TradingState};

/// JSON record on local disk, replaced via write-to-temp-then-rename.
///
/// Also reads the bare `Buy`/`Sell`/`Hold` token format left behind by older
/// deployments; saves always write the JSON record.
#[derive(Debug, Clone)]
pub struct FileSignalStore {
    path: PathBuf,
}

impl FileSignalStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn parse(&self, contents: &str) -> Result<SignalRecord, StoreError> {
        let trimmed = contents.trim();

        if trimmed.is_empty() {
            // a truncated legacy token file; nothing to compare against
            warn!(path = %self.path.display(), "Signal state file is empty, treating as first run");
            return Ok(SignalRecord::default());
        }

        if trimmed.starts_with('{') {
            return serde_json::from_str(trimmed).map_err(|e| StoreError::Corrupt {
                path: self.path.clone(),
                reason: e.to_string(),
            });
        }

        let state: TradingState =
            trimmed
                .parse()
                .map_err(|e: ParseTradingStateError| StoreError::Corrupt {
                    path: self.path.clone(),
                    reason: e.to_string(),
                })?;

        Ok(SignalRecord {
            last_state: Some(state),
            as_of: None,
        })
    }

    fn write_atomically(&self, bytes: &[u8]) -> Result<(), std::io::Error> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let temp_path = self.temp_path();
        let result = (|| {
            let mut file = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&temp_path)?;
            file.write_all(bytes)?;
            file.flush()?;
            file.sync_all()?;
            fs::rename(&temp_path, &self.path)
        })();

        if result.is_err() {
            let _ = fs::remove_file(&temp_path);
        }
        result
    }
}

impl SignalStore for FileSignalStore {
    fn load(&self) -> Result<SignalRecord, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => self.parse(&contents),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No signal state yet");
                Ok(SignalRecord::default())
            }
            Err(source) => Err(StoreError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn save(&self, state: TradingState, as_of: DateTime<Utc>) -> Result<(), StoreError> {
        let record = SignalRecord::new(state, as_of);
        let json = serde_json::to_vec_pretty(&record).map_err(|e| StoreError::Write {
            path: self.path.clone(),
            source: std::io::Error::new(ErrorKind::InvalidData, e),
        })?;

        self.write_atomically(&json).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;

        debug!(path = %self.path.display(), state = %state, "Signal state saved");
        Ok(())
    }
}
