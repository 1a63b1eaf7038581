//! Price observations and the ordered series the indicator pipeline runs over.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One OHLC bar for the instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
}

impl Observation {
    pub fn new(
        timestamp: DateTime<Utc>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
    ) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume: None,
        }
    }

    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = Some(volume);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeriesError {
    #[error("price series is empty")]
    Empty,
    #[error("observation {index} at {timestamp} is not after its predecessor")]
    NotIncreasing {
        index: usize,
        timestamp: DateTime<Utc>,
    },
}

/// Non-empty sequence of observations, strictly increasing by timestamp.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSeries {
    observations: Vec<Observation>,
}

impl PriceSeries {
    /// Build a series from observations that are already ordered and deduplicated.
    pub fn new(observations: Vec<Observation>) -> Result<Self, SeriesError> {
        if observations.is_empty() {
            return Err(SeriesError::Empty);
        }

        for (index, pair) in observations.windows(2).enumerate() {
            if pair[1].timestamp <= pair[0].timestamp {
                return Err(SeriesError::NotIncreasing {
                    index: index + 1,
                    timestamp: pair[1].timestamp,
                });
            }
        }

        Ok(Self { observations })
    }

    /// Sort ascending and drop duplicate timestamps, keeping the last occurrence.
    ///
    /// Used by suppliers whose payloads arrive newest-first or may repeat a bar.
    pub fn from_unordered(mut observations: Vec<Observation>) -> Result<Self, SeriesError> {
        // stable sort keeps arrival order among equal timestamps
        observations.sort_by_key(|o| o.timestamp);

        let mut deduped: Vec<Observation> = Vec::with_capacity(observations.len());
        for observation in observations {
            match deduped.last_mut() {
                Some(last) if last.timestamp == observation.timestamp => *last = observation,
                _ => deduped.push(observation),
            }
        }

        Self::new(deduped)
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn closes(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.close).collect()
    }

    pub fn latest(&self) -> &Observation {
        // non-empty by construction
        &self.observations[self.observations.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}
