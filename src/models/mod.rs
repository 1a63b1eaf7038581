//! Shared data models spanning the engine layers.

pub mod indicators;
pub mod series;
pub mod signal;

pub use indicators::{IndicatorParams, IndicatorRow};
pub use series::{Observation, PriceSeries, SeriesError};
pub use signal::{AlertEvent, AnnotatedRow, SeriesReport, SignalRecord, TradingState};
