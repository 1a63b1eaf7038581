//! Trading signal engine for a single instrument.
//!
//! Price series → indicators → per-observation trading state → edge-triggered
//! alert against the last persisted state.

pub mod alerts;
pub mod common;
pub mod config;
pub mod core;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod signals;
pub mod state;

pub use error::EngineError;
