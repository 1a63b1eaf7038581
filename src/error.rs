//! Errors that fail an evaluation cycle.

use thiserror::Error;

use crate::indicators::error::IndicatorError;
use crate::state::StoreError;

/// Fatal outcome of a cycle. Supply and notifier failures are not here: they
/// are recovered in place and reported through the cycle outcome instead.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Indicator(#[from] IndicatorError),
}
