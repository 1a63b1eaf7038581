use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndicatorError {
    #[error("indicator window `{name}` must be at least 1")]
    InvalidWindow { name: &'static str },
}
