pub mod error;
pub mod pipeline;

pub mod momentum;
pub mod trend;

pub use error::IndicatorError;
pub use pipeline::IndicatorPipeline;
