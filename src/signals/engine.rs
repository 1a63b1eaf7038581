//! Runs the indicator pipeline and classifier over a whole series.

use crate::indicators::error::IndicatorError;
use crate::indicators::pipeline::IndicatorPipeline;
use crate::models::indicators::IndicatorParams;
use crate::models::series::PriceSeries;
use crate::models::signal::{AnnotatedRow, SeriesReport};
use crate::signals::classifier::classify;

#[derive(Debug, Clone, Copy, Default)]
pub struct SignalEngine {
    pipeline: IndicatorPipeline,
}

impl SignalEngine {
    pub fn new(params: IndicatorParams) -> Result<Self, IndicatorError> {
        Ok(Self {
            pipeline: IndicatorPipeline::new(params)?,
        })
    }

    pub fn params(&self) -> &IndicatorParams {
        self.pipeline.params()
    }

    /// Indicator row and trading state for every observation, oldest first.
    pub fn evaluate(&self, series: &PriceSeries) -> SeriesReport {
        let rows = self
            .pipeline
            .compute(series)
            .into_iter()
            .zip(series.observations())
            .map(|(indicators, observation)| AnnotatedRow {
                state: classify(&indicators, observation.close),
                observation: observation.clone(),
                indicators,
            })
            .collect();

        SeriesReport { rows }
    }
}
