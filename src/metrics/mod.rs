mod sampler;

pub use sampler::*;

use thiserror::Error;

/// A single CPU utilization reading in percent.
///
/// Usually within `0.0..=100.0`, but nothing clamps it: some platforms report
/// short spikes above 100.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sample(f32);

impl Sample {
    pub fn new(percent: f32) -> Self {
        Self(percent)
    }

    pub fn percent(&self) -> f32 {
        self.0
    }

    /// Whole percent for the numeric label, truncated toward zero.
    pub fn whole_percent(&self) -> i32 {
        self.0 as i32
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetricError {
    #[error("CPU usage metric unavailable: {reason}")]
    MetricUnavailable { reason: String },
    #[error("failed to read CPU usage: {reason}")]
    ReadFailed { reason: String },
}

pub type MetricResult<T> = Result<T, MetricError>;

/// Source of live CPU readings.
///
/// Implementations report usage accumulated since the previous call, so the
/// first reading after construction may be an outlier.
pub trait Sampler {
    fn read(&mut self) -> MetricResult<Sample>;
}

impl<S: Sampler + ?Sized> Sampler for Box<S> {
    fn read(&mut self) -> MetricResult<Sample> {
        (**self).read()
    }
}
