use crate::dispatch::TickHandler;
use crate::graph::{GraphConfig, GraphResult, ScrollingGraph, Surface};
use crate::metrics::{MetricError, Sample, Sampler};
use egui::Stroke;
use log::warn;

/// Placeholder label shown when no sampler could be opened or sampling failed
/// before anything was read.
pub const UNAVAILABLE_LABEL: &str = "n/a";

/// Sampler plus strip-chart, driven by a [`crate::dispatch::Dispatcher`].
#[derive(Debug)]
pub struct CpuMonitor<S> {
    sampler: Option<S>,
    graph: ScrollingGraph,
    last_sample: Option<Sample>,
    failure: Option<MetricError>,
}

impl<S: Sampler> CpuMonitor<S> {
    pub fn new(sampler: S, config: GraphConfig, pen: Stroke) -> GraphResult<Self> {
        Ok(Self {
            sampler: Some(sampler),
            graph: ScrollingGraph::new(config, pen)?,
            last_sample: None,
            failure: None,
        })
    }

    /// Monitor whose sampler could not be opened. It renders an idle graph and
    /// the placeholder label.
    pub fn unavailable(error: MetricError, config: GraphConfig, pen: Stroke) -> GraphResult<Self> {
        warn!("CPU monitor running without a sampler: {error}");
        Ok(Self {
            sampler: None,
            graph: ScrollingGraph::new(config, pen)?,
            last_sample: None,
            failure: Some(error),
        })
    }

    /// Opens a sampler with `open` and falls back to [`Self::unavailable`]
    /// when that fails.
    pub fn open_with(
        open: impl FnOnce() -> Result<S, MetricError>,
        config: GraphConfig,
        pen: Stroke,
    ) -> GraphResult<Self> {
        match open() {
            Ok(sampler) => Self::new(sampler, config, pen),
            Err(err) => Self::unavailable(err, config, pen),
        }
    }

    pub fn graph(&self) -> &ScrollingGraph {
        &self.graph
    }

    pub fn failure(&self) -> Option<&MetricError> {
        self.failure.as_ref()
    }

    pub fn is_sampling(&self) -> bool {
        self.sampler.is_some()
    }

    /// Text for the numeric label, e.g. `37%`.
    pub fn label(&self) -> String {
        match (self.last_sample, &self.failure) {
            (Some(sample), _) => format!("{}%", sample.whole_percent()),
            (None, Some(_)) => UNAVAILABLE_LABEL.to_owned(),
            (None, None) => "0%".to_owned(),
        }
    }
}

impl<S: Sampler> TickHandler for CpuMonitor<S> {
    fn on_tick(&mut self) -> Result<(), MetricError> {
        let Some(sampler) = self.sampler.as_mut() else {
            return Err(self.failure.clone().unwrap_or(MetricError::MetricUnavailable {
                reason: "sampler closed".to_owned(),
            }));
        };

        match sampler.read() {
            Ok(sample) => {
                self.graph.update(sample);
                self.last_sample = Some(sample);
                Ok(())
            }
            Err(err) => {
                // Treated as permanent: close the counter, keep the graph.
                self.sampler = None;
                self.failure = Some(err.clone());
                Err(err)
            }
        }
    }

    fn on_render(&mut self, surface: &mut dyn Surface) {
        self.graph.paint(surface);
    }
}
