use std::time::{Duration, Instant};

use crate::components::settings::AppConfig;
use crate::dispatch::{Dispatcher, IntervalTimer};
use crate::graph::{GraphResult, RecordingSurface, SurfaceSize};
use crate::metrics::{MetricResult, Sampler, SystemSampler};
use crate::monitor::CpuMonitor;

pub type BoxedSampler = Box<dyn Sampler>;

/// Graph and label state behind the main window.
///
/// egui repaints whole frames whenever it likes, but the graph must record
/// exactly one point per tick. The last rendered frame is therefore kept and
/// replayed until the next tick invalidates it.
pub struct CpuView {
    dispatcher: Dispatcher<IntervalTimer>,
    monitor: CpuMonitor<BoxedSampler>,
    frame: RecordingSurface,
    invalidated: bool,
}

impl CpuView {
    pub fn new(config: &AppConfig) -> GraphResult<Self> {
        Self::with_sampler(
            SystemSampler::new().map(|s| Box::new(s) as BoxedSampler),
            config,
        )
    }

    pub fn with_sampler(sampler: MetricResult<BoxedSampler>, config: &AppConfig) -> GraphResult<Self> {
        let monitor = CpuMonitor::open_with(|| sampler, config.graph, config.pen)?;
        Ok(Self {
            dispatcher: Dispatcher::new(IntervalTimer::new(config.tick_interval)),
            monitor,
            frame: RecordingSurface::default(),
            invalidated: true,
        })
    }

    /// Samples if a tick is due; returns whether one ran.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.monitor.is_sampling() {
            return false;
        }
        let ticked = self.dispatcher.tick(now, &mut self.monitor);
        self.invalidated |= ticked;
        ticked
    }

    /// Frame to draw for a surface of `size`, rendering a new one only after a tick.
    pub fn frame(&mut self, size: SurfaceSize) -> &RecordingSurface {
        if self.invalidated {
            self.frame = RecordingSurface::new(size.width, size.height);
            self.dispatcher.render(&mut self.monitor, &mut self.frame);
            self.invalidated = false;
        }
        &self.frame
    }

    pub fn label(&self) -> String {
        self.monitor.label()
    }

    pub fn monitor(&self) -> &CpuMonitor<BoxedSampler> {
        &self.monitor
    }

    pub fn next_due(&self, now: Instant) -> Option<Duration> {
        if self.monitor.is_sampling() {
            self.dispatcher.next_due(now)
        } else {
            None
        }
    }

    pub fn stop(&mut self) {
        self.dispatcher.stop();
    }
}
