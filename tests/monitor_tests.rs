//! Tick dispatch, sampling failures and the window view, driven without a real
//! clock or window.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use cpumon::components::cpu_view::{BoxedSampler, CpuView};
use cpumon::components::settings::AppConfig;
use cpumon::dispatch::{Dispatcher, IntervalTimer, Scheduler};
use cpumon::graph::{GraphConfig, RecordingSurface, SurfaceSize};
use cpumon::metrics::{MetricError, MetricResult, Sample, Sampler};
use cpumon::monitor::{CpuMonitor, UNAVAILABLE_LABEL};
use egui::{Color32, Stroke};

/// Replays canned readings, then fails.
#[derive(Debug, Default)]
struct ScriptedSampler {
    readings: VecDeque<f32>,
}

impl ScriptedSampler {
    fn new(readings: &[f32]) -> Self {
        Self {
            readings: readings.iter().copied().collect(),
        }
    }
}

impl Sampler for ScriptedSampler {
    fn read(&mut self) -> MetricResult<Sample> {
        self.readings
            .pop_front()
            .map(Sample::new)
            .ok_or_else(|| MetricError::ReadFailed {
                reason: "script exhausted".to_owned(),
            })
    }
}

/// Fires whenever told to.
#[derive(Debug, Default)]
struct ManualScheduler {
    due: bool,
    cancelled: bool,
}

impl Scheduler for ManualScheduler {
    fn poll(&mut self, _now: Instant) -> bool {
        !self.cancelled && std::mem::take(&mut self.due)
    }

    fn next_due(&self, _now: Instant) -> Option<Duration> {
        (!self.cancelled).then_some(Duration::ZERO)
    }

    fn cancel(&mut self) {
        self.cancelled = true;
    }
}

fn pen() -> Stroke {
    Stroke::new(1.0, Color32::RED)
}

fn monitor(readings: &[f32]) -> CpuMonitor<ScriptedSampler> {
    CpuMonitor::new(ScriptedSampler::new(readings), GraphConfig::default(), pen()).unwrap()
}

#[test]
fn tick_then_render_records_one_point() {
    let mut monitor = monitor(&[25.0, 75.0]);
    let mut dispatcher = Dispatcher::new(ManualScheduler::default());
    let mut surface = RecordingSurface::new(100, 80);
    let now = Instant::now();

    assert!(!dispatcher.tick(now, &mut monitor));
    assert_eq!(monitor.label(), "0%");

    for _ in 0..2 {
        dispatcher.scheduler_due();
        assert!(dispatcher.tick(now, &mut monitor));
        dispatcher.render(&mut monitor, &mut surface);
    }

    assert_eq!(dispatcher.ticks(), 2);
    assert_eq!(monitor.graph().history().as_vec(), vec![60, 20]);
    assert_eq!(monitor.label(), "75%");
}

#[test]
fn failed_read_cancels_ticks_and_keeps_graph() {
    let mut monitor = monitor(&[40.0]);
    let mut dispatcher = Dispatcher::new(ManualScheduler::default());
    let mut surface = RecordingSurface::new(100, 80);
    let now = Instant::now();

    dispatcher.scheduler_due();
    dispatcher.tick(now, &mut monitor);
    dispatcher.render(&mut monitor, &mut surface);

    dispatcher.scheduler_due();
    assert!(!dispatcher.tick(now, &mut monitor));
    assert_eq!(dispatcher.ticks(), 1);
    assert!(!monitor.is_sampling());
    assert!(matches!(monitor.failure(), Some(MetricError::ReadFailed { .. })));
    assert_eq!(dispatcher.next_due(now), None);

    // Last good reading stays on the label and the graph keeps its point.
    assert_eq!(monitor.label(), "40%");
    assert_eq!(monitor.graph().history().as_vec(), vec![48]);

    dispatcher.scheduler_due();
    assert!(!dispatcher.tick(now, &mut monitor));
}

#[test]
fn unavailable_metric_shows_placeholder() {
    let err = MetricError::MetricUnavailable {
        reason: "sandboxed".to_owned(),
    };
    let mut monitor: CpuMonitor<ScriptedSampler> =
        CpuMonitor::open_with(|| Err(err.clone()), GraphConfig::default(), pen()).unwrap();
    let mut surface = RecordingSurface::new(100, 80);

    assert!(!monitor.is_sampling());
    assert_eq!(monitor.failure(), Some(&err));
    assert_eq!(monitor.label(), UNAVAILABLE_LABEL);

    // The graph still draws its grid and a flat trace at the bottom.
    let mut dispatcher = Dispatcher::new(ManualScheduler::default());
    dispatcher.render(&mut monitor, &mut surface);
    assert_eq!(surface.lines.len(), 10);
    assert_eq!(monitor.graph().history().as_vec(), vec![80]);
}

#[test]
fn label_truncates_to_whole_percent() {
    let mut monitor = monitor(&[99.9, 0.4]);
    let mut dispatcher = Dispatcher::new(IntervalTimer::new(Duration::from_millis(1000)));
    let start = Instant::now();

    dispatcher.tick(start, &mut monitor);
    assert_eq!(monitor.label(), "99%");

    dispatcher.tick(start + Duration::from_millis(1000), &mut monitor);
    assert_eq!(monitor.label(), "0%");
}

#[test]
fn view_renders_once_per_tick() {
    let config = AppConfig::default();
    let sampler: BoxedSampler = Box::new(ScriptedSampler::new(&[10.0, 20.0, 30.0]));
    let mut view = CpuView::with_sampler(Ok(sampler), &config).unwrap();
    let size = SurfaceSize::new(194, 77);
    let start = Instant::now();

    assert!(view.poll(start));
    view.frame(size);
    // Repaints between ticks replay the cached frame.
    view.frame(size);
    view.frame(size);
    assert_eq!(view.monitor().graph().history().len(), 1);

    assert!(!view.poll(start + Duration::from_millis(500)));
    view.frame(size);
    assert_eq!(view.monitor().graph().history().len(), 1);

    assert!(view.poll(start + Duration::from_millis(1000)));
    let frame = view.frame(size);
    assert_eq!(frame.lines.len(), 9 + 2);
    assert_eq!(view.monitor().graph().history().len(), 2);
    assert_eq!(view.label(), "20%");
}

#[test]
fn view_stops_recording_after_failed_read() {
    let config = AppConfig::default();
    let sampler: BoxedSampler = Box::new(ScriptedSampler::new(&[50.0]));
    let mut view = CpuView::with_sampler(Ok(sampler), &config).unwrap();
    let size = SurfaceSize::new(194, 77);
    let start = Instant::now();

    assert!(view.poll(start));
    view.frame(size);
    let before = view.monitor().graph().history().as_vec();
    assert_eq!(before, vec![38]);

    assert!(!view.poll(start + Duration::from_millis(1000)));
    view.frame(size);
    view.frame(size);
    assert_eq!(view.monitor().graph().history().as_vec(), before);
    assert_eq!(view.next_due(start + Duration::from_millis(1000)), None);
    assert_eq!(view.label(), "50%");
}

#[test]
fn view_without_sampler_never_schedules() {
    let config = AppConfig::default();
    let mut view = CpuView::with_sampler(
        Err(MetricError::MetricUnavailable {
            reason: "no counters".to_owned(),
        }),
        &config,
    )
    .unwrap();
    let now = Instant::now();

    assert!(!view.poll(now));
    assert_eq!(view.next_due(now), None);
    assert_eq!(view.label(), UNAVAILABLE_LABEL);
    assert_eq!(view.frame(SurfaceSize::new(194, 77)).lines.len(), 10);
}

trait ManualDue {
    fn scheduler_due(&mut self);
}

impl ManualDue for Dispatcher<ManualScheduler> {
    fn scheduler_due(&mut self) {
        self.scheduler_mut().due = true;
    }
}
