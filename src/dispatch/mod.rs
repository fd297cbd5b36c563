//! Tick and paint wiring between a host event loop and the monitor.
//!
//! The host owns the loop and calls [`Dispatcher::tick`] whenever it gets a
//! chance (every frame, in the egui shell) and [`Dispatcher::render`] from its
//! paint callback. A [`Scheduler`] decides which of those calls actually fire
//! a tick, so tests can drive time by hand.

mod timer;

pub use timer::*;

use crate::graph::Surface;
use crate::metrics::MetricError;
use log::{error, info};
use std::time::{Duration, Instant};

pub trait Scheduler {
    /// Returns `true` if a tick is due at `now`, and consumes it.
    fn poll(&mut self, now: Instant) -> bool;

    /// Time until the next tick, or `None` once cancelled.
    fn next_due(&self, now: Instant) -> Option<Duration>;

    fn cancel(&mut self);
}

/// Receiver of the periodic tick and of paint requests.
pub trait TickHandler {
    fn on_tick(&mut self) -> Result<(), MetricError>;
    fn on_render(&mut self, surface: &mut dyn Surface);
}

#[derive(Debug)]
pub struct Dispatcher<S> {
    scheduler: S,
    ticks: u64,
}

impl<S: Scheduler> Dispatcher<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            ticks: 0,
        }
    }

    /// Runs one tick on `handler` if the scheduler says one is due, returning
    /// `true` only when the tick produced a new sample.
    ///
    /// A failing tick cancels the scheduler for good: no further ticks are
    /// dispatched and the caller should not redraw for it.
    pub fn tick<H: TickHandler + ?Sized>(&mut self, now: Instant, handler: &mut H) -> bool {
        if !self.scheduler.poll(now) {
            return false;
        }

        match handler.on_tick() {
            Ok(()) => {
                self.ticks += 1;
                true
            }
            Err(err) => {
                error!("Sampling stopped after {} ticks: {}", self.ticks, err);
                self.scheduler.cancel();
                false
            }
        }
    }

    pub fn render<H: TickHandler + ?Sized>(&mut self, handler: &mut H, surface: &mut dyn Surface) {
        handler.on_render(surface);
    }

    pub fn next_due(&self, now: Instant) -> Option<Duration> {
        self.scheduler.next_due(now)
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn stop(&mut self) {
        info!("Stopping tick dispatch");
        self.scheduler.cancel();
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}
