use std::time::{Duration, Instant};

/// Fixed-period tick source.
///
/// The first poll fires immediately; later polls fire once at least `interval`
/// has passed since the previous tick.
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    interval: Duration,
    last_tick: Option<Instant>,
    running: bool,
}

impl IntervalTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_tick: None,
            running: true,
        }
    }

    pub fn should_tick(&self, now: Instant) -> bool {
        if !self.running {
            return false;
        }
        match self.last_tick {
            Some(last) => now.saturating_duration_since(last) >= self.interval,
            None => true,
        }
    }

    /// Time left until the next tick is due.
    pub fn remaining(&self, now: Instant) -> Duration {
        match self.last_tick {
            Some(last) => self
                .interval
                .saturating_sub(now.saturating_duration_since(last)),
            None => Duration::ZERO,
        }
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

impl Default for IntervalTimer {
    fn default() -> Self {
        Self::new(Duration::from_millis(1000))
    }
}

impl super::Scheduler for IntervalTimer {
    fn poll(&mut self, now: Instant) -> bool {
        if self.should_tick(now) {
            self.last_tick = Some(now);
            true
        } else {
            false
        }
    }

    fn next_due(&self, now: Instant) -> Option<Duration> {
        self.running.then(|| self.remaining(now))
    }

    fn cancel(&mut self) {
        self.stop();
    }
}
