//! Tick sources driving the exercise timer.
//!
//! The session never reads the clock itself. The UI loop owns a
//! [`TickSource`], starts and stops it alongside the timer, and feeds the
//! drained tick count back in as an action. Tests swap in a
//! [`ManualTicker`] to advance time deterministically.

use std::time::{Duration, Instant};

/// Start/stop control over a periodic tick.
pub trait TickSource {
    /// Begin emitting ticks, counting from now.
    fn start(&mut self);

    /// Stop emitting ticks and discard any that are pending.
    fn stop(&mut self);

    /// Whether the source is currently emitting.
    fn is_active(&self) -> bool;

    /// Number of whole ticks elapsed since the last call.
    fn take_ticks(&mut self) -> u64;
}

/// Wall-clock ticker counting whole intervals on a monotonic clock.
///
/// Ticks are derived from elapsed time rather than poll count, so a slow
/// UI loop never loses seconds.
#[derive(Debug, Clone)]
pub struct IntervalTicker {
    interval: Duration,
    anchor: Option<Instant>,
}

impl IntervalTicker {
    /// Create a ticker. A zero interval is raised to one millisecond.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            anchor: None,
        }
    }

    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    fn start_at(&mut self, now: Instant) {
        self.anchor = Some(now);
    }

    pub(crate) fn take_ticks_at(&mut self, now: Instant) -> u64 {
        let Some(anchor) = self.anchor else {
            return 0;
        };
        let elapsed = now.saturating_duration_since(anchor);
        let ticks = (elapsed.as_nanos() / self.interval.as_nanos()) as u64;
        if ticks > 0 {
            // Keep the remainder so partial intervals carry over.
            self.anchor = Some(anchor + self.interval * ticks as u32);
        }
        ticks
    }
}

impl Default for IntervalTicker {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

impl TickSource for IntervalTicker {
    fn start(&mut self) {
        self.start_at(Instant::now());
    }

    fn stop(&mut self) {
        self.anchor = None;
    }

    fn is_active(&self) -> bool {
        self.anchor.is_some()
    }

    fn take_ticks(&mut self) -> u64 {
        self.take_ticks_at(Instant::now())
    }
}

/// Hand-driven ticker for tests and scripted demos.
#[derive(Debug, Clone, Default)]
pub struct ManualTicker {
    active: bool,
    pending: u64,
    starts: u32,
    stops: u32,
}

impl ManualTicker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate `ticks` intervals passing. Ignored while inactive.
    pub fn advance(&mut self, ticks: u64) {
        if self.active {
            self.pending = self.pending.saturating_add(ticks);
        }
    }

    /// How many times the source was started.
    #[must_use]
    pub const fn starts(&self) -> u32 {
        self.starts
    }

    /// How many times the source was stopped while active.
    #[must_use]
    pub const fn stops(&self) -> u32 {
        self.stops
    }
}

impl TickSource for ManualTicker {
    fn start(&mut self) {
        self.active = true;
        self.pending = 0;
        self.starts += 1;
    }

    fn stop(&mut self) {
        if self.active {
            self.stops += 1;
        }
        self.active = false;
        self.pending = 0;
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn take_ticks(&mut self) -> u64 {
        std::mem::take(&mut self.pending)
    }
}

impl<T: TickSource + ?Sized> TickSource for Box<T> {
    fn start(&mut self) {
        (**self).start();
    }

    fn stop(&mut self) {
        (**self).stop();
    }

    fn is_active(&self) -> bool {
        (**self).is_active()
    }

    fn take_ticks(&mut self) -> u64 {
        (**self).take_ticks()
    }
}
