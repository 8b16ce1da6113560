//! Interval timers over the tick counter.
//!
//! A [`Timer`] is two fields, the tick value at arm time and the interval.
//! Expiry is recomputed from the clock on every query; there is no cached
//! expired flag and no cancellation. Resolution is one tick, jitter is
//! bounded by how often the owning task gets polled.

use crate::clock::TickCounter;

/// One-shot interval timer. Re-arm with [`Timer::start`] to reuse.
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    start: u32,
    interval: u32,
}

impl Timer {
    /// New timer. Until armed it reports expired (zero interval).
    pub const fn new() -> Self {
        Self {
            start: 0,
            interval: 0,
        }
    }

    /// Arm the timer: remember the current tick and the interval.
    pub fn start(&mut self, clock: &TickCounter, interval_ticks: u32) {
        self.start = clock.now();
        self.interval = interval_ticks;
    }

    /// True once `interval` ticks have elapsed since the last arm.
    ///
    /// The subtraction is wrapping, so the result stays correct across
    /// counter wraparound as long as the interval fits in the counter width.
    /// Stays true until the timer is re-armed.
    pub fn expired(&self, clock: &TickCounter) -> bool {
        clock.now().wrapping_sub(self.start) >= self.interval
    }

    /// Ticks elapsed since the last arm (wrap-tolerant).
    pub fn elapsed(&self, clock: &TickCounter) -> u32 {
        clock.now().wrapping_sub(self.start)
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}
