//! Monotonic tick counter, the system's sole time source.
//!
//! The counter is advanced by a periodic hardware interrupt (the tick source,
//! typically 1 ms) calling [`TickCounter::tick`]. Everything else only reads
//! it. The counter is fixed-width and wraps; consumers must compare with
//! wrap-tolerant arithmetic, which [`crate::timer::Timer`] does.
//!
//! Platform code owns the instance, usually as a `static`:
//!
//! ```
//! use coop_core::TickCounter;
//!
//! static CLOCK: TickCounter = TickCounter::new();
//!
//! // called from the periodic timer ISR
//! fn systick_handler() {
//!     CLOCK.tick();
//! }
//! # systick_handler();
//! # assert_eq!(CLOCK.now(), 1);
//! ```

use core::cell::Cell;
use critical_section::Mutex;

/// Wrapping tick counter shared between the tick interrupt and polled tasks.
///
/// Single writer (the tick ISR), many readers. Both sides go through a
/// critical section so a read never observes a torn update on targets
/// without atomic 32-bit loads.
pub struct TickCounter {
    ticks: Mutex<Cell<u32>>,
}

impl TickCounter {
    /// New counter starting at zero.
    pub const fn new() -> Self {
        Self {
            ticks: Mutex::new(Cell::new(0)),
        }
    }

    /// Advance the counter by one tick. Interrupt context only; the tick
    /// source must call this exactly once per tick period.
    #[inline]
    pub fn tick(&self) {
        critical_section::with(|cs| {
            let t = self.ticks.borrow(cs);
            t.set(t.get().wrapping_add(1));
        });
    }

    /// Current tick count. Pure read, no side effects.
    #[inline]
    pub fn now(&self) -> u32 {
        critical_section::with(|cs| self.ticks.borrow(cs).get())
    }
}

impl Default for TickCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let clock = TickCounter::new();
        assert_eq!(clock.now(), 0);
    }

    #[test]
    fn tick_advances_by_one() {
        let clock = TickCounter::new();
        for expected in 1..=5 {
            clock.tick();
            assert_eq!(clock.now(), expected);
        }
    }

    #[test]
    fn read_has_no_side_effect() {
        let clock = TickCounter::new();
        clock.tick();
        assert_eq!(clock.now(), 1);
        assert_eq!(clock.now(), 1);
    }
}
