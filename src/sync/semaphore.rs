//! Counting semaphore safe across the interrupt/poll boundary.

use core::cell::Cell;
use critical_section::Mutex;

/// Counting semaphore. [`signal`](Semaphore::signal) may be called from any
/// context including interrupt handlers; the blocking-wait idiom belongs to
/// poll context only (a handler cannot be re-polled).
///
/// There is no blocking `wait` method. A task blocks on a semaphore by using
/// [`try_acquire`](Semaphore::try_acquire) as its wait predicate and
/// returning `Pending` to the scheduler while it fails:
///
/// ```
/// use coop_core::{Semaphore, PollResult};
///
/// fn poll_step(sem: &Semaphore) -> PollResult {
///     if !sem.try_acquire() {
///         return PollResult::Pending; // re-polled later, predicate re-checked
///     }
///     // ... proceed past the wait ...
///     PollResult::Finished
/// }
/// # let sem = Semaphore::new(0);
/// # assert_eq!(poll_step(&sem), PollResult::Pending);
/// # sem.signal();
/// # assert_eq!(poll_step(&sem), PollResult::Finished);
/// ```
pub struct Semaphore {
    count: Mutex<Cell<u32>>,
}

impl Semaphore {
    /// New semaphore with the given initial count.
    pub const fn new(initial: u32) -> Self {
        Self {
            count: Mutex::new(Cell::new(initial)),
        }
    }

    /// Increment the count by one. Interrupt-safe. The count saturates
    /// instead of wrapping back to zero.
    pub fn signal(&self) {
        critical_section::with(|cs| {
            let c = self.count.borrow(cs);
            c.set(c.get().saturating_add(1));
        });
    }

    /// Compound check-and-decrement: if the count is positive, decrement it
    /// and return true, all inside one critical section.
    ///
    /// The check and the decrement cannot be interleaved by `signal` or by
    /// another poller, so the count never underflows even with several tasks
    /// waiting on the same semaphore. Which waiter wins is simply poll order.
    pub fn try_acquire(&self) -> bool {
        critical_section::with(|cs| {
            let c = self.count.borrow(cs);
            let n = c.get();
            if n > 0 {
                c.set(n - 1);
                true
            } else {
                false
            }
        })
    }

    /// Current count. Snapshot only; may be stale by the time it is used.
    pub fn count(&self) -> u32 {
        critical_section::with(|cs| self.count.borrow(cs).get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acquire_fails_at_zero() {
        let sem = Semaphore::new(0);
        assert!(!sem.try_acquire());
        assert_eq!(sem.count(), 0);
    }

    #[test]
    fn initial_count_grants_that_many_acquires() {
        let sem = Semaphore::new(3);
        assert!(sem.try_acquire());
        assert!(sem.try_acquire());
        assert!(sem.try_acquire());
        assert!(!sem.try_acquire());
    }

    #[test]
    fn accounting_holds() {
        // count == c0 + signals - acquires
        let sem = Semaphore::new(2);
        for _ in 0..5 {
            sem.signal();
        }
        let mut acquired = 0;
        for _ in 0..4 {
            if sem.try_acquire() {
                acquired += 1;
            }
        }
        assert_eq!(acquired, 4);
        assert_eq!(sem.count(), 2 + 5 - 4);
    }

    #[test]
    fn never_negative() {
        let sem = Semaphore::new(1);
        assert!(sem.try_acquire());
        assert!(!sem.try_acquire());
        assert!(!sem.try_acquire());
        assert_eq!(sem.count(), 0);
    }

    #[test]
    fn signal_saturates() {
        let sem = Semaphore::new(u32::MAX);
        sem.signal();
        assert_eq!(sem.count(), u32::MAX);
    }
}
