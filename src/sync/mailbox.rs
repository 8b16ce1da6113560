//! Single-slot mailbox bridging interrupt and polled contexts.

use core::cell::Cell;
use critical_section::Mutex;

/// Holds at most one unread value. The producer (interrupt context)
/// overwrites unconditionally: a new arrival before the consumer polls
/// replaces the old value silently. Overrun is accepted data loss, not an
/// error; there is no backpressure and no queue.
pub struct Mailbox<T> {
    slot: Mutex<Cell<Option<T>>>,
}

impl<T> Mailbox<T> {
    /// New, empty mailbox.
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(Cell::new(None)),
        }
    }

    /// Deposit a value, overwriting any unread one. Interrupt-safe.
    pub fn post(&self, value: T) {
        critical_section::with(|cs| {
            self.slot.borrow(cs).set(Some(value));
        });
    }

    /// Take the value out, leaving the slot empty. `None` means the slot
    /// was already empty; a polled consumer uses this as its wait predicate.
    pub fn take(&self) -> Option<T> {
        critical_section::with(|cs| self.slot.borrow(cs).take())
    }

    /// True if no unread value is present.
    pub fn is_empty(&self) -> bool {
        critical_section::with(|cs| {
            let slot = self.slot.borrow(cs);
            let value = slot.take();
            let empty = value.is_none();
            slot.set(value);
            empty
        })
    }
}

impl<T> Default for Mailbox<T> {
    fn default() -> Self {
        Self::new()
    }
}
