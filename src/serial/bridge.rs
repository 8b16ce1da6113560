//! Bridge between one asynchronous byte channel and one polled task.
//!
//! The interrupt side deposits inbound bytes and transmit-complete events;
//! the task side consumes them from poll context. The two directions have
//! different loss policies:
//!
//! - Receive: single-slot, overwrite-on-write. A byte that arrives before
//!   the previous one was consumed replaces it. Overrun is silent.
//! - Transmit: no loss tolerated. Every armed byte must produce exactly one
//!   [`on_tx_complete`](SerialBridge::on_tx_complete) call, and the platform
//!   handler must disable further transmit-complete notification until the
//!   writer arms the next byte (arming re-enables it). A lost signal leaves
//!   the writer blocked forever; this is a construction error, not a runtime
//!   condition to retry.

use crate::sync::{Mailbox, Semaphore};

/// Shared state between the UART interrupt handler and the serial task.
///
/// Platform code typically keeps one as a `static` and calls the
/// interrupt-side methods from its UART ISR.
pub struct SerialBridge {
    rx: Mailbox<u8>,
    tx_done: Semaphore,
}

impl SerialBridge {
    pub const fn new() -> Self {
        Self {
            rx: Mailbox::new(),
            tx_done: Semaphore::new(0),
        }
    }

    // --- interrupt side ---

    /// Deposit a received byte, overwriting any unread one.
    pub fn on_byte_received(&self, byte: u8) {
        self.rx.post(byte);
    }

    /// Record one completed physical byte transmission. Exactly one call
    /// per armed byte; no coalescing.
    pub fn on_tx_complete(&self) {
        self.tx_done.signal();
    }

    // --- task side ---

    /// Consume the pending received byte, if any. `None` is the wait
    /// predicate for the consuming task.
    pub fn take_received(&self) -> Option<u8> {
        self.rx.take()
    }

    /// True if a received byte is waiting.
    pub fn has_received(&self) -> bool {
        !self.rx.is_empty()
    }

    /// Acknowledge one completed transmission (compound check-and-decrement
    /// on the TX semaphore). False means the armed byte is still in flight.
    pub fn try_ack_tx(&self) -> bool {
        self.tx_done.try_acquire()
    }
}

impl Default for SerialBridge {
    fn default() -> Self {
        Self::new()
    }
}
