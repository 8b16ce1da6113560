//! Cooperative multitasking core for bare-metal control loops.
//!
//! Several logical tasks share one thread of execution. Each task is a
//! resumable state machine polled by a central loop; it suspends at explicit
//! wait points and resumes when its predicate becomes true. Interrupt
//! handlers are the only asynchronous preemption, and they talk to tasks
//! exclusively through the primitives here:
//!
//! - [`TickCounter`] — wrapping monotonic counter fed by the tick interrupt
//! - [`Timer`] — wrap-tolerant interval expiry over the counter
//! - [`Semaphore`] — counting semaphore with an atomic check-and-decrement
//! - [`Mailbox`] — single-slot, overwrite-on-write byte hand-off
//! - [`Scheduler`] / [`Task`] — fixed-order round-robin polling
//! - [`SerialBridge`] / [`EchoTask`] — UART interrupt events bridged to one
//!   polled console task
//!
//! Blocked tasks are busy-polled: predicates are re-evaluated on every pass
//! instead of going through a wake list. That trades some responsiveness for
//! a scheduler with no queues and fixed memory use.
//!
//! No heap, no priorities, no preemption between tasks. Peripheral setup and
//! register I/O stay in platform code; this crate only defines the seams the
//! platform's ISRs call into.

#![cfg_attr(not(test), no_std)]

pub mod clock;
pub mod config;
pub mod rtos;
pub mod serial;
pub mod sync;
pub mod timer;

pub use clock::TickCounter;
pub use rtos::{PollResult, Scheduler, SchedulerFull, Task};
pub use serial::{EchoTask, LineBuffer, Overflow, SerialBridge};
pub use sync::{Mailbox, Semaphore};
pub use timer::Timer;
