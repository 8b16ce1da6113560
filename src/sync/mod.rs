//! Synchronization primitives shared across the interrupt/poll boundary.

pub mod mailbox;
pub mod semaphore;

pub use mailbox::Mailbox;
pub use semaphore::Semaphore;
