//! Cooperative task model and scheduler.

pub mod scheduler;
pub mod task;

pub use scheduler::{Scheduler, SchedulerFull};
pub use task::{PollResult, Task};
