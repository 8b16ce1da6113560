//! Resumable task bodies.
//!
//! A task is an explicit state machine: an enum naming the segments between
//! wait points, plus whatever locals must survive a suspension, all stored in
//! the task struct. Each poll dispatches on the stored state and runs forward
//! until a wait predicate fails (return [`PollResult::Pending`] after
//! recording where to resume) or the body ends ([`PollResult::Finished`]).
//! Nothing outside the struct survives between polls; there is no private
//! call stack.
//!
//! ```
//! use coop_core::{PollResult, Task, TickCounter, Timer};
//!
//! enum State {
//!     SetHigh,
//!     WaitHigh,
//!     Done,
//! }
//!
//! struct Pulse<'a> {
//!     clock: &'a TickCounter,
//!     timer: Timer,
//!     state: State,
//! }
//!
//! impl Task for Pulse<'_> {
//!     fn poll(&mut self) -> PollResult {
//!         loop {
//!             match self.state {
//!                 State::SetHigh => {
//!                     // drive the pin high, then suspend for 200 ticks
//!                     self.timer.start(self.clock, 200);
//!                     self.state = State::WaitHigh;
//!                 }
//!                 State::WaitHigh => {
//!                     if !self.timer.expired(self.clock) {
//!                         return PollResult::Pending;
//!                     }
//!                     // drive the pin low
//!                     self.state = State::Done;
//!                 }
//!                 State::Done => return PollResult::Finished,
//!             }
//!         }
//!     }
//! }
//! ```

/// Outcome of one poll of a task body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollResult {
    /// The task hit a wait whose predicate is false (or has not started
    /// doing useful work yet) and yielded back to the scheduler.
    Pending,
    /// The task body ran to its end, or aborted. Terminal: every later poll
    /// must return `Finished` without doing work.
    Finished,
}

/// A cooperative task, polled once per scheduler pass.
///
/// `poll` must not block: it runs forward to the next unsatisfied wait and
/// returns. Wait predicates are re-evaluated from scratch on every poll;
/// there is no wake list. A task that cannot continue (internal failure)
/// returns `Finished` — there is no error propagation across tasks.
pub trait Task {
    fn poll(&mut self) -> PollResult;
}
