//! Fixed-order cooperative scheduler.
//!
//! Tasks are registered once and polled forever in registration order. There
//! are no priorities and no preemption between tasks; apparent concurrency
//! comes entirely from tasks yielding promptly at their wait points. Blocked
//! tasks are busy-polled: every pass re-evaluates every live task's wait
//! predicate. That costs one predicate check per blocked task per pass but
//! needs no wake queue and no per-task bookkeeping beyond one finished flag.

use crate::config::MAX_TASKS;
use crate::rtos::task::{PollResult, Task};

/// Returned by [`Scheduler::add_task`] when the task table is full.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulerFull;

struct Slot<'a> {
    task: &'a mut dyn Task,
    finished: bool,
}

/// Polls a fixed ordered list of tasks.
pub struct Scheduler<'a> {
    tasks: [Option<Slot<'a>>; MAX_TASKS],
    count: usize,
}

impl<'a> Scheduler<'a> {
    pub fn new() -> Self {
        Self {
            tasks: [(); MAX_TASKS].map(|_| None),
            count: 0,
        }
    }

    /// Register a task. Registration order is poll order for the lifetime
    /// of the scheduler; tasks cannot be removed.
    pub fn add_task(&mut self, task: &'a mut dyn Task) -> Result<(), SchedulerFull> {
        if self.count >= MAX_TASKS {
            return Err(SchedulerFull);
        }
        self.tasks[self.count] = Some(Slot {
            task,
            finished: false,
        });
        self.count += 1;
        Ok(())
    }

    /// Number of registered tasks.
    pub fn task_count(&self) -> usize {
        self.count
    }

    /// One scheduling pass: poll every live task exactly once, in
    /// registration order. Returns how many tasks are still unfinished.
    ///
    /// A task returning [`PollResult::Finished`] is skipped on later passes.
    pub fn poll_all(&mut self) -> usize {
        let mut live = 0;
        for slot in self.tasks.iter_mut().take(self.count) {
            if let Some(slot) = slot {
                if slot.finished {
                    continue;
                }
                match slot.task.poll() {
                    PollResult::Pending => live += 1,
                    PollResult::Finished => slot.finished = true,
                }
            }
        }
        live
    }

    /// The outer loop: schedule every task, forever. Interrupt handlers are
    /// the only thing that runs between polls.
    pub fn run(&mut self) -> ! {
        loop {
            self.poll_all();
        }
    }
}

impl Default for Scheduler<'_> {
    fn default() -> Self {
        Self::new()
    }
}
