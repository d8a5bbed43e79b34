//! One-shot deferred task scheduling.
//!
//! The host runs registration bookkeeping of its own within the current
//! scheduling cycle, so corrective work (the permission fixup pass) must
//! not run synchronously. `run_next_tick` queues a task for the *next*
//! cycle; [`TickQueue`] is the cooperative in-process implementation.

use std::collections::VecDeque;

use parking_lot::Mutex;

/// A deferred unit of work.
pub type Task = Box<dyn FnOnce() + Send>;

/// Scheduling seam of the host.
pub trait Scheduler: Send + Sync {
    /// Queue a task to run on the next scheduling cycle.
    fn run_next_tick(&self, task: Task);
}

/// FIFO tick queue. Each [`TickQueue::tick`] drains exactly one
/// generation: tasks queued while a generation runs wait for the next
/// tick.
#[derive(Default)]
pub struct TickQueue {
    queue: Mutex<VecDeque<Task>>,
}

impl TickQueue {
    /// Empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tasks waiting for the next tick.
    pub fn pending(&self) -> usize {
        self.queue.lock().len()
    }

    /// Run one generation of queued tasks.
    pub fn tick(&self) {
        let generation: Vec<Task> = {
            let mut queue = self.queue.lock();
            queue.drain(..).collect()
        };
        for task in generation {
            task();
        }
    }
}

impl Scheduler for TickQueue {
    fn run_next_tick(&self, task: Task) {
        self.queue.lock().push_back(task);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn test_tasks_run_on_tick_not_on_queue() {
        let queue = TickQueue::new();
        let ran = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&ran);
        queue.run_next_tick(Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        assert_eq!(ran.load(Ordering::SeqCst), 0);
        assert_eq!(queue.pending(), 1);
        queue.tick();
        assert_eq!(ran.load(Ordering::SeqCst), 1);
        assert_eq!(queue.pending(), 0);
    }

    #[test]
    fn test_tasks_queued_during_a_tick_wait_for_the_next() {
        let queue = Arc::new(TickQueue::new());
        let ran = Arc::new(AtomicUsize::new(0));

        let inner_queue = Arc::clone(&queue);
        let inner_ran = Arc::clone(&ran);
        queue.run_next_tick(Box::new(move || {
            let counter = Arc::clone(&inner_ran);
            inner_queue.run_next_tick(Box::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }));
        }));

        queue.tick();
        assert_eq!(ran.load(Ordering::SeqCst), 0);
        queue.tick();
        assert_eq!(ran.load(Ordering::SeqCst), 1);
    }
}
