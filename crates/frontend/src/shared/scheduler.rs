//! Delayed one-shot tasks.

use gloo_timers::callback::Timeout;

pub trait Scheduler {
    /// Run `task` once after `delay_ms`. Scheduled tasks cannot be cancelled.
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

/// Browser `setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, task).forget();
    }
}

/// Scheduler driven by a manual clock.
#[cfg(test)]
#[derive(Default)]
pub struct ManualScheduler {
    now: std::cell::Cell<u64>,
    pending: std::cell::RefCell<Vec<(u64, Box<dyn FnOnce()>)>>,
}

#[cfg(test)]
impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Move the clock forward and run every task that became due, in order.
    pub fn advance(&self, ms: u64) {
        let now = self.now.get() + ms;
        self.now.set(now);
        loop {
            let due = {
                let mut pending = self.pending.borrow_mut();
                let next = pending
                    .iter()
                    .enumerate()
                    .filter(|(_, (at, _))| *at <= now)
                    .min_by_key(|(_, (at, _))| *at)
                    .map(|(idx, _)| idx);
                next.map(|idx| pending.remove(idx))
            };
            match due {
                Some((_, task)) => task(),
                None => break,
            }
        }
    }
}

#[cfg(test)]
impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let at = self.now.get() + u64::from(delay_ms);
        self.pending.borrow_mut().push((at, task));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_manual_scheduler_runs_due_tasks_in_order() {
        let scheduler = ManualScheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        let late = Rc::clone(&log);
        scheduler.schedule(200, Box::new(move || late.borrow_mut().push("late")));
        let early = Rc::clone(&log);
        scheduler.schedule(100, Box::new(move || early.borrow_mut().push("early")));

        scheduler.advance(99);
        assert!(log.borrow().is_empty());

        scheduler.advance(150);
        assert_eq!(*log.borrow(), vec!["early", "late"]);
        assert_eq!(scheduler.pending(), 0);
    }
}
