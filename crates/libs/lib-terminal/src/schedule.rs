//! # Scheduled Tasks
//!
//! Timers owned by a view's lifecycle. A [`Scheduler`] hands back a
//! [`TaskHandle`]; dropping or cancelling the handle stops the task, so a view
//! that holds its handles cannot leak a timer past teardown.
//!
//! [`ManualScheduler`] runs tasks against a virtual clock advanced explicitly,
//! which makes timer behavior deterministic in tests.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Duration;

/// Source of recurring and one-shot tasks.
pub trait Scheduler {
    /// Run `task` every `period` until the returned handle is dropped.
    fn every(&self, period: Duration, task: Box<dyn FnMut()>) -> TaskHandle;

    /// Run `task` once after `delay` unless the returned handle is dropped first.
    fn after(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TaskHandle;
}

/// Ownership token for a scheduled task. Cancels the task on drop.
#[must_use = "dropping a TaskHandle cancels the task"]
pub struct TaskHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl TaskHandle {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn cancel(mut self) {
        self.run_cancel();
    }

    fn run_cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.run_cancel();
    }
}

impl std::fmt::Debug for TaskHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskHandle")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

enum Job {
    Once(Box<dyn FnOnce()>),
    Repeat(Box<dyn FnMut()>),
}

struct Entry {
    due: Duration,
    period: Option<Duration>,
    // Taken out while the job runs so the task may touch the scheduler.
    job: Option<Job>,
}

#[derive(Default)]
struct Timeline {
    now: Duration,
    next_id: u64,
    entries: BTreeMap<u64, Entry>,
}

impl Timeline {
    fn next_due(&self, until: Duration) -> Option<u64> {
        self.entries
            .iter()
            .filter(|(_, entry)| entry.job.is_some() && entry.due <= until)
            .min_by_key(|(id, entry)| (entry.due, **id))
            .map(|(id, _)| *id)
    }
}

/// Deterministic scheduler over a virtual clock.
///
/// ```rust
/// use lib_terminal::schedule::{ManualScheduler, Scheduler};
/// use std::{cell::Cell, rc::Rc, time::Duration};
///
/// let scheduler = ManualScheduler::new();
/// let fired = Rc::new(Cell::new(0));
/// let counter = fired.clone();
/// let _handle = scheduler.every(Duration::from_secs(1), Box::new(move || counter.set(counter.get() + 1)));
///
/// scheduler.advance(Duration::from_millis(3500));
/// assert_eq!(fired.get(), 3);
/// ```
#[derive(Clone, Default)]
pub struct ManualScheduler {
    timeline: Rc<RefCell<Timeline>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since creation.
    pub fn now(&self) -> Duration {
        self.timeline.borrow().now
    }

    /// Number of tasks still scheduled.
    pub fn pending(&self) -> usize {
        self.timeline.borrow().entries.len()
    }

    /// Move virtual time forward, running every task that falls due in order.
    pub fn advance(&self, by: Duration) {
        let until = self.timeline.borrow().now + by;

        loop {
            let (id, job) = {
                let mut timeline = self.timeline.borrow_mut();
                let Some(id) = timeline.next_due(until) else {
                    break;
                };
                let Some(entry) = timeline.entries.get_mut(&id) else {
                    break;
                };
                let due = entry.due;
                let job = entry.job.take();
                timeline.now = due;
                (id, job)
            };

            match job {
                Some(Job::Once(task)) => {
                    self.timeline.borrow_mut().entries.remove(&id);
                    task();
                }
                Some(Job::Repeat(mut task)) => {
                    task();
                    let mut timeline = self.timeline.borrow_mut();
                    // Absent if the task cancelled itself while running.
                    if let Some(entry) = timeline.entries.get_mut(&id) {
                        if let Some(period) = entry.period {
                            entry.due += period;
                        }
                        entry.job = Some(Job::Repeat(task));
                    }
                }
                None => {}
            }
        }

        self.timeline.borrow_mut().now = until;
    }

    fn schedule(&self, due_in: Duration, period: Option<Duration>, job: Job) -> TaskHandle {
        let id = {
            let mut timeline = self.timeline.borrow_mut();
            let id = timeline.next_id;
            timeline.next_id += 1;
            let due = timeline.now + due_in;
            timeline.entries.insert(
                id,
                Entry {
                    due,
                    period,
                    job: Some(job),
                },
            );
            id
        };

        let timeline = Rc::downgrade(&self.timeline);
        TaskHandle::new(move || {
            if let Some(timeline) = timeline.upgrade() {
                // Drop the job outside the borrow; it may own further handles.
                let removed = timeline.borrow_mut().entries.remove(&id);
                drop(removed);
            }
        })
    }
}

impl Scheduler for ManualScheduler {
    fn every(&self, period: Duration, task: Box<dyn FnMut()>) -> TaskHandle {
        // A zero period would spin forever inside `advance`.
        let period = period.max(Duration::from_millis(1));
        self.schedule(period, Some(period), Job::Repeat(task))
    }

    fn after(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TaskHandle {
        self.schedule(delay, None, Job::Once(task))
    }
}
