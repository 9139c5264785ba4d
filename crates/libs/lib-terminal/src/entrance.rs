//! # Entrance Animation
//!
//! Flips the view from not-loaded to loaded once, a short delay after first
//! render. The transition never reverses.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crate::schedule::{Scheduler, TaskHandle};
use crate::session::LoadPhase;

/// Pending or completed entrance transition owned by a mounted view.
pub struct Entrance {
    phase: Rc<Cell<LoadPhase>>,
    timer: Option<TaskHandle>,
}

impl Entrance {
    /// Schedule the transition; `on_loaded` runs exactly once when it fires.
    pub fn start<S>(scheduler: &S, delay: Duration, on_loaded: impl FnOnce() + 'static) -> Self
    where
        S: Scheduler + ?Sized,
    {
        let phase = Rc::new(Cell::new(LoadPhase::NotLoaded));
        let shared = phase.clone();

        let timer = scheduler.after(
            delay,
            Box::new(move || {
                shared.set(LoadPhase::Loaded);
                on_loaded();
            }),
        );

        Self {
            phase,
            timer: Some(timer),
        }
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase.get()
    }

    /// Drop the pending timer (teardown before the delay elapsed).
    pub fn cancel(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }
    }
}

impl Drop for Entrance {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::ManualScheduler;

    #[test]
    fn test_loads_after_delay() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(Cell::new(0));
        let count = fired.clone();
        let entrance = Entrance::start(&scheduler, Duration::from_millis(100), move || {
            count.set(count.get() + 1)
        });

        scheduler.advance(Duration::from_millis(99));
        assert_eq!(entrance.phase(), LoadPhase::NotLoaded);

        scheduler.advance(Duration::from_millis(1));
        assert_eq!(entrance.phase(), LoadPhase::Loaded);

        scheduler.advance(Duration::from_secs(60));
        assert_eq!(entrance.phase(), LoadPhase::Loaded);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_teardown_before_delay_never_fires() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();
        let mut entrance = Entrance::start(&scheduler, Duration::from_millis(100), move || flag.set(true));

        scheduler.advance(Duration::from_millis(50));
        entrance.cancel();
        scheduler.advance(Duration::from_millis(500));

        assert!(!fired.get());
        assert_eq!(entrance.phase(), LoadPhase::NotLoaded);
    }
}
