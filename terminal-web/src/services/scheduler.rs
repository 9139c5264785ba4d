//! Scheduler backed by browser timers

use gloo_timers::callback::{Interval, Timeout};
use lib_terminal::schedule::{Scheduler, TaskHandle};
use std::time::Duration;

/// `setInterval` / `setTimeout` through gloo. The gloo handles clear their
/// timer when dropped, so the returned [`TaskHandle`] just owns them.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooScheduler;

fn millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

impl Scheduler for GlooScheduler {
    fn every(&self, period: Duration, mut task: Box<dyn FnMut()>) -> TaskHandle {
        let interval = Interval::new(millis(period), move || task());
        TaskHandle::new(move || drop(interval))
    }

    fn after(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TaskHandle {
        let timeout = Timeout::new(millis(delay), task);
        TaskHandle::new(move || drop(timeout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millis_saturates() {
        assert_eq!(millis(Duration::from_millis(100)), 100);
        assert_eq!(millis(Duration::from_secs(u64::MAX)), u32::MAX);
    }
}
