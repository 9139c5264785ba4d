//! # Clock Display
//!
//! The UTC clock in the network panel. Sampled once on mount, then re-sampled
//! on every scheduler tick until unmounted.

use chrono::{DateTime, Utc};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::schedule::{Scheduler, TaskHandle};

/// Where the clock reads the current time from.
pub trait TimeSource {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time via chrono.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Format a time the way HTTP dates read, e.g. `Fri, 16 Oct 2026 12:00:00 GMT`.
pub fn format_utc(time: DateTime<Utc>) -> String {
    time.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// A mounted clock. Ticking stops when this value is unmounted or dropped.
pub struct ClockDisplay {
    value: Rc<RefCell<String>>,
    ticker: Option<TaskHandle>,
}

impl ClockDisplay {
    /// Sample the time now and every `period` after, reporting each new value to `on_tick`.
    pub fn mount<S>(
        scheduler: &S,
        period: Duration,
        source: Rc<dyn TimeSource>,
        on_tick: impl Fn(&str) + 'static,
    ) -> Self
    where
        S: Scheduler + ?Sized,
    {
        let value = Rc::new(RefCell::new(format_utc(source.now())));
        let shared = value.clone();

        let ticker = scheduler.every(
            period,
            Box::new(move || {
                let sampled = format_utc(source.now());
                on_tick(&sampled);
                *shared.borrow_mut() = sampled;
            }),
        );

        tracing::debug!(period_ms = period.as_millis() as u64, "Clock mounted");

        Self {
            value,
            ticker: Some(ticker),
        }
    }

    /// The most recently sampled time string.
    pub fn value(&self) -> String {
        self.value.borrow().clone()
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_some()
    }

    /// Stop re-sampling. Safe to call more than once.
    pub fn unmount(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.cancel();
            tracing::debug!("Clock unmounted");
        }
    }
}

impl Drop for ClockDisplay {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::ManualScheduler;
    use chrono::TimeZone;
    use std::cell::Cell;

    /// Fake clock that moves forward one second per read.
    struct SteppingSource {
        current: Cell<DateTime<Utc>>,
    }

    impl TimeSource for SteppingSource {
        fn now(&self) -> DateTime<Utc> {
            let now = self.current.get();
            self.current.set(now + chrono::Duration::seconds(1));
            now
        }
    }

    fn stepping_source() -> Rc<dyn TimeSource> {
        let start = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();
        Rc::new(SteppingSource {
            current: Cell::new(start),
        })
    }

    #[test]
    fn test_format_utc() {
        let time = Utc.with_ymd_and_hms(2026, 10, 16, 9, 5, 3).unwrap();
        assert_eq!(format_utc(time), "Fri, 16 Oct 2026 09:05:03 GMT");
    }

    #[test]
    fn test_clock_samples_on_mount() {
        let scheduler = ManualScheduler::new();
        let clock = ClockDisplay::mount(&scheduler, Duration::from_secs(1), stepping_source(), |_| {});
        assert_eq!(clock.value(), "Fri, 16 Oct 2026 12:00:00 GMT");
        assert!(clock.is_running());
    }

    #[test]
    fn test_clock_updates_every_second() {
        let scheduler = ManualScheduler::new();
        let ticks = Rc::new(RefCell::new(Vec::new()));
        let seen = ticks.clone();
        let clock = ClockDisplay::mount(&scheduler, Duration::from_secs(1), stepping_source(), move |v| {
            seen.borrow_mut().push(v.to_string())
        });

        let mut previous = clock.value();
        for _ in 0..3 {
            scheduler.advance(Duration::from_secs(1));
            assert_ne!(clock.value(), previous);
            previous = clock.value();
        }
        assert_eq!(ticks.borrow().len(), 3);
        assert_eq!(ticks.borrow().last().cloned(), Some(clock.value()));
    }

    #[test]
    fn test_clock_stops_after_unmount() {
        let scheduler = ManualScheduler::new();
        let ticks = Rc::new(Cell::new(0));
        let seen = ticks.clone();
        let mut clock = ClockDisplay::mount(&scheduler, Duration::from_secs(1), stepping_source(), move |_| {
            seen.set(seen.get() + 1)
        });

        scheduler.advance(Duration::from_secs(2));
        clock.unmount();
        let frozen = clock.value();

        scheduler.advance(Duration::from_secs(5));
        assert_eq!(ticks.get(), 2);
        assert_eq!(clock.value(), frozen);
        assert!(!clock.is_running());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_dropping_clock_releases_timer() {
        let scheduler = ManualScheduler::new();
        let clock = ClockDisplay::mount(&scheduler, Duration::from_secs(1), stepping_source(), |_| {});
        assert_eq!(scheduler.pending(), 1);
        drop(clock);
        assert_eq!(scheduler.pending(), 0);
    }
}
