//! Wall-clock seam for date gating

use std::sync::{Arc, Mutex};

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Source of the current local date and time
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock that only moves when told to.
///
/// Clones share the same instant, so a test can keep one handle and move
/// time under a controller that owns the other.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<NaiveDateTime>>,
}

impl ManualClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: Arc::new(Mutex::new(now)),
        }
    }

    /// Clock pinned to local midnight of `date`
    pub fn at_date(date: NaiveDate) -> Self {
        Self::new(date.and_time(NaiveTime::MIN))
    }

    pub fn set(&self, now: NaiveDateTime) {
        if let Ok(mut guard) = self.now.lock() {
            *guard = now;
        }
    }

    pub fn advance(&self, by: chrono::Duration) {
        if let Ok(mut guard) = self.now.lock() {
            *guard += by;
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        self.now
            .lock()
            .map(|guard| *guard)
            .unwrap_or_else(|poisoned| *poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_shared_handle() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 9).unwrap();
        let clock = ManualClock::at_date(date);
        let handle = clock.clone();

        handle.advance(chrono::Duration::hours(25));
        assert_eq!(
            clock.now(),
            NaiveDate::from_ymd_opt(2026, 2, 10)
                .unwrap()
                .and_hms_opt(1, 0, 0)
                .unwrap()
        );
    }
}
