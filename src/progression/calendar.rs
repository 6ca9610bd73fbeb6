//! Date-gating arithmetic
//!
//! All functions here are pure. Day 1 opens at local midnight of the campaign
//! start date and each following day opens one whole day later.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use super::TOTAL_DAYS;
use super::record::ProgressionRecord;

const SECONDS_PER_DAY: i64 = 86_400;

/// Highest day the calendar allows at `now`, clamped into `1..=6`.
///
/// Uses whole-day floor division from midnight of `start_date`, so the value
/// only changes exactly at midnight.
pub fn compute_date_ceiling(now: NaiveDateTime, start_date: NaiveDate) -> u8 {
    let start = start_date.and_time(NaiveTime::MIN);
    let elapsed = now.signed_duration_since(start).num_seconds();
    let whole_days = elapsed.div_euclid(SECONDS_PER_DAY);

    whole_days
        .saturating_add(1)
        .clamp(1, i64::from(TOTAL_DAYS)) as u8
}

/// Highest day the user may open: `min(unlocked_day, ceiling)`, at least 1
pub fn compute_accessible_day(record: &ProgressionRecord, ceiling: u8) -> u8 {
    record.unlocked_day.min(ceiling).max(1)
}

/// Calendar date on which `day` becomes accessible
pub fn unlock_date(start_date: NaiveDate, day: u8) -> NaiveDate {
    let offset = i64::from(day.saturating_sub(1));
    start_date
        .checked_add_signed(Duration::days(offset))
        .unwrap_or(start_date)
}

/// Completion percentage for a given `unlocked_day`, clamped to `[0, 100]`
pub fn progress_percent(unlocked_day: u8) -> f64 {
    let completed = f64::from(unlocked_day.saturating_sub(1));
    (completed / f64::from(TOTAL_DAYS) * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progression::ReadyState;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 9).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    fn record(unlocked_day: u8) -> ProgressionRecord {
        ProgressionRecord {
            unlocked_day,
            ready_state: ReadyState::Ready,
        }
    }

    #[test]
    fn test_ceiling_on_start_date() {
        assert_eq!(compute_date_ceiling(at(2026, 2, 9, 0, 0, 0), start()), 1);
        assert_eq!(compute_date_ceiling(at(2026, 2, 9, 23, 59, 59), start()), 1);
    }

    #[test]
    fn test_ceiling_increments_at_midnight() {
        assert_eq!(compute_date_ceiling(at(2026, 2, 10, 0, 0, 0), start()), 2);
        assert_eq!(compute_date_ceiling(at(2026, 2, 10, 0, 0, 1), start()), 2);
        assert_eq!(compute_date_ceiling(at(2026, 2, 12, 18, 30, 0), start()), 4);
    }

    #[test]
    fn test_ceiling_before_start_is_one() {
        assert_eq!(compute_date_ceiling(at(2026, 2, 8, 23, 59, 59), start()), 1);
        assert_eq!(compute_date_ceiling(at(2025, 1, 1, 12, 0, 0), start()), 1);
    }

    #[test]
    fn test_ceiling_caps_at_total_days() {
        assert_eq!(compute_date_ceiling(at(2026, 2, 14, 0, 0, 0), start()), 6);
        assert_eq!(compute_date_ceiling(at(2026, 2, 20, 9, 0, 0), start()), 6);
        assert_eq!(compute_date_ceiling(at(2030, 1, 1, 0, 0, 0), start()), 6);
    }

    #[test]
    fn test_ceiling_is_non_decreasing() {
        let mut previous = 0;
        let mut now = at(2026, 2, 7, 0, 0, 0);
        let end = at(2026, 2, 17, 0, 0, 0);
        while now < end {
            let ceiling = compute_date_ceiling(now, start());
            assert!(ceiling >= previous, "ceiling dropped at {now}");
            assert!((1..=TOTAL_DAYS).contains(&ceiling));
            previous = ceiling;
            now += Duration::minutes(37);
        }
    }

    #[test]
    fn test_accessible_day_respects_both_bounds() {
        for unlocked in 1..=7 {
            for ceiling in 1..=6 {
                let accessible = compute_accessible_day(&record(unlocked), ceiling);
                assert!(accessible <= unlocked);
                assert!(accessible <= ceiling);
                assert!(accessible >= 1);
            }
        }
        assert_eq!(compute_accessible_day(&record(4), 2), 2);
        assert_eq!(compute_accessible_day(&record(2), 5), 2);
    }

    #[test]
    fn test_unlock_date() {
        assert_eq!(unlock_date(start(), 1), start());
        assert_eq!(
            unlock_date(start(), 6),
            NaiveDate::from_ymd_opt(2026, 2, 14).unwrap()
        );
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(progress_percent(1), 0.0);
        assert!((progress_percent(2) - 16.666).abs() < 0.01);
        assert_eq!(progress_percent(7), 100.0);
        assert_eq!(progress_percent(0), 0.0);
        assert_eq!(progress_percent(9), 100.0);
    }
}
