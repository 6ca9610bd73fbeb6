//! Invariants checked across every start/now/progress combination

use chrono::Duration;

use daylock::progression::{
    ProgressionRecord, ReadyState, TOTAL_DAYS, compute_accessible_day, compute_date_ceiling,
};
use daylock::session::{DayStatus, ManualClock};

use crate::common::{controller_with, feb, feb_at, ready_backend};

#[test]
fn test_ceiling_is_monotonic_in_time() {
    let start = feb(9);
    let mut now = feb_at(1, 0, 0);
    let mut last = compute_date_ceiling(now, start);

    while now < feb_at(28, 0, 0) {
        now += Duration::minutes(37);
        let ceiling = compute_date_ceiling(now, start);
        assert!(ceiling >= last, "ceiling dropped at {now}");
        assert!((1..=TOTAL_DAYS).contains(&ceiling));
        last = ceiling;
    }
    assert_eq!(last, TOTAL_DAYS);
}

#[test]
fn test_ceiling_is_pure() {
    let now = feb_at(12, 15, 30);
    assert_eq!(
        compute_date_ceiling(now, feb(9)),
        compute_date_ceiling(now, feb(9))
    );
    assert_eq!(compute_date_ceiling(now, feb(9)), 4);
}

#[test]
fn test_accessible_day_bounds() {
    for unlocked_day in 1..=7u8 {
        for ceiling in 1..=TOTAL_DAYS {
            let record = ProgressionRecord {
                unlocked_day,
                ready_state: ReadyState::Ready,
            };
            let accessible = compute_accessible_day(&record, ceiling);
            assert!(accessible >= 1);
            assert!(accessible <= ceiling);
            assert!(accessible <= unlocked_day);
        }
    }
}

#[test]
fn test_only_frontier_advances() {
    for unlocked_day in 1..=TOTAL_DAYS {
        for target in 0..=8u8 {
            let backend = ready_backend(unlocked_day);
            let clock = ManualClock::at_date(feb(20));
            let mut controller = controller_with(&backend, &clock);

            if !controller.select_day(target).is_ignored() {
                controller.complete_challenge();
                controller.proceed_celebration();
            }

            let expected = if target == unlocked_day { unlocked_day + 1 } else { unlocked_day };
            assert_eq!(
                controller.record().unlocked_day,
                expected,
                "completing {target} from {unlocked_day}"
            );
        }
    }
}

#[test]
fn test_locked_days_never_advance() {
    // Progress ahead of the calendar: day 2 recorded, but only day 1 is open
    let backend = ready_backend(2);
    let clock = ManualClock::at_date(feb(9));
    let mut controller = controller_with(&backend, &clock);

    assert_eq!(controller.day_status(2), DayStatus::LockedByDate);
    assert!(controller.select_day(2).is_ignored());
    assert!(controller.complete_challenge().is_ignored());
    assert!(controller.proceed_celebration().is_ignored());
    assert_eq!(controller.record().unlocked_day, 2);
    assert_eq!(backend.raw("test_v1_day").as_deref(), Some("2"));
}

#[test]
fn test_gate_screens_never_write_progress() {
    let backend = daylock::progression::MemoryBackend::new();
    let clock = ManualClock::at_date(feb(9));
    let mut controller = controller_with(&backend, &clock);

    controller.decline_ready();
    for day in 0..=8u8 {
        assert!(controller.select_day(day).is_ignored());
    }
    assert!(controller.complete_challenge().is_ignored());
    assert!(backend.is_empty());

    // Restart: the gate is back, not the emergency screen
    let controller = controller_with(&backend, &clock);
    assert_eq!(controller.view(), daylock::View::GateInitial);
}

#[test]
fn test_launchable_matches_status() {
    for unlocked_day in 1..=7u8 {
        for day_of_feb in 8..=16 {
            let backend = ready_backend(unlocked_day);
            let clock = ManualClock::at_date(feb(day_of_feb));
            let controller = controller_with(&backend, &clock);

            for day in 1..=TOTAL_DAYS {
                let status = controller.day_status(day);
                let launchable = controller.is_launchable(day);
                if launchable {
                    assert!(matches!(status, DayStatus::Current | DayStatus::Completed));
                }
                if status == DayStatus::LockedByDate || status == DayStatus::LockedByProgress {
                    assert!(!launchable);
                }
            }
        }
    }
}
