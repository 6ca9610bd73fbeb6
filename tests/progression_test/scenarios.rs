//! Walkthroughs of the campaign starting 2026-02-09

use daylock::progression::{MemoryBackend, ProgressionStore, TOTAL_DAYS};
use daylock::session::{DayStatus, ManualClock, View};

use crate::common::{PREFIX, ReadOnlyBackend, controller_with, feb, ready_backend};

#[test]
fn test_fresh_install_on_start_date() {
    let backend = MemoryBackend::new();
    let clock = ManualClock::at_date(feb(9));
    let mut controller = controller_with(&backend, &clock);

    assert_eq!(controller.date_ceiling(), 1);
    assert_eq!(controller.view(), View::GateInitial);
    controller.confirm_ready();

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.status(1), Some(DayStatus::Current));
    for day in 2..=TOTAL_DAYS {
        assert_eq!(snapshot.status(day), Some(DayStatus::LockedByDate), "day {day}");
    }
    assert_eq!(snapshot.progress_percent, 0.0);
}

#[test]
fn test_completing_day_one_persists_and_advances() {
    let backend = ready_backend(1);
    let clock = ManualClock::at_date(feb(9));
    let mut controller = controller_with(&backend, &clock);

    controller.select_day(1);
    controller.complete_challenge();

    assert_eq!(controller.record().unlocked_day, 2);
    assert_eq!(backend.raw(&format!("{PREFIX}_day")).as_deref(), Some("2"));
    assert_eq!(controller.day_status(1), DayStatus::Completed);
    // Still the 9th: day 2 waits for the date
    assert_eq!(controller.day_status(2), DayStatus::LockedByDate);

    clock.set(feb(10).and_hms_opt(0, 0, 0).unwrap());
    controller.refresh();
    assert_eq!(controller.day_status(2), DayStatus::Current);
    assert!(controller.is_launchable(2));
}

#[test]
fn test_date_ceiling_caps_progress_ahead_of_calendar() {
    let backend = ready_backend(4);
    let clock = ManualClock::at_date(feb(10));
    let mut controller = controller_with(&backend, &clock);

    assert_eq!(controller.date_ceiling(), 2);
    assert_eq!(controller.accessible_day(), 2);
    assert_eq!(controller.day_status(3), DayStatus::LockedByDate);
    assert_eq!(controller.day_status(4), DayStatus::LockedByDate);
    assert!(controller.select_day(3).is_ignored());
    assert!(!controller.select_day(2).is_ignored());
}

#[test]
fn test_skip_ahead_is_noop() {
    let backend = ready_backend(2);
    let clock = ManualClock::at_date(feb(20));
    let mut controller = controller_with(&backend, &clock);

    // Day 5 is within the date ceiling but ahead of progress
    assert!(controller.select_day(5).is_ignored());
    assert!(controller.complete_challenge().is_ignored());
    assert_eq!(controller.record().unlocked_day, 2);
    assert_eq!(backend.raw(&format!("{PREFIX}_day")).as_deref(), Some("2"));
}

#[test]
fn test_failed_save_keeps_session_progress_only() {
    let seed = ready_backend(1);
    let clock = ManualClock::at_date(feb(9));

    let store = ProgressionStore::new(Box::new(ReadOnlyBackend(seed.clone())), PREFIX);
    let mut controller = daylock::SessionController::new(
        daylock::config::CampaignSettings::default(),
        store,
        Box::new(clock.clone()),
    );

    controller.select_day(1);
    assert!(!controller.complete_challenge().is_ignored());
    assert_eq!(controller.record().unlocked_day, 2);
    assert!(controller.is_storage_degraded());

    // Next launch sees what was on disk before
    let reloaded = ProgressionStore::new(Box::new(ReadOnlyBackend(seed)), PREFIX).load();
    assert_eq!(reloaded.unlocked_day, 1);
}

#[test]
fn test_finished_campaign_shows_all_completed() {
    for day_of_feb in [1, 9, 11, 14, 28] {
        let backend = ready_backend(7);
        let clock = ManualClock::at_date(feb(day_of_feb));
        let mut controller = controller_with(&backend, &clock);

        let snapshot = controller.snapshot();
        assert!(snapshot.finished);
        assert_eq!(snapshot.progress_percent, 100.0);
        for day in 1..=TOTAL_DAYS {
            assert_eq!(snapshot.status(day), Some(DayStatus::Completed));
            assert!(!snapshot.day(day).unwrap().launchable);
            assert!(controller.select_day(day).is_ignored());
        }
    }
}

#[test]
fn test_full_week_walkthrough() {
    let backend = MemoryBackend::new();
    let clock = ManualClock::at_date(feb(9));
    let mut controller = controller_with(&backend, &clock);
    controller.confirm_ready();

    for day in 1..=TOTAL_DAYS {
        clock.set(feb(8 + day as u32).and_hms_opt(9, 0, 0).unwrap());
        controller.refresh();

        assert_eq!(controller.day_status(day), DayStatus::Current);
        assert!(!controller.select_day(day).is_ignored());
        controller.complete_challenge();
        if controller.view() == View::CelebrationInterstitial(day) {
            controller.proceed_celebration();
        }
        assert_eq!(controller.view(), View::Dashboard);
        assert_eq!(controller.record().unlocked_day, day + 1);
    }

    assert!(controller.record().is_finished());
    assert_eq!(backend.raw(&format!("{PREFIX}_day")).as_deref(), Some("7"));
}
