//! Progress surviving restarts, and degraded storage

use daylock::progression::{ProgressionStore, ReadyState, SqliteBackend};
use daylock::session::{ManualClock, View};

use crate::common::{OfflineBackend, PREFIX, create_test_db, feb, sqlite_controller};

#[test]
fn test_progress_survives_restart() {
    let (_dir, path) = create_test_db();
    let clock = ManualClock::at_date(feb(11));

    {
        let mut controller = sqlite_controller(&path, &clock);
        assert_eq!(controller.view(), View::GateInitial);
        controller.confirm_ready();
        controller.select_day(1);
        controller.complete_challenge();
        controller.select_day(2);
        controller.complete_challenge();
    }

    let controller = sqlite_controller(&path, &clock);
    assert_eq!(controller.view(), View::Dashboard);
    assert_eq!(controller.record().unlocked_day, 3);
    assert_eq!(controller.record().ready_state, ReadyState::Ready);
}

#[test]
fn test_decline_is_forgotten_on_restart() {
    let (_dir, path) = create_test_db();
    let clock = ManualClock::at_date(feb(9));

    {
        let mut controller = sqlite_controller(&path, &clock);
        controller.decline_ready();
        assert_eq!(controller.view(), View::GateEmergency);
    }

    let controller = sqlite_controller(&path, &clock);
    assert_eq!(controller.view(), View::GateInitial);
}

#[test]
fn test_corrupt_day_falls_back_to_default() {
    let (_dir, path) = create_test_db();
    {
        let backend = SqliteBackend::open(&path).unwrap();
        use daylock::progression::KeyValueBackend;
        backend.set(&format!("{PREFIX}_day"), "not-a-number").unwrap();
        backend.set(&format!("{PREFIX}_started"), "ready").unwrap();
    }

    let clock = ManualClock::at_date(feb(12));
    let controller = sqlite_controller(&path, &clock);
    assert_eq!(controller.record().unlocked_day, 1);
    // The other field is still honoured
    assert_eq!(controller.record().ready_state, ReadyState::Ready);
    assert!(!controller.is_storage_degraded());
}

#[test]
fn test_offline_storage_does_not_block_play() {
    let clock = ManualClock::at_date(feb(10));
    let store = ProgressionStore::new(Box::new(OfflineBackend), PREFIX);
    let mut controller = daylock::SessionController::new(
        daylock::config::CampaignSettings::default(),
        store,
        Box::new(clock),
    );

    assert!(controller.is_storage_degraded());
    assert_eq!(controller.view(), View::GateInitial);
    controller.confirm_ready();
    controller.select_day(1);
    controller.complete_challenge();
    assert_eq!(controller.record().unlocked_day, 2);
    assert!(controller.snapshot().storage_degraded);
}

#[test]
fn test_key_prefix_isolates_campaigns() {
    let (_dir, path) = create_test_db();
    let clock = ManualClock::at_date(feb(12));

    {
        let mut controller = sqlite_controller(&path, &clock);
        controller.confirm_ready();
        controller.select_day(1);
        controller.complete_challenge();
    }

    let other = ProgressionStore::new(Box::new(SqliteBackend::open(&path).unwrap()), "other_v1");
    let record = other.load();
    assert_eq!(record.unlocked_day, 1);
    assert_eq!(record.ready_state, ReadyState::Initial);
}
