//! Shared test utilities for progression tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};
use tempfile::TempDir;

use daylock::config::CampaignSettings;
use daylock::progression::{
    KeyValueBackend, MemoryBackend, ProgressionStore, SqliteBackend, StorageError,
};
use daylock::session::{ManualClock, SessionController};

pub const PREFIX: &str = "test_v1";

/// A date in February 2026; the default campaign starts on the 9th
pub fn feb(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, day).expect("valid date")
}

pub fn feb_at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    feb(day).and_hms_opt(hour, minute, 0).expect("valid time")
}

/// Memory backend pre-seeded as if the user already answered the gate
pub fn ready_backend(unlocked_day: u8) -> MemoryBackend {
    let backend = MemoryBackend::new();
    backend.insert_raw(&format!("{PREFIX}_day"), &unlocked_day.to_string());
    backend.insert_raw(&format!("{PREFIX}_started"), "ready");
    backend
}

/// Controller over a shared memory backend
pub fn controller_with(backend: &MemoryBackend, clock: &ManualClock) -> SessionController {
    let store = ProgressionStore::new(Box::new(backend.clone()), PREFIX);
    SessionController::new(CampaignSettings::default(), store, Box::new(clock.clone()))
}

/// Creates a temporary directory and the path of a progress file inside it
pub fn create_test_db() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("progress.db");
    (temp_dir, path)
}

/// Controller over the SQLite file at `path`
pub fn sqlite_controller(path: &Path, clock: &ManualClock) -> SessionController {
    let backend = SqliteBackend::open(path).expect("Failed to open progress db");
    let store = ProgressionStore::new(Box::new(backend), PREFIX);
    SessionController::new(CampaignSettings::default(), store, Box::new(clock.clone()))
}

/// Reads work, every write fails
pub struct ReadOnlyBackend(pub MemoryBackend);

impl KeyValueBackend for ReadOnlyBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.0.get(key)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("read-only".to_string()))
    }

    fn describe(&self) -> String {
        "read-only".to_string()
    }
}

/// Every access fails
pub struct OfflineBackend;

impl KeyValueBackend for OfflineBackend {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("offline".to_string()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("offline".to_string()))
    }

    fn describe(&self) -> String {
        "offline".to_string()
    }
}
