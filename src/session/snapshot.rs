//! Read-only view of the session for display components

use chrono::NaiveDate;
use serde::Serialize;

use super::view::{DayStatus, View};
use crate::progression::ReadyState;

/// One dashboard card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySnapshot {
    pub day: u8,
    pub title: String,
    pub status: DayStatus,
    /// Date on which the day opens
    pub unlock_date: NaiveDate,
    /// Whether selecting the card opens the challenge
    pub launchable: bool,
}

/// Everything the gate/dashboard needs to render
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub view: View,
    pub accessible_day: u8,
    pub unlocked_day: u8,
    pub completed_days: u8,
    pub ready_state: ReadyState,
    pub date_ceiling: u8,
    pub progress_percent: f64,
    pub finished: bool,
    /// Progress could not be persisted; shown as a non-blocking notice
    pub storage_degraded: bool,
    pub days: Vec<DaySnapshot>,
}

impl DashboardSnapshot {
    /// Card for `day` (1-based)
    pub fn day(&self, day: u8) -> Option<&DaySnapshot> {
        self.days.iter().find(|d| d.day == day)
    }

    /// Status of `day`, for terse assertions and CLI output
    pub fn status(&self, day: u8) -> Option<DayStatus> {
        self.day(day).map(|d| d.status)
    }
}
