//! Screens, per-day status, and transition results

use serde::Serialize;

/// Top-level screen currently mounted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "view", content = "day", rename_all = "snake_case")]
pub enum View {
    /// "Are you ready?" prompt
    GateInitial,
    /// Shown after declining the gate
    GateEmergency,
    /// Six-day grid
    Dashboard,
    /// A challenge is mounted
    ChallengeActive(u8),
    /// Completion reported, waiting for the user to proceed
    CelebrationInterstitial(u8),
}

impl View {
    pub fn label(&self) -> String {
        match self {
            Self::GateInitial => "gate".to_string(),
            Self::GateEmergency => "emergency".to_string(),
            Self::Dashboard => "dashboard".to_string(),
            Self::ChallengeActive(day) => format!("challenge {}", day),
            Self::CelebrationInterstitial(day) => format!("celebration {}", day),
        }
    }
}

/// Display status of one dashboard card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    /// The calendar has not reached this day
    LockedByDate,
    /// Date allows it but an earlier day is still open
    LockedByProgress,
    Completed,
    /// The frontier, open today
    Current,
}

impl DayStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LockedByDate => "locked_by_date",
            Self::LockedByProgress => "locked_by_progress",
            Self::Completed => "completed",
            Self::Current => "current",
        }
    }
}

impl std::fmt::Display for DayStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why an action was ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The action does not apply to the current screen
    WrongView(View),
    /// Day is outside 1..=6, beyond the accessible day, or the campaign is over
    DayNotAccessible(u8),
    /// Only the frontier day can be advanced
    NotFrontier { day: u8, frontier: u8 },
}

/// Outcome of a controller action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Moved { from: View, to: View },
    Ignored(IgnoreReason),
}

impl Transition {
    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored(_))
    }
}
