//! The persisted progression record and its string codec

use serde::{Deserialize, Serialize};

use super::{FINISHED_DAY, TOTAL_DAYS};

/// Whether the user has passed the introductory gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadyState {
    #[default]
    Initial,
    Ready,
    /// Declined at the gate; cleared by reconsidering
    Emergency,
}

impl ReadyState {
    /// Get the string stored under the `_started` key
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::Ready => "ready",
            Self::Emergency => "emergency",
        }
    }

    /// Parse a stored value. Anything unrecognised reads back as `Initial`.
    pub fn from_stored(s: &str) -> Self {
        match s.trim() {
            "ready" => Self::Ready,
            "emergency" => Self::Emergency,
            _ => Self::Initial,
        }
    }
}

impl std::fmt::Display for ReadyState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Durable progression state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionRecord {
    /// The next day the user may attempt (1..=7, 7 = all done)
    pub unlocked_day: u8,
    pub ready_state: ReadyState,
}

impl Default for ProgressionRecord {
    fn default() -> Self {
        Self {
            unlocked_day: 1,
            ready_state: ReadyState::Initial,
        }
    }
}

impl ProgressionRecord {
    /// Number of fully completed days
    pub fn completed_days(&self) -> u8 {
        self.unlocked_day.saturating_sub(1).min(TOTAL_DAYS)
    }

    /// Whether every challenge has been completed
    pub fn is_finished(&self) -> bool {
        self.unlocked_day > TOTAL_DAYS
    }

    /// Encode `unlocked_day` for storage
    pub fn encode_day(&self) -> String {
        self.unlocked_day.to_string()
    }

    /// Decode a stored `unlocked_day`.
    ///
    /// Returns `None` for anything that is not an integer in `1..=7`.
    pub fn decode_day(raw: &str) -> Option<u8> {
        raw.trim()
            .parse::<u8>()
            .ok()
            .filter(|day| (1..=FINISHED_DAY).contains(day))
    }
}
