//! Storage and GUI settings

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where and under which keys progress is stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Versioned prefix for the `_day` and `_started` keys.
    /// Changing it starts a fresh campaign.
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,

    /// SQLite file holding the keys. Default: ~/.daylock/progress.db
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

fn default_key_prefix() -> String {
    "daylock_v1".to_string()
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            key_prefix: default_key_prefix(),
            path: None,
        }
    }
}

/// Desktop shell settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuiSettings {
    /// Seconds between date-ceiling re-checks while the window is open
    #[serde(default = "default_refresh_secs")]
    pub refresh_secs: u64,
}

fn default_refresh_secs() -> u64 {
    60
}

impl Default for GuiSettings {
    fn default() -> Self {
        Self {
            refresh_secs: default_refresh_secs(),
        }
    }
}
