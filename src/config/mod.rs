//! Configuration loading and management

mod campaign;
mod io;
mod settings;

pub use campaign::{CampaignSettings, DayConfig};
pub use settings::{GuiSettings, StorageSettings};

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Campaign definition (start date, gate, days)
    #[serde(default)]
    pub campaign: CampaignSettings,

    /// Progress storage
    #[serde(default)]
    pub storage: StorageSettings,

    /// Desktop shell
    #[serde(default)]
    pub gui: GuiSettings,
}

impl Config {
    /// Create a config with sensible defaults
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Check values serde cannot enforce on its own
    pub fn validate(&self) -> Result<()> {
        self.campaign.validate()?;
        if self.storage.key_prefix.trim().is_empty() {
            anyhow::bail!("storage.key_prefix must not be empty");
        }
        if self.gui.refresh_secs == 0 {
            anyhow::bail!("gui.refresh_secs must be at least 1");
        }
        Ok(())
    }

    /// SQLite file for progress, falling back to ~/.daylock/progress.db
    pub fn progress_db_path(&self) -> PathBuf {
        self.storage
            .path
            .clone()
            .unwrap_or_else(|| Self::global_config_dir().join("progress.db"))
    }
}
