//! CLI command implementations

pub mod complete;
pub mod init;
pub mod ready;
pub mod status;

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use daylock::Config;
use daylock::session::{Clock, ManualClock, SessionController, SystemClock};

/// Load the config at `path`, creating it with defaults when missing
pub fn load_config(path: &Path) -> Result<Config> {
    Config::load_or_init(path)
        .with_context(|| format!("Failed to load config from {}", path.display()))
}

/// Build a session over the configured store, optionally pinned to `date`
pub fn open_controller(config_path: &Path, date: Option<NaiveDate>) -> Result<SessionController> {
    let config = load_config(config_path)?;
    let clock: Box<dyn Clock> = match date {
        Some(date) => Box::new(ManualClock::at_date(date)),
        None => Box::new(SystemClock),
    };
    Ok(SessionController::from_config(&config, clock))
}
