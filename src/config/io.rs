//! Configuration file I/O operations

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;

use super::Config;

impl Config {
    /// Get the global config directory path (~/.daylock/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".daylock")
    }

    /// Get the global config file path (~/.daylock/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Load and validate configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load configuration from `path`, creating it with defaults if missing.
    ///
    /// Uses file locking so two processes starting at once do not both write
    /// the default file.
    pub fn load_or_init(path: &Path) -> Result<Self> {
        if !path.exists() {
            Self::init_file(path, false)?;
        }
        Self::from_file(path)
    }

    /// Write the default configuration to `path`.
    ///
    /// Returns `false` without touching the file when it already exists and
    /// `force` is not set.
    pub fn init_file(path: &Path, force: bool) -> Result<bool> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let _lock = lock_config(path)?;

        // Re-check after acquiring the lock (another process may have created it)
        if path.exists() && !force {
            return Ok(false);
        }

        let content = toml::to_string_pretty(&Self::with_defaults())
            .with_context(|| "Failed to serialize default config")?;
        write_atomic(path, &content)?;

        tracing::info!("[daylock] Created {}", path.display());
        Ok(true)
    }
}

fn lock_config(path: &Path) -> Result<File> {
    let lock_path = path.with_extension("toml.lock");
    let lock_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&lock_path)
        .with_context(|| format!("Failed to create lock file: {}", lock_path.display()))?;

    lock_file
        .lock_exclusive()
        .with_context(|| "Failed to acquire config lock")?;

    Ok(lock_file)
}

fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let temp_path = path.with_extension("toml.tmp");
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

    temp_file
        .write_all(content.as_bytes())
        .with_context(|| "Failed to write config content")?;

    temp_file
        .sync_all()
        .with_context(|| "Failed to sync config file")?;

    std::fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename config file: {}", path.display()))?;

    Ok(())
}
