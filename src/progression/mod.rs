//! Progression storage and date arithmetic
//!
//! Owns the only durable state of the application: which day is unlocked and
//! whether the ready gate has been acknowledged.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────┐
//! │  SessionController   │
//! └──────────┬───────────┘
//!            │ load / save
//!            ▼
//! ┌──────────────────────┐     ┌──────────────────────┐
//! │  ProgressionStore    │────▶│  KeyValueBackend     │
//! │  (codec + defaults)  │     │  sqlite | memory     │
//! └──────────────────────┘     └──────────────────────┘
//! ```
//!
//! The store never returns an error: unreadable or missing values degrade to
//! defaults, failed writes are logged and dropped.

mod backend;
mod calendar;
mod record;
mod sqlite;
mod store;

pub use backend::{KeyValueBackend, MemoryBackend, StorageError};
pub use calendar::{
    compute_accessible_day, compute_date_ceiling, progress_percent, unlock_date,
};
pub use record::{ProgressionRecord, ReadyState};
pub use sqlite::SqliteBackend;
pub use store::ProgressionStore;

/// Number of daily challenges in a campaign
pub const TOTAL_DAYS: u8 = 6;

/// Value of `unlocked_day` once every challenge has been completed
pub const FINISHED_DAY: u8 = TOTAL_DAYS + 1;
