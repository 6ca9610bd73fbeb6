//! Progression store: codec and default-on-failure policy over a backend

use std::cell::Cell;

use tracing::{debug, warn};

use super::backend::KeyValueBackend;
use super::record::{ProgressionRecord, ReadyState};

/// Names of the two storage keys derived from a versioned prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub day: String,
    pub started: String,
}

impl StorageKeys {
    pub fn from_prefix(prefix: &str) -> Self {
        Self {
            day: format!("{prefix}_day"),
            started: format!("{prefix}_started"),
        }
    }
}

/// Durable progression storage.
///
/// Never fails outward. A store without a backend (storage could not be
/// opened) behaves like an empty, read-only-to-nowhere disk.
pub struct ProgressionStore {
    backend: Option<Box<dyn KeyValueBackend>>,
    keys: StorageKeys,
    /// Set after any read or write failure; cleared by the next successful save
    degraded: Cell<bool>,
}

impl ProgressionStore {
    pub fn new(backend: Box<dyn KeyValueBackend>, key_prefix: &str) -> Self {
        Self {
            backend: Some(backend),
            keys: StorageKeys::from_prefix(key_prefix),
            degraded: Cell::new(false),
        }
    }

    /// Store with no durable backend; the session runs in memory only
    pub fn detached(key_prefix: &str) -> Self {
        Self {
            backend: None,
            keys: StorageKeys::from_prefix(key_prefix),
            degraded: Cell::new(true),
        }
    }

    /// Whether progress may currently be lost on reload
    pub fn is_degraded(&self) -> bool {
        self.degraded.get()
    }

    /// Load the record, substituting defaults field by field
    pub fn load(&self) -> ProgressionRecord {
        let defaults = ProgressionRecord::default();

        let unlocked_day = match self.read(&self.keys.day) {
            Some(raw) => ProgressionRecord::decode_day(&raw).unwrap_or_else(|| {
                warn!(
                    "[daylock] Ignoring invalid stored day {:?} under {}",
                    raw, self.keys.day
                );
                defaults.unlocked_day
            }),
            None => defaults.unlocked_day,
        };

        let ready_state = self
            .read(&self.keys.started)
            .map(|raw| ReadyState::from_stored(&raw))
            .unwrap_or(defaults.ready_state);

        let record = ProgressionRecord {
            unlocked_day,
            ready_state,
        };
        debug!("[daylock] Loaded progression {:?}", record);
        record
    }

    /// Write the full record. Failures are logged, never returned.
    pub fn save(&self, record: &ProgressionRecord) {
        let Some(backend) = &self.backend else {
            debug!("[daylock] No storage backend, progress kept in memory only");
            return;
        };

        let result = backend
            .set(&self.keys.day, &record.encode_day())
            .and_then(|()| backend.set(&self.keys.started, record.ready_state.as_str()));

        match result {
            Ok(()) => {
                self.degraded.set(false);
                debug!("[daylock] Saved progression {:?} to {}", record, backend.describe());
            }
            Err(e) => {
                self.degraded.set(true);
                warn!(
                    "[daylock] Failed to save progression to {}: {}. Continuing in memory.",
                    backend.describe(),
                    e
                );
            }
        }
    }

    fn read(&self, key: &str) -> Option<String> {
        let backend = self.backend.as_ref()?;
        match backend.get(key) {
            Ok(value) => value,
            Err(e) => {
                self.degraded.set(true);
                warn!(
                    "[daylock] Failed to read {} from {}: {}. Using default.",
                    key,
                    backend.describe(),
                    e
                );
                None
            }
        }
    }
}

impl std::fmt::Debug for ProgressionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressionStore")
            .field(
                "backend",
                &self.backend.as_ref().map(|b| b.describe()),
            )
            .field("keys", &self.keys)
            .field("degraded", &self.degraded.get())
            .finish()
    }
}
