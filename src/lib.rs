//! daylock - date-gated daily challenges
//!
//! A six-day gift campaign: one challenge opens per calendar day, each must be
//! completed in order, and progress survives restarts in a local store.
//!
//! ## Layers
//!
//! 1. [`progression`]: durable record, storage backends, date arithmetic.
//! 2. [`session`]: the state machine deciding which screen is shown and the
//!    single operation that advances progress.
//! 3. [`gui`] and the `daylock` binary: display shells over the session.

pub mod config;
pub mod gui;
pub mod progression;
pub mod session;

pub use config::Config;
pub use progression::{ProgressionRecord, ReadyState, TOTAL_DAYS};
pub use session::{DayStatus, SessionController, Transition, View};
