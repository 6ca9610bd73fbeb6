//! Desktop shell for the session controller
//!
//! Renders the gate, the six-day dashboard, a placeholder challenge screen
//! and the celebration interstitial. Challenge content itself lives outside
//! this crate; the placeholder only offers the completion signal.

mod app;
mod challenge;
mod dashboard;
mod gate;
mod runner;
pub mod theme;

pub use app::{DaylockApp, UiAction};
pub use runner::run_gui;
