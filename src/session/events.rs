//! Progress notifications for display consumers

use serde::Serialize;

/// Emitted once per successful advance
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProgressUpdate {
    /// Day that was just completed
    pub completed_day: u8,
    /// New frontier
    pub unlocked_day: u8,
    /// `(unlocked_day - 1) / 6 * 100`, clamped
    pub percent: f64,
}

/// Receives progress updates (progress bars, toasts, ...)
pub trait ProgressListener {
    fn on_progress(&mut self, update: &ProgressUpdate);
}

impl<F> ProgressListener for F
where
    F: FnMut(&ProgressUpdate),
{
    fn on_progress(&mut self, update: &ProgressUpdate) {
        self(update)
    }
}
