//! Session state machine
//!
//! [`SessionController`] owns the in-memory session, decides which screen is
//! shown, and funnels every progress change through a single advance
//! operation backed by the [`ProgressionStore`](crate::progression::ProgressionStore).
//!
//! ```text
//!  GateInitial ──confirm──▶ Dashboard ◀──reconsider── GateEmergency
//!      │                     │    ▲                        ▲
//!      └───────decline───────┼────┼────────────────────────┘
//!                      select│    │exit / advance
//!                            ▼    │
//!                     ChallengeActive(d) ──complete──▶ CelebrationInterstitial(d)
//!                                                              │ proceed
//!                                                              ▼
//!                                                           advance
//! ```

mod clock;
mod controller;
mod events;
mod snapshot;
mod view;

pub use clock::{Clock, ManualClock, SystemClock};
pub use controller::{SessionController, SessionState};
pub use events::{ProgressListener, ProgressUpdate};
pub use snapshot::{DashboardSnapshot, DaySnapshot};
pub use view::{DayStatus, IgnoreReason, Transition, View};
