//! Session controller: the state machine behind every screen
//!
//! All progression mutation goes through one private `advance` step.
//! Actions that do not apply to the current state are ignored and reported
//! as [`Transition::Ignored`]; nothing here panics or returns an error.

use tracing::{debug, info, warn};

use super::clock::Clock;
use super::events::{ProgressListener, ProgressUpdate};
use super::snapshot::{DashboardSnapshot, DaySnapshot};
use super::view::{DayStatus, IgnoreReason, Transition, View};
use crate::config::{CampaignSettings, Config};
use crate::progression::{
    ProgressionRecord, ProgressionStore, ReadyState, SqliteBackend, TOTAL_DAYS,
    compute_accessible_day, compute_date_ceiling, progress_percent, unlock_date,
};

/// In-memory session state, discarded on exit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionState {
    /// Day whose challenge was last opened
    pub viewing_day: u8,
    pub challenge_active: bool,
    /// Day waiting on the celebration interstitial
    pub pending_celebration: Option<u8>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            viewing_day: 1,
            challenge_active: false,
            pending_celebration: None,
        }
    }
}

/// Drives gate, dashboard, and challenge screens
pub struct SessionController {
    campaign: CampaignSettings,
    store: ProgressionStore,
    clock: Box<dyn Clock>,
    record: ProgressionRecord,
    /// Date ceiling for this session; only ever raised
    ceiling: u8,
    session: SessionState,
    listeners: Vec<Box<dyn ProgressListener>>,
}

impl SessionController {
    /// Load persisted progress and compute today's ceiling
    pub fn new(
        campaign: CampaignSettings,
        store: ProgressionStore,
        clock: Box<dyn Clock>,
    ) -> Self {
        let record = store.load();
        let ceiling = compute_date_ceiling(clock.now(), campaign.start_date);

        info!(
            "[daylock] Session started: unlocked_day={}, ready_state={}, date_ceiling={}",
            record.unlocked_day, record.ready_state, ceiling
        );

        Self {
            campaign,
            store,
            clock,
            record,
            ceiling,
            session: SessionState::default(),
            listeners: Vec::new(),
        }
    }

    /// Build a controller backed by the SQLite file named in `config`.
    ///
    /// When the database cannot be opened the session runs in memory only.
    pub fn from_config(config: &Config, clock: Box<dyn Clock>) -> Self {
        let prefix = &config.storage.key_prefix;
        let db_path = config.progress_db_path();

        let store = match SqliteBackend::open(&db_path) {
            Ok(backend) => ProgressionStore::new(Box::new(backend), prefix),
            Err(e) => {
                warn!(
                    "[daylock] Progress storage unavailable ({}): {}. Progress will not survive a restart.",
                    db_path.display(),
                    e
                );
                ProgressionStore::detached(prefix)
            }
        };

        Self::new(config.campaign.clone(), store, clock)
    }

    /// Register a consumer for progress updates
    pub fn add_listener(&mut self, listener: impl ProgressListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn record(&self) -> &ProgressionRecord {
        &self.record
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn date_ceiling(&self) -> u8 {
        self.ceiling
    }

    pub fn accessible_day(&self) -> u8 {
        compute_accessible_day(&self.record, self.ceiling)
    }

    /// Whether the last storage access failed
    pub fn is_storage_degraded(&self) -> bool {
        self.store.is_degraded()
    }

    /// Screen that should be mounted now
    pub fn view(&self) -> View {
        if self.campaign.ready_gate {
            match self.record.ready_state {
                ReadyState::Initial => return View::GateInitial,
                ReadyState::Emergency => return View::GateEmergency,
                ReadyState::Ready => {}
            }
        }

        if let Some(day) = self.session.pending_celebration {
            View::CelebrationInterstitial(day)
        } else if self.session.challenge_active {
            View::ChallengeActive(self.session.viewing_day)
        } else {
            View::Dashboard
        }
    }

    /// Dashboard status of `day`
    pub fn day_status(&self, day: u8) -> DayStatus {
        // A finished campaign shows every card as done, whatever the date
        if self.record.is_finished() {
            return DayStatus::Completed;
        }

        if day > self.ceiling {
            DayStatus::LockedByDate
        } else if day > self.record.unlocked_day {
            DayStatus::LockedByProgress
        } else if day < self.record.unlocked_day {
            DayStatus::Completed
        } else {
            DayStatus::Current
        }
    }

    /// Whether selecting `day` on the dashboard opens its challenge
    pub fn is_launchable(&self, day: u8) -> bool {
        !self.record.is_finished() && (1..=TOTAL_DAYS).contains(&day) && day <= self.accessible_day()
    }

    /// Read-only state for display components
    pub fn snapshot(&self) -> DashboardSnapshot {
        let days = (1..=TOTAL_DAYS)
            .map(|day| DaySnapshot {
                day,
                title: self.campaign.title(day),
                status: self.day_status(day),
                unlock_date: unlock_date(self.campaign.start_date, day),
                launchable: self.is_launchable(day),
            })
            .collect();

        DashboardSnapshot {
            view: self.view(),
            accessible_day: self.accessible_day(),
            unlocked_day: self.record.unlocked_day,
            completed_days: self.record.completed_days(),
            ready_state: self.record.ready_state,
            date_ceiling: self.ceiling,
            progress_percent: progress_percent(self.record.unlocked_day),
            finished: self.record.is_finished(),
            storage_degraded: self.store.is_degraded(),
            days,
        }
    }

    /// Re-read the clock and raise the date ceiling if a midnight has passed.
    ///
    /// Returns `true` when the ceiling changed.
    pub fn refresh(&mut self) -> bool {
        let computed = compute_date_ceiling(self.clock.now(), self.campaign.start_date);
        if computed > self.ceiling {
            info!(
                "[daylock] Date ceiling raised from {} to {}",
                self.ceiling, computed
            );
            self.ceiling = computed;
            true
        } else {
            debug!("[daylock] Date ceiling unchanged at {}", self.ceiling);
            false
        }
    }

    /// "Yes" on the gate
    pub fn confirm_ready(&mut self) -> Transition {
        let from = self.view();
        if from != View::GateInitial {
            return self.ignore(IgnoreReason::WrongView(from), "confirm_ready");
        }
        self.mark_ready(from)
    }

    /// "No" on the gate. Not persisted: the gate returns on the next start.
    pub fn decline_ready(&mut self) -> Transition {
        let from = self.view();
        if from != View::GateInitial {
            return self.ignore(IgnoreReason::WrongView(from), "decline_ready");
        }
        self.record.ready_state = ReadyState::Emergency;
        self.moved(from)
    }

    /// Back out of the emergency screen into the dashboard
    pub fn reconsider(&mut self) -> Transition {
        let from = self.view();
        if from != View::GateEmergency {
            return self.ignore(IgnoreReason::WrongView(from), "reconsider");
        }
        self.mark_ready(from)
    }

    /// Open the challenge for `day` if it is accessible
    pub fn select_day(&mut self, day: u8) -> Transition {
        let from = self.view();
        if from != View::Dashboard {
            return self.ignore(IgnoreReason::WrongView(from), "select_day");
        }
        if !self.is_launchable(day) {
            return self.ignore(IgnoreReason::DayNotAccessible(day), "select_day");
        }

        self.session.viewing_day = day;
        self.session.challenge_active = true;
        self.moved(from)
    }

    /// Leave the challenge without completing it
    pub fn exit_challenge(&mut self) -> Transition {
        let from = self.view();
        if !matches!(from, View::ChallengeActive(_)) {
            return self.ignore(IgnoreReason::WrongView(from), "exit_challenge");
        }
        self.session.challenge_active = false;
        self.moved(from)
    }

    /// Completion signal from the mounted challenge.
    ///
    /// Only the first signal per mounted challenge has any effect. Replaying
    /// an already completed day returns to the dashboard without touching
    /// progression.
    pub fn complete_challenge(&mut self) -> Transition {
        let from = self.view();
        let View::ChallengeActive(day) = from else {
            return self.ignore(IgnoreReason::WrongView(from), "complete_challenge");
        };

        if day != self.record.unlocked_day {
            debug!(
                "[daylock] Day {} completed again (frontier is {}), progression unchanged",
                day, self.record.unlocked_day
            );
            self.session.challenge_active = false;
            return self.moved(from);
        }

        if self.campaign.requires_celebration(day) {
            self.session.pending_celebration = Some(day);
            return self.moved(from);
        }

        self.advance(day)
    }

    /// Dismiss the celebration interstitial and record the day
    pub fn proceed_celebration(&mut self) -> Transition {
        let from = self.view();
        let View::CelebrationInterstitial(day) = from else {
            return self.ignore(IgnoreReason::WrongView(from), "proceed_celebration");
        };
        self.advance(day)
    }

    /// Record `day` as completed.
    ///
    /// Only reachable from the mounted challenge for `day` or its
    /// celebration screen, and only for the frontier day within today's
    /// date ceiling. On success: `unlocked_day` becomes `day + 1`, the
    /// record is saved once, listeners are notified once, and the dashboard
    /// is shown.
    fn advance(&mut self, day: u8) -> Transition {
        let from = self.view();
        let mounted = matches!(
            from,
            View::ChallengeActive(d) | View::CelebrationInterstitial(d) if d == day
        );
        if !mounted {
            return self.ignore(IgnoreReason::WrongView(from), "advance");
        }
        if day > self.accessible_day() {
            return self.ignore(IgnoreReason::DayNotAccessible(day), "advance");
        }

        let frontier = self.record.unlocked_day;
        if day != frontier || day > TOTAL_DAYS {
            return self.ignore(IgnoreReason::NotFrontier { day, frontier }, "advance");
        }

        self.record.unlocked_day = day + 1;
        self.store.save(&self.record);

        self.session.challenge_active = false;
        self.session.pending_celebration = None;

        let update = ProgressUpdate {
            completed_day: day,
            unlocked_day: self.record.unlocked_day,
            percent: progress_percent(self.record.unlocked_day),
        };
        info!(
            "[daylock] Day {} complete, unlocked_day={} ({:.0}%)",
            day, update.unlocked_day, update.percent
        );
        for listener in &mut self.listeners {
            listener.on_progress(&update);
        }

        self.moved(from)
    }

    fn mark_ready(&mut self, from: View) -> Transition {
        self.record.ready_state = ReadyState::Ready;
        self.store.save(&self.record);
        info!("[daylock] Ready gate acknowledged");
        self.moved(from)
    }

    fn moved(&self, from: View) -> Transition {
        let to = self.view();
        debug!("[daylock] {} -> {}", from.label(), to.label());
        Transition::Moved { from, to }
    }

    fn ignore(&self, reason: IgnoreReason, action: &str) -> Transition {
        debug!("[daylock] Ignored {}: {:?}", action, reason);
        Transition::Ignored(reason)
    }
}

impl std::fmt::Debug for SessionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionController")
            .field("record", &self.record)
            .field("ceiling", &self.ceiling)
            .field("session", &self.session)
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}
