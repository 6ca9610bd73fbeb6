//! Main application state and the eframe update loop

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use eframe::egui::{self, Align2, Id, RichText, Vec2};
use tracing::debug;

use super::theme::{ACCENT_GREEN, ACCENT_RED, BG_ALARM, BG_PRIMARY, BG_SECONDARY, TEXT_DIM};
use super::{challenge, dashboard, gate};
use crate::session::{ProgressUpdate, SessionController, Transition, View};

/// How long the progress toast stays on screen
const TOAST_DURATION: Duration = Duration::from_secs(4);

/// Something the user clicked, applied after the frame is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    ConfirmReady,
    DeclineReady,
    Reconsider,
    SelectDay(u8),
    ExitChallenge,
    CompleteChallenge,
    ProceedCelebration,
}

type ToastSlot = Rc<RefCell<Option<(ProgressUpdate, Instant)>>>;

pub struct DaylockApp {
    controller: SessionController,
    refresh_interval: Duration,
    last_refresh: Instant,
    toast: ToastSlot,
}

impl DaylockApp {
    pub fn new(mut controller: SessionController, refresh_interval: Duration) -> Self {
        let toast: ToastSlot = Rc::new(RefCell::new(None));
        let slot = Rc::clone(&toast);
        controller.add_listener(move |update: &ProgressUpdate| {
            *slot.borrow_mut() = Some((*update, Instant::now()));
        });

        Self {
            controller,
            refresh_interval,
            last_refresh: Instant::now(),
            toast,
        }
    }

    pub fn controller(&self) -> &SessionController {
        &self.controller
    }

    /// Most recent progress update still worth showing
    pub fn pending_toast(&self) -> Option<ProgressUpdate> {
        self.toast
            .borrow()
            .as_ref()
            .filter(|(_, shown)| shown.elapsed() < TOAST_DURATION)
            .map(|(update, _)| *update)
    }

    /// Route a click to the controller
    pub fn apply(&mut self, action: UiAction) -> Transition {
        debug!("[daylock] UI action {:?}", action);
        match action {
            UiAction::ConfirmReady => self.controller.confirm_ready(),
            UiAction::DeclineReady => self.controller.decline_ready(),
            UiAction::Reconsider => self.controller.reconsider(),
            UiAction::SelectDay(day) => self.controller.select_day(day),
            UiAction::ExitChallenge => self.controller.exit_challenge(),
            UiAction::CompleteChallenge => self.controller.complete_challenge(),
            UiAction::ProceedCelebration => self.controller.proceed_celebration(),
        }
    }

    /// Re-check the date once the refresh interval has passed
    fn tick(&mut self) {
        if self.last_refresh.elapsed() >= self.refresh_interval {
            self.controller.refresh();
            self.last_refresh = Instant::now();
        }
    }

    fn render_toast(&self, ctx: &egui::Context) {
        let Some(update) = self.pending_toast() else {
            return;
        };

        egui::Area::new(Id::new("progress_toast"))
            .anchor(Align2::RIGHT_TOP, Vec2::new(-20.0, 20.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::NONE
                    .fill(BG_SECONDARY)
                    .stroke(egui::Stroke::new(1.0, ACCENT_GREEN))
                    .corner_radius(8.0)
                    .inner_margin(16.0)
                    .show(ui, |ui| {
                        ui.set_min_width(240.0);
                        ui.label(
                            RichText::new(format!("DAY {} VERIFIED", update.completed_day))
                                .color(ACCENT_GREEN)
                                .strong(),
                        );
                        ui.label(
                            RichText::new(format!("Progress {:.0}%", update.percent))
                                .color(TEXT_DIM)
                                .size(12.0),
                        );
                    });
            });

        // Repaint so the toast disappears on time
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}

impl eframe::App for DaylockApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.tick();

        let snapshot = self.controller.snapshot();
        let mut action = None;

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(BG_PRIMARY).inner_margin(16.0))
            .show(ctx, |ui| {
                if snapshot.storage_degraded {
                    storage_notice(ui);
                }

                action = match snapshot.view {
                    View::GateInitial => gate::render_gate(ui),
                    View::GateEmergency => gate::render_emergency(ui),
                    View::Dashboard => dashboard::render_dashboard(ui, &snapshot),
                    View::ChallengeActive(day) => {
                        challenge::render_challenge(ui, snapshot.day(day))
                    }
                    View::CelebrationInterstitial(day) => {
                        challenge::render_celebration(ui, snapshot.day(day))
                    }
                };
            });

        self.render_toast(ctx);

        if let Some(action) = action {
            self.apply(action);
            ctx.request_repaint();
        }

        ctx.request_repaint_after(self.refresh_interval);
    }
}

/// Non-blocking banner shown while progress cannot be saved
fn storage_notice(ui: &mut egui::Ui) {
    egui::Frame::NONE
        .fill(BG_ALARM)
        .corner_radius(4.0)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                RichText::new("STORAGE OFFLINE: progress will not survive a restart")
                    .color(ACCENT_RED)
                    .size(12.0),
            );
        });
    ui.add_space(8.0);
}
