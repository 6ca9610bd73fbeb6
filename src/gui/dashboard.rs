//! Dashboard: progress bar and the six day cards

use eframe::egui::{self, RichText};

use super::app::UiAction;
use super::gate::render_warning_banner;
use super::theme::{
    ACCENT_GREEN, BG_SECONDARY, BG_UNLOCKED, STATUS_COMPLETED, STATUS_CURRENT,
    STATUS_LOCKED_DATE, STATUS_LOCKED_PROGRESS, TEXT_DIM, TEXT_MUTED,
};
use crate::session::{DashboardSnapshot, DaySnapshot, DayStatus};

const CARD_WIDTH: f32 = 180.0;
const CARD_HEIGHT: f32 = 120.0;

pub(super) fn render_dashboard(ui: &mut egui::Ui, snapshot: &DashboardSnapshot) -> Option<UiAction> {
    let mut action = None;

    render_progress(ui, snapshot);
    ui.add_space(16.0);
    render_warning_banner(ui);
    ui.add_space(24.0);

    egui::Grid::new("day_cards")
        .num_columns(3)
        .spacing([16.0, 16.0])
        .show(ui, |ui| {
            for card in &snapshot.days {
                if render_card(ui, card) {
                    action = Some(UiAction::SelectDay(card.day));
                }
                if card.day % 3 == 0 {
                    ui.end_row();
                }
            }
        });

    if snapshot.finished {
        ui.add_space(24.0);
        ui.label(RichText::new("ALL PROTOCOLS VERIFIED").color(ACCENT_GREEN).strong());
    }

    action
}

fn render_progress(ui: &mut egui::Ui, snapshot: &DashboardSnapshot) {
    ui.horizontal(|ui| {
        ui.label(RichText::new("RECOVERY PROGRESS").color(ACCENT_GREEN).size(12.0).strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                RichText::new(format!("{:.0}%", snapshot.progress_percent))
                    .color(ACCENT_GREEN)
                    .size(20.0)
                    .strong(),
            );
        });
    });
    ui.add(
        egui::ProgressBar::new((snapshot.progress_percent / 100.0) as f32)
            .fill(ACCENT_GREEN)
            .desired_height(12.0),
    );
}

/// One card; returns `true` when a launchable card was clicked
fn render_card(ui: &mut egui::Ui, card: &DaySnapshot) -> bool {
    let (detail, color) = match card.status {
        DayStatus::Completed => ("VERIFIED".to_string(), STATUS_COMPLETED),
        DayStatus::Current => ("PENDING".to_string(), STATUS_CURRENT),
        DayStatus::LockedByDate => (
            format!("UNLOCKS {}", card.unlock_date.format("%b %-d")),
            STATUS_LOCKED_DATE,
        ),
        DayStatus::LockedByProgress => ("LOCKED".to_string(), STATUS_LOCKED_PROGRESS),
    };

    let (fill, stroke) = if card.launchable {
        (BG_UNLOCKED, egui::Stroke::new(2.0, color))
    } else {
        (BG_SECONDARY, egui::Stroke::new(1.0, TEXT_MUTED))
    };

    let response = egui::Frame::NONE
        .fill(fill)
        .stroke(stroke)
        .corner_radius(8.0)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_min_size(egui::vec2(CARD_WIDTH, CARD_HEIGHT));
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(format!("PROTOCOL {:02}", card.day))
                        .color(TEXT_DIM)
                        .size(11.0),
                );
                ui.add_space(8.0);
                ui.label(RichText::new(detail).color(color).strong());
                ui.add_space(8.0);
                ui.label(RichText::new(&card.title).color(TEXT_DIM).size(12.0));
                ui.add_space(8.0);
                ui.add_enabled(card.launchable, egui::Button::new("OPEN")).clicked()
            })
            .inner
        });

    response.inner
}
