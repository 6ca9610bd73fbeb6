//! Challenge placeholder and the celebration interstitial.
//!
//! The real challenge screens are mounted by the host; this one only
//! exposes the completion signal.

use eframe::egui::{self, RichText};

use super::app::UiAction;
use super::theme::{ACCENT_GREEN, ACCENT_RED, BG_SECONDARY, STATUS_CURRENT, TEXT_DIM, TEXT_PRIMARY};
use crate::session::DaySnapshot;

pub(super) fn render_challenge(ui: &mut egui::Ui, card: Option<&DaySnapshot>) -> Option<UiAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        let exit = egui::Button::new(RichText::new("EXIT").color(ACCENT_RED)).fill(BG_SECONDARY);
        if ui.add(exit).clicked() {
            action = Some(UiAction::ExitChallenge);
        }
    });
    ui.add_space(48.0);

    let (day, title) = card.map_or((0, "Unknown"), |c| (c.day, c.title.as_str()));

    ui.vertical_centered(|ui| {
        ui.label(RichText::new(format!("PROTOCOL {:02}", day)).color(TEXT_DIM));
        ui.label(RichText::new(title).heading().color(TEXT_PRIMARY).strong());
        ui.add_space(16.0);
        ui.label(RichText::new(format!("Protocol {} in progress...", day)).color(STATUS_CURRENT));
        ui.add_space(32.0);

        let done = egui::Button::new(
            RichText::new("SIMULATE COMPLETION").color(egui::Color32::BLACK).strong(),
        )
        .fill(ACCENT_GREEN)
        .min_size(egui::vec2(240.0, 44.0));
        if ui.add(done).clicked() {
            action = Some(UiAction::CompleteChallenge);
        }
    });

    action
}

pub(super) fn render_celebration(ui: &mut egui::Ui, card: Option<&DaySnapshot>) -> Option<UiAction> {
    let mut action = None;
    let title = card.map_or("", |c| c.title.as_str());

    ui.add_space(64.0);
    ui.vertical_centered(|ui| {
        ui.label(RichText::new("PROTOCOL COMPLETE").size(36.0).color(ACCENT_GREEN).strong());
        ui.add_space(8.0);
        ui.label(RichText::new(title).color(TEXT_DIM));
        ui.add_space(32.0);

        let proceed = egui::Button::new(RichText::new("Proceed").size(18.0).strong())
            .min_size(egui::vec2(200.0, 48.0));
        if ui.add(proceed).clicked() {
            action = Some(UiAction::ProceedCelebration);
        }
    });

    action
}
