//! Ready gate: the warning banner with YES/NO, and the emergency screen

use eframe::egui::{self, RichText};

use super::app::UiAction;
use super::theme::{ACCENT_GREEN, ACCENT_RED, BG_ALARM, BG_SECONDARY, TEXT_DIM, TEXT_PRIMARY};

/// Banner shown above the gate question and the dashboard grid
pub(super) fn render_warning_banner(ui: &mut egui::Ui) {
    egui::Frame::NONE
        .fill(BG_ALARM)
        .stroke(egui::Stroke::new(2.0, ACCENT_RED))
        .corner_radius(8.0)
        .inner_margin(16.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("ACCESS REVOKED").heading().color(ACCENT_RED).strong());
                ui.add_space(8.0);
                ui.label(
                    RichText::new("Access has been temporarily suspended.")
                        .color(TEXT_PRIMARY)
                        .strong(),
                );
                ui.add_space(8.0);
                egui::Frame::NONE
                    .fill(BG_SECONDARY)
                    .corner_radius(4.0)
                    .inner_margin(8.0)
                    .show(ui, |ui| {
                        ui.label(RichText::new("STATUS: LOCKED_BY_PROTOCOL").monospace().color(ACCENT_RED));
                        ui.label(
                            RichText::new("REQUIRED: DAILY_VERIFICATION")
                                .monospace()
                                .color(TEXT_DIM),
                        );
                    });
                ui.add_space(8.0);
                ui.label(
                    RichText::new("Complete one verification protocol per day to regain access.")
                        .color(TEXT_DIM)
                        .size(12.0),
                );
            });
        });
}

/// "ARE YOU READY?" with YES and NO
pub(super) fn render_gate(ui: &mut egui::Ui) -> Option<UiAction> {
    let mut action = None;

    render_warning_banner(ui);
    ui.add_space(32.0);

    ui.vertical_centered(|ui| {
        ui.label(RichText::new("ARE YOU READY?").size(36.0).color(TEXT_PRIMARY).strong());
        ui.add_space(24.0);

        ui.horizontal(|ui| {
            // Centre the two buttons
            let width = 2.0 * 140.0 + 32.0;
            ui.add_space(((ui.available_width() - width) / 2.0).max(0.0));

            let yes = egui::Button::new(RichText::new("YES").size(24.0).color(egui::Color32::BLACK).strong())
                .fill(ACCENT_GREEN)
                .min_size(egui::vec2(140.0, 56.0));
            if ui.add(yes).clicked() {
                action = Some(UiAction::ConfirmReady);
            }

            ui.add_space(32.0);

            let no = egui::Button::new(RichText::new("NO").size(24.0).color(ACCENT_RED).strong())
                .fill(BG_SECONDARY)
                .stroke(egui::Stroke::new(2.0, ACCENT_RED))
                .min_size(egui::vec2(140.0, 56.0));
            if ui.add(no).clicked() {
                action = Some(UiAction::DeclineReady);
            }
        });
    });

    action
}

/// Full-screen alarm after declining; the only way out is to play
pub(super) fn render_emergency(ui: &mut egui::Ui) -> Option<UiAction> {
    let mut action = None;

    egui::Frame::NONE
        .fill(ACCENT_RED)
        .corner_radius(16.0)
        .inner_margin(32.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("EMERGENCY").size(48.0).color(egui::Color32::WHITE).strong());
                ui.add_space(16.0);
                ui.label(
                    RichText::new("Protocol violation detected!")
                        .size(20.0)
                        .color(egui::Color32::WHITE),
                );
                ui.add_space(32.0);

                let abort = egui::Button::new(
                    RichText::new("Abort and play the challenge")
                        .size(20.0)
                        .color(egui::Color32::WHITE)
                        .strong(),
                )
                .fill(egui::Color32::BLACK)
                .min_size(egui::vec2(320.0, 56.0));
                if ui.add(abort).clicked() {
                    action = Some(UiAction::Reconsider);
                }
            });
        });

    action
}
