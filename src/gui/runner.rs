//! GUI runner - opens the progress store and launches the daylock window

use anyhow::Result;
use chrono::NaiveDate;
use eframe::egui::{self, FontFamily, FontId, TextStyle};
use std::time::Duration;
use tracing::info;

use super::app::DaylockApp;
use super::theme::{BG_PRIMARY, TEXT_PRIMARY};
use crate::config::Config;
use crate::session::{Clock, ManualClock, SessionController, SystemClock};

/// Run the desktop dashboard.
///
/// `date` pins the clock to midnight of that day, for rehearsing later days.
pub fn run_gui(config: Config, date: Option<NaiveDate>) -> Result<()> {
    let clock: Box<dyn Clock> = match date {
        Some(date) => {
            info!("[daylock] Clock pinned to {}", date);
            Box::new(ManualClock::at_date(date))
        }
        None => Box::new(SystemClock),
    };

    let controller = SessionController::from_config(&config, clock);
    let refresh_interval = Duration::from_secs(config.gui.refresh_secs.max(1));
    let app = DaylockApp::new(controller, refresh_interval);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("daylock")
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([640.0, 480.0])
            .with_decorations(true)
            .with_resizable(true),
        centered: true,
        ..Default::default()
    };

    eframe::run_native(
        "daylock",
        options,
        Box::new(|cc| {
            configure_style(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run GUI: {}", e))?;

    Ok(())
}

/// Terminal look: monospace everywhere, dark panels
fn configure_style(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.text_styles = [
        (TextStyle::Heading, FontId::new(24.0, FontFamily::Monospace)),
        (TextStyle::Body, FontId::new(14.0, FontFamily::Monospace)),
        (TextStyle::Monospace, FontId::new(14.0, FontFamily::Monospace)),
        (TextStyle::Button, FontId::new(14.0, FontFamily::Monospace)),
        (TextStyle::Small, FontId::new(11.0, FontFamily::Monospace)),
    ]
    .into();
    style.visuals = egui::Visuals::dark();
    style.visuals.panel_fill = BG_PRIMARY;
    style.visuals.override_text_color = Some(TEXT_PRIMARY);
    ctx.set_style(style);
}
