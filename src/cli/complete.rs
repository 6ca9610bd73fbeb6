//! Complete command implementation
//!
//! Stands in for a challenge UI: opens the day, reports its completion, and
//! acknowledges the celebration screen when the day has one.

use anyhow::{Result, bail};

use daylock::session::{IgnoreReason, SessionController, Transition, View};

pub fn complete_command(controller: &mut SessionController, day: u8) -> Result<()> {
    match controller.view() {
        View::GateInitial | View::GateEmergency => {
            bail!("The ready gate has not been passed yet. Run `daylock ready` first.");
        }
        _ => {}
    }

    if let Transition::Ignored(reason) = controller.select_day(day) {
        match reason {
            IgnoreReason::DayNotAccessible(_) => {
                let status = controller
                    .snapshot()
                    .status(day)
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                bail!("Day {} cannot be opened right now ({}).", day, status);
            }
            other => bail!("Day {} cannot be opened: {:?}", day, other),
        }
    }

    let before = controller.record().unlocked_day;
    controller.complete_challenge();

    if let View::CelebrationInterstitial(celebrated) = controller.view() {
        println!("Day {} celebration!", celebrated);
        controller.proceed_celebration();
    }

    let after = controller.record().unlocked_day;
    if after > before {
        println!(
            "Day {} complete. Progress: {:.0}%",
            day,
            controller.snapshot().progress_percent
        );
        if controller.is_storage_degraded() {
            println!("Warning: progress could not be saved and will be lost on exit.");
        }
    } else {
        println!("Day {} was already complete; progress unchanged.", day);
    }

    Ok(())
}
