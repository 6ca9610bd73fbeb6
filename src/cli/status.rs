//! Status command implementation

use anyhow::Result;

use daylock::TOTAL_DAYS;
use daylock::session::{DashboardSnapshot, DayStatus, SessionController};

/// Print the dashboard for today
pub fn status_command(controller: &SessionController, json: bool) -> Result<()> {
    let snapshot = controller.snapshot();

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    print_snapshot(&snapshot);
    Ok(())
}

fn print_snapshot(snapshot: &DashboardSnapshot) {
    println!(
        "Progress: {:.0}% ({} of {} days)",
        snapshot.progress_percent, snapshot.completed_days, TOTAL_DAYS
    );
    println!(
        "Screen: {}   Ready: {}   Date ceiling: day {}",
        snapshot.view.label(),
        snapshot.ready_state,
        snapshot.date_ceiling
    );
    if snapshot.storage_degraded {
        println!("Warning: progress storage unavailable, changes will not be saved.");
    }
    println!();

    for day in &snapshot.days {
        let detail = match day.status {
            DayStatus::Completed => "VERIFIED".to_string(),
            DayStatus::Current => "PENDING".to_string(),
            DayStatus::LockedByDate => {
                format!("UNLOCKS {}", day.unlock_date.format("%b %-d"))
            }
            DayStatus::LockedByProgress => "LOCKED".to_string(),
        };
        let marker = if day.launchable { ">" } else { " " };
        println!(
            "  {} Day {} [{}] {} - {}",
            marker, day.day, day.status, day.title, detail
        );
    }

    if snapshot.finished {
        println!("\nAll days complete.");
    }
}
