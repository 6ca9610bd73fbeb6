//! Ready command implementation

use daylock::session::{SessionController, Transition};

/// Acknowledge the gate so the dashboard opens directly from now on
pub fn ready_command(controller: &mut SessionController) {
    match controller.confirm_ready() {
        Transition::Moved { .. } => println!("Ready. The dashboard is open."),
        Transition::Ignored(_) => println!("Nothing to do: the gate was already passed."),
    }
}
