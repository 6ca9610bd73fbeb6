use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "daylock")]
#[command(about = "Date-gated daily challenges with a local progress store")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.daylock/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(long, global = true)]
    date: Option<NaiveDate>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the desktop dashboard
    Gui,

    /// Show the dashboard: progress and the status of every day
    Status {
        /// Print JSON instead of human output
        #[arg(long)]
        json: bool,
    },

    /// Acknowledge the "are you ready?" gate
    Ready,

    /// Report a day's challenge as completed
    Complete {
        /// Day number (1-6)
        day: u8,
    },

    /// Write a default ~/.daylock/config.toml
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let config_path = cli
        .config
        .unwrap_or_else(daylock::Config::global_config_path);

    match cli.command {
        Some(Commands::Init { force }) => {
            cli::init::init_command(&config_path, force)?;
        }
        Some(Commands::Status { json }) => {
            let controller = cli::open_controller(&config_path, cli.date)?;
            cli::status::status_command(&controller, json)?;
        }
        Some(Commands::Ready) => {
            let mut controller = cli::open_controller(&config_path, cli.date)?;
            cli::ready::ready_command(&mut controller);
        }
        Some(Commands::Complete { day }) => {
            let mut controller = cli::open_controller(&config_path, cli.date)?;
            cli::complete::complete_command(&mut controller, day)?;
        }
        Some(Commands::Gui) | None => {
            let config = cli::load_config(&config_path)?;
            daylock::gui::run_gui(config, cli.date)?;
        }
    }

    Ok(())
}
