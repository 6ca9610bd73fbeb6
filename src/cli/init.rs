//! Init command implementation

use anyhow::Result;
use std::path::Path;

use daylock::Config;

/// Write the default configuration to `path`
pub fn init_command(path: &Path, force: bool) -> Result<()> {
    if Config::init_file(path, force)? {
        println!("Wrote {}", path.display());
        println!("Edit [campaign] start_date and the six [[campaign.days]] entries to taste.");
    } else {
        println!(
            "{} already exists (use --force to overwrite).",
            path.display()
        );
    }
    Ok(())
}
