use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        if !*yes && !ask_confirmation("Are you sure you want to delete this workout?") {
            info("Operation cancelled.");
            return Ok(());
        }

        let store = super::open_store(cfg)?;
        let outcome = store.delete(*id).map_err(|e| {
            log::error!("Error deleting workout {}: {}", id, e);
            AppError::Other("Failed to delete workout.".into())
        })?;

        if !store.accepts(outcome) {
            return outcome.require(*id);
        }

        success("Workout deleted successfully.");
    }
    Ok(())
}
