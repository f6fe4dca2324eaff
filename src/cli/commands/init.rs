use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::store::WorkoutStore;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (skipped in test mode)
///  - the SQLite database and its `workouts` table
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.as_deref(), cli.test)?;

    info("Initializing fitlogger…");
    if !cli.test {
        info(format!("Config file : {}", Config::config_file().display()));
    }
    info(format!("Database    : {}", cfg.database));

    WorkoutStore::open(&cfg.database)?;

    success(format!("Database initialized at {}", cfg.database));
    Ok(())
}
