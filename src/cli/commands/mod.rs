pub mod add;
pub mod config;
pub mod del;
pub mod edit;
pub mod init;
pub mod list;
pub mod stats;
pub mod suggest;
pub mod train;

use crate::config::Config;
use crate::core::store::{StoreMode, WorkoutStore};
use crate::errors::AppResult;

/// Open the configured store in the configured mode.
pub(crate) fn open_store(cfg: &Config) -> AppResult<WorkoutStore> {
    Ok(WorkoutStore::open(&cfg.database)?.with_mode(StoreMode::from_strict(cfg.strict_not_found)))
}
