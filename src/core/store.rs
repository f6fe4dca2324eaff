//! Record store for workouts.
//!
//! Every operation opens its own connection, runs one statement and drops
//! the handle before returning. Nothing is shared between calls, so callers
//! on several threads must serialize access themselves.

use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::input::WorkoutInput;
use crate::models::workout::Workout;
use crate::utils::time::now_stamp;
use std::fs;
use std::path::{Path, PathBuf};

/// How the boolean wrappers report a write that matched no row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreMode {
    /// A statement that ran without error counts as success, even on zero rows.
    #[default]
    Legacy,
    /// Zero affected rows reports failure.
    Strict,
}

impl StoreMode {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            StoreMode::Strict
        } else {
            StoreMode::Legacy
        }
    }
}

/// Result of an update or delete that executed without an I/O error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Applied,
    NotFound,
}

impl WriteOutcome {
    fn from_rows(n: usize) -> Self {
        if n == 0 {
            WriteOutcome::NotFound
        } else {
            WriteOutcome::Applied
        }
    }

    /// Turn `NotFound` into `AppError::NotFound(id)`.
    pub fn require(self, id: i64) -> AppResult<()> {
        match self {
            WriteOutcome::Applied => Ok(()),
            WriteOutcome::NotFound => Err(AppError::NotFound(id)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct WorkoutStore {
    path: PathBuf,
    mode: StoreMode,
}

impl WorkoutStore {
    /// Open the store at `path`, creating the schema if needed.
    pub fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        let store = Self {
            path: path.into(),
            mode: StoreMode::default(),
        };
        if let Some(dir) = store.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        store.pool()?.with_conn(init_db)?;
        Ok(store)
    }

    pub fn with_mode(mut self, mode: StoreMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn mode(&self) -> StoreMode {
        self.mode
    }

    fn pool(&self) -> AppResult<DbPool> {
        DbPool::new(&self.path)
    }

    /// Insert a workout stamped with the current local time.
    pub fn create(&self, input: &WorkoutInput) -> AppResult<i64> {
        let date = now_stamp();
        let id = self
            .pool()?
            .with_conn(|conn| queries::insert_workout(conn, &date, input))?;
        log::debug!("created workout {} ({})", id, input.workout_type);
        Ok(id)
    }

    pub fn get(&self, id: i64) -> AppResult<Option<Workout>> {
        self.pool()?.with_conn(|conn| queries::find_workout(conn, id))
    }

    /// All workouts, most recent first.
    pub fn list(&self) -> AppResult<Vec<Workout>> {
        self.pool()?.with_conn(queries::load_workouts)
    }

    /// All workouts, oldest first.
    pub fn history(&self) -> AppResult<Vec<Workout>> {
        self.pool()?.with_conn(queries::load_history)
    }

    pub fn update(&self, id: i64, input: &WorkoutInput) -> AppResult<WriteOutcome> {
        let n = self
            .pool()?
            .with_conn(|conn| queries::update_workout(conn, id, input))?;
        Ok(WriteOutcome::from_rows(n))
    }

    pub fn delete(&self, id: i64) -> AppResult<WriteOutcome> {
        let n = self
            .pool()?
            .with_conn(|conn| queries::delete_workout(conn, id))?;
        Ok(WriteOutcome::from_rows(n))
    }

    // ------------------------------------------------
    // Fail-soft API: errors are logged and collapsed.
    // ------------------------------------------------

    pub fn create_soft(&self, workout_type: &str, duration: i64, calories: i64) -> bool {
        match self.create(&WorkoutInput::new(workout_type, duration, calories)) {
            Ok(_) => true,
            Err(e) => {
                log::error!("Error logging workout: {}", e);
                false
            }
        }
    }

    /// Empty on read failure; the error only reaches the log.
    pub fn list_soft(&self) -> Vec<Workout> {
        self.list().unwrap_or_else(|e| {
            log::error!("Error retrieving workouts: {}", e);
            Vec::new()
        })
    }

    pub fn update_soft(&self, id: i64, workout_type: &str, duration: i64, calories: i64) -> bool {
        let res = self.update(id, &WorkoutInput::new(workout_type, duration, calories));
        self.report("updating", id, res)
    }

    pub fn delete_soft(&self, id: i64) -> bool {
        let res = self.delete(id);
        self.report("deleting", id, res)
    }

    /// Whether `outcome` counts as success under the current mode.
    pub fn accepts(&self, outcome: WriteOutcome) -> bool {
        outcome == WriteOutcome::Applied || self.mode == StoreMode::Legacy
    }

    fn report(&self, action: &str, id: i64, res: AppResult<WriteOutcome>) -> bool {
        match res {
            Ok(outcome) => {
                if outcome == WriteOutcome::NotFound {
                    log::warn!("{} workout {}: no matching row", action, id);
                }
                self.accepts(outcome)
            }
            Err(e) => {
                log::error!("Error {} workout {}: {}", action, id, e);
                false
            }
        }
    }
}
