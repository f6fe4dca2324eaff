use crate::errors::AppResult;
use crate::utils::time::parse_timestamp;
use chrono::NaiveDateTime;
use serde::Serialize;

/// One row of the `workouts` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Workout {
    pub id: i64,              // ⇔ workouts.id (INTEGER PK AUTOINCREMENT)
    pub date: String,         // ⇔ workouts.date (TEXT "YYYY-MM-DD HH:MM:SS")
    pub workout_type: String, // ⇔ workouts.workout_type
    pub duration: i64,        // ⇔ workouts.duration (minutes)
    pub calories: i64,        // ⇔ workouts.calories
}

impl Workout {
    /// Parse the stored date. Kept as text on the struct so that rows with a
    /// malformed value can still be listed.
    pub fn timestamp(&self) -> AppResult<NaiveDateTime> {
        parse_timestamp(&self.date)
    }
}
