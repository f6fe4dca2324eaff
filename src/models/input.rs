use crate::errors::{AppError, AppResult};

/// Mutable fields of a workout, validated on the caller side before they
/// reach the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutInput {
    pub workout_type: String,
    pub duration: i64,
    pub calories: i64,
}

impl WorkoutInput {
    pub fn new(workout_type: impl Into<String>, duration: i64, calories: i64) -> Self {
        Self {
            workout_type: workout_type.into(),
            duration,
            calories,
        }
    }

    /// Build an input from raw form values.
    ///
    /// All three fields are required, and duration and calories must be
    /// integers. Range is not checked.
    pub fn parse(workout_type: &str, duration: &str, calories: &str) -> AppResult<Self> {
        let workout_type = workout_type.trim();
        let duration = duration.trim();
        let calories = calories.trim();

        if workout_type.is_empty() || duration.is_empty() || calories.is_empty() {
            return Err(AppError::InvalidInput("All fields are required.".into()));
        }

        let (Ok(duration), Ok(calories)) = (duration.parse::<i64>(), calories.parse::<i64>())
        else {
            return Err(AppError::InvalidInput(
                "Duration and Calories must be numbers.".into(),
            ));
        };

        Ok(Self::new(workout_type, duration, calories))
    }
}
