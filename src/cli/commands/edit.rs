use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::input::WorkoutInput;
use crate::ui::messages::success;

/// Update type, duration and calories of an existing workout.
/// The creation timestamp is kept.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        workout_type,
        duration,
        calories,
    } = cmd
    {
        let input = WorkoutInput::parse(workout_type, duration, calories)?;

        let store = super::open_store(cfg)?;
        let outcome = store.update(*id, &input).map_err(|e| {
            log::error!("Error updating workout {}: {}", id, e);
            AppError::Other("Failed to update workout.".into())
        })?;

        if !store.accepts(outcome) {
            return outcome.require(*id);
        }

        success("Workout updated successfully.");
    }
    Ok(())
}
