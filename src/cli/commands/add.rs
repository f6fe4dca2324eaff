use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::predict::Recommender;
use crate::errors::{AppError, AppResult};
use crate::models::input::WorkoutInput;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Log a new workout.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        workout_type,
        duration,
        calories,
    } = cmd
    {
        //
        // 1. Validate the raw values
        //
        let input = WorkoutInput::parse(workout_type, duration, calories)?;

        //
        // 2. Persist
        //
        let store = super::open_store(cfg)?;
        store.create(&input).map_err(|e| {
            log::error!("Error logging workout: {}", e);
            AppError::Other("Failed to log workout. Please try again.".into())
        })?;

        success(format!(
            "Logged {} for {} minutes burning {} calories.",
            input.workout_type, input.duration, input.calories
        ));

        //
        // 3. Refresh the suggestion
        //
        let recommender = Recommender::from_artifact(Path::new(&cfg.model))
            .with_default_duration(cfg.default_duration);
        info(recommender.recommend(&input.workout_type, &input.duration.to_string()));
    }

    Ok(())
}
