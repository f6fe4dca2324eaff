use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::predict::Recommender;
use crate::errors::AppResult;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Suggest {
        workout_type,
        duration,
    } = cmd
    {
        let recommender = Recommender::from_artifact(Path::new(&cfg.model))
            .with_default_duration(cfg.default_duration);
        println!("{}", recommender.recommend(workout_type, duration.as_deref().unwrap_or("")));
    }
    Ok(())
}
