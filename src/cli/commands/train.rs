use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::training;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Train = cmd {
        let store = super::open_store(cfg)?;

        match training::train(&store, Path::new(&cfg.model)) {
            Ok((_, samples)) => {
                success("Model trained and saved successfully.");
                info(format!("{} samples, saved to {}", samples, cfg.model));
            }
            Err(AppError::Model(msg)) => warning(msg),
            Err(e) => return Err(e),
        }
    }
    Ok(())
}
