use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List = cmd {
        let store = super::open_store(cfg)?;
        let workouts = store.list()?;

        if workouts.is_empty() {
            info("No workouts logged yet.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("ID", 4),
            Column::new("Date", 19),
            Column::new("Workout Type", 12),
            Column::new("Duration (min)", 14),
            Column::new("Calories", 8),
        ]);

        for w in &workouts {
            table.add_row(vec![
                w.id.to_string(),
                w.date.clone(),
                w.workout_type.clone(),
                w.duration.to_string(),
                w.calories.to_string(),
            ]);
        }

        print!("{}", table.render());
    }
    Ok(())
}
