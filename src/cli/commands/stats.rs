use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate::{Analysis, TypeFilter};
use crate::errors::AppResult;
use crate::ui::messages::{header, info, warning};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { workout_type, bins } = cmd {
        let store = super::open_store(cfg)?;
        let filter = TypeFilter::parse(workout_type);
        let analysis = store.analyze(&filter)?;

        if analysis.total_count() == 0 {
            if analysis.skipped > 0 {
                warning(format!("{} workouts skipped (bad date)", analysis.skipped));
            }
            info("No workouts logged yet.");
            return Ok(());
        }

        header("Workout Data Analysis");
        print_by_type(&analysis);
        print_histogram(&analysis, *bins);

        if analysis.skipped > 0 {
            warning(format!("{} workouts skipped (bad date)", analysis.skipped));
        }
    }
    Ok(())
}

fn print_by_type(analysis: &Analysis) {
    let shares = analysis.shares();
    let mut table = Table::new(vec![
        Column::new("Workout Type", 12),
        Column::new("Count", 5),
        Column::new("Share", 6),
        Column::new("Total Calories", 14),
    ]);

    for (t, count) in &analysis.count_by_type {
        table.add_row(vec![
            t.clone(),
            count.to_string(),
            format!("{:.1}%", shares.get(t).copied().unwrap_or(0.0)),
            analysis
                .calories_by_type
                .get(t)
                .copied()
                .unwrap_or(0)
                .to_string(),
        ]);
    }
    print!("{}", table.render());
}

fn print_histogram(analysis: &Analysis, bins: usize) {
    println!("\nWorkout Duration Distribution");
    for bin in analysis.duration_histogram(bins) {
        println!(
            "{:>7.1} - {:<7.1} | {}",
            bin.start,
            bin.end,
            "#".repeat(bin.count)
        );
    }
}
