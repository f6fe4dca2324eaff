use clap::{Parser, Subcommand};

/// Command-line interface definition for fitlogger
#[derive(Parser)]
#[command(
    name = "fitlogger",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log workouts, review your history and get a next-exercise suggestion (SQLite backed)",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the prediction model path
    #[arg(global = true, long = "model")]
    pub model: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show the effective configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,
    },

    /// Log a new workout
    Add {
        /// Workout type (Run, Walk, Strength, ...)
        workout_type: String,

        /// Duration in minutes
        duration: String,

        /// Calories burned
        calories: String,
    },

    /// List past workouts, most recent first
    List,

    /// Edit type, duration and calories of a workout
    Edit {
        /// Workout id (see `list`)
        id: i64,

        workout_type: String,

        duration: String,

        calories: String,
    },

    /// Delete a workout by id
    Del {
        id: i64,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Show totals, counts and duration distribution
    Stats {
        #[arg(
            long = "type",
            default_value = "All",
            help = "Filter by workout type (All = no filter)"
        )]
        workout_type: String,

        #[arg(long = "bins", default_value_t = 10, help = "Duration histogram bins")]
        bins: usize,
    },

    /// Suggest the next exercise
    Suggest {
        #[arg(long = "type", default_value = "Run", help = "Current workout type")]
        workout_type: String,

        #[arg(long = "duration", help = "Current duration in minutes")]
        duration: Option<String>,
    },

    /// Fit the next-exercise model on the stored history
    Train,
}
