use clap::{Parser, Subcommand};

/// Command-line interface definition for fleettime
/// Batch driver around the segmentation/allocation engine, backed by SQLite
#[derive(Parser)]
#[command(
    name = "fleettime",
    version = env!("CARGO_PKG_VERSION"),
    about = "Trip segmentation and work-time allocation for fleet telemetry",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

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

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Re-run segmentation and allocation for a vehicle-day (or range)
    Process {
        /// Vehicle identifier (plate)
        vehicle: String,

        /// Day to process (YYYY-MM-DD)
        date: String,

        /// Process every day up to this date, inclusive
        #[arg(long = "to", help = "End of the date range (YYYY-MM-DD, inclusive)")]
        to: Option<String>,

        /// Keep previously persisted segments instead of truncating first
        #[arg(
            long = "keep",
            help = "Skip the truncate step (re-runs will append duplicate rows)"
        )]
        keep: bool,
    },

    /// List persisted segments for a vehicle-day
    List {
        /// Vehicle identifier (plate)
        vehicle: String,

        /// Day to list (YYYY-MM-DD)
        date: String,

        #[arg(long = "json", help = "Emit segments as JSON")]
        json: bool,
    },
}
