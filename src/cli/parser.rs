use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rOvertime
/// CLI application to track worked days and overtime balances with SQLite
#[derive(Parser)]
#[command(
    name = "rovertime",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track daily clock-in/clock-out and compute overtime/deficit against a work schedule",
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

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show, list or select the work schedule
    Schedule {
        #[arg(long = "list", help = "List the available schedules")]
        list: bool,

        #[arg(long = "set", value_name = "ID", help = "Select the schedule to use")]
        set: Option<String>,
    },

    /// Add a worked day
    Add {
        /// Date of the day (YYYY-MM-DD or DD/MM/YYYY, default: today)
        date: Option<String>,

        #[arg(long = "in", help = "Clock-in time (HH:MM)")]
        start: Option<String>,

        #[arg(long = "out", help = "Clock-out time (HH:MM)")]
        end: Option<String>,
    },

    /// Edit the date or clock times of a record
    Edit {
        /// Record id (or an unambiguous prefix, as shown by `list`)
        id: String,

        #[arg(long = "date", help = "New date (YYYY-MM-DD or DD/MM/YYYY)")]
        date: Option<String>,

        #[arg(long = "in", help = "New clock-in time (HH:MM)", conflicts_with = "clear_in")]
        start: Option<String>,

        #[arg(long = "out", help = "New clock-out time (HH:MM)", conflicts_with = "clear_out")]
        end: Option<String>,

        #[arg(long = "clear-in", help = "Remove the clock-in time")]
        clear_in: bool,

        #[arg(long = "clear-out", help = "Remove the clock-out time")]
        clear_out: bool,
    },

    /// Delete a record
    Del {
        /// Record id (or an unambiguous prefix)
        id: String,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List the records of a month
    List {
        #[arg(long, short, value_name = "YYYY-MM", help = "Month to show (default: current)")]
        month: Option<String>,

        #[arg(long = "all", help = "List every record", conflicts_with = "month")]
        all: bool,
    },

    /// Monthly balance, statistics and per-day chart
    Summary {
        #[arg(long, short, value_name = "YYYY-MM", help = "Month to summarize (default: current)")]
        month: Option<String>,

        #[arg(long = "chart", help = "Draw the per-day chart")]
        chart: bool,

        #[arg(long = "json", help = "Print the summary as JSON")]
        json: bool,
    },

    /// Export records to CSV, PDF or JSON
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Output file (default: generated name)")]
        file: Option<String>,

        #[arg(
            long,
            value_name = "DIR",
            conflicts_with = "file",
            help = "Output directory for the generated file name"
        )]
        dir: Option<String>,

        #[arg(long, short, value_name = "YYYY-MM", help = "Export a single month")]
        month: Option<String>,

        #[arg(long = "no-schedule", help = "Leave out the schedule column and row")]
        no_schedule: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing file")]
        force: bool,
    },

    /// Replace all records with the content of a CSV file
    Import {
        /// CSV file to import
        file: String,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
