use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for mealtally
/// CLI application to log daily meals and their cost with SQLite
#[derive(Parser)]
#[command(
    name = "mealtally",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple meal logging CLI: count lunches and dinners, compute costs, export and chart them using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Person the records belong to (overrides `default_person`)
    #[arg(global = true, long = "name", short = 'n')]
    pub name: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Non-negative price per meal.
pub fn parse_price(s: &str) -> Result<f64, String> {
    let v: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a valid price", s))?;
    if !v.is_finite() || v < 0.0 {
        return Err(format!("price must be a non-negative number, got {}", s));
    }
    Ok(v)
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

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

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Save a meal record
    Add {
        /// Date of the meals (YYYY-MM-DD, `today` or `yesterday`; default today)
        #[arg(long = "date", short = 'd')]
        date: Option<String>,

        /// Lunch meals (auto mode)
        #[arg(long = "lunch", short = 'l', conflicts_with = "total")]
        lunch: Option<u32>,

        /// Dinner meals (auto mode)
        #[arg(long = "dinner", conflicts_with = "total")]
        dinner: Option<u32>,

        /// Total meals entered directly (manual mode)
        #[arg(long = "total", short = 't')]
        total: Option<u32>,

        /// Price per meal
        #[arg(long = "price", short = 'p', value_parser = parse_price, default_value = "0")]
        price: f64,
    },

    /// Show the saved records with totals and monthly summary
    List,

    /// Update lunch, dinner and price of a record
    Edit {
        id: i64,

        #[arg(long = "lunch", short = 'l')]
        lunch: Option<u32>,

        #[arg(long = "dinner")]
        dinner: Option<u32>,

        #[arg(long = "price", short = 'p', value_parser = parse_price)]
        price: Option<f64>,
    },

    /// Delete a record by ID
    Del {
        id: i64,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Totals and monthly summary
    Summary,

    /// Line chart of total meals per day, written as {name}_meals.svg
    Chart {
        #[arg(
            long,
            value_name = "DIR",
            help = "Directory for {name}_meals.svg (default: current directory)"
        )]
        dir: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export the records of the current person
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(
            long,
            value_name = "DIR",
            conflicts_with = "file",
            help = "Directory for {name}_meals.{ext} (default: current directory)"
        )]
        dir: Option<String>,

        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Send feedback or manage the feedback inbox
    Feedback {
        #[command(subcommand)]
        action: FeedbackCommand,
    },

    /// Interactive form session
    Form,

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum FeedbackCommand {
    /// Leave a message and a 1-5 rating
    Send {
        #[arg(long, short = 'm')]
        message: String,

        #[arg(long, short = 'r', default_value_t = 5,
              value_parser = clap::value_parser!(u8).range(1..=5))]
        rating: u8,
    },

    /// Read the inbox (admin)
    List {
        #[arg(long, help = "Admin password (prompted when omitted)")]
        password: Option<String>,
    },

    /// Delete a feedback entry (admin)
    Del {
        id: i64,

        #[arg(long, help = "Admin password (prompted when omitted)")]
        password: Option<String>,
    },
}
