use crate::export::ExportFormat;
use crate::models::agenda::AgendaFilter;
use crate::models::coverage::Coverage;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for ragenda
/// CLI agenda for events, coverage and drivers, backed by SQLite
#[derive(Parser)]
#[command(
    name = "ragenda",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small agenda CLI: schedule events, track coverage and drivers, see what is on now",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Disable colours in cards
    #[arg(global = true, long = "plain")]
    pub plain: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Editable event attributes. Every flag is optional: on `add` missing values
/// take their defaults, on `edit` they keep the stored value.
#[derive(Args, Debug, Clone, Default)]
pub struct EventArgs {
    #[arg(long, help = "Event title")]
    pub title: Option<String>,

    #[arg(long, help = "Date (YYYY-MM-DD), default: today")]
    pub date: Option<String>,

    #[arg(long = "start", help = "Start time (HH:MM)")]
    pub start: Option<String>,

    #[arg(long = "end", help = "End time (HH:MM)")]
    pub end: Option<String>,

    #[arg(long)]
    pub location: Option<String>,

    #[arg(long)]
    pub address: Option<String>,

    #[arg(
        long,
        value_enum,
        value_delimiter = ',',
        help = "Coverage: social,photo,video,press"
    )]
    pub coverage: Option<Vec<Coverage>>,

    #[arg(long = "no-coverage", conflicts_with = "coverage", help = "Clear coverage")]
    pub no_coverage: bool,

    #[arg(long = "responsible", help = "Responsible people (free text)")]
    pub responsible: Option<String>,

    #[arg(long)]
    pub equipment: Option<String>,

    #[arg(long)]
    pub notes: Option<String>,

    #[arg(long, help = "Mark as presidential agenda")]
    pub presidential: bool,

    #[arg(long = "not-presidential", conflicts_with = "presidential")]
    pub not_presidential: bool,

    #[arg(long = "driver", help = "A driver is needed")]
    pub driver: bool,

    #[arg(long = "no-driver", conflicts_with = "driver")]
    pub no_driver: bool,

    #[arg(long = "driver-name")]
    pub driver_name: Option<String>,

    #[arg(long = "driver-phone")]
    pub driver_phone: Option<String>,

    #[arg(long, help = "Status: active | cancelled")]
    pub status: Option<String>,
}

/// List filters shared by `list` and `export`.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    #[arg(long, help = "Only events on this date (YYYY-MM-DD)")]
    pub date: Option<String>,

    #[arg(long, value_enum, default_value = "all", help = "Agenda type")]
    pub agenda: AgendaFilter,

    #[arg(long, help = "Responsible name contains (case-insensitive)")]
    pub responsible: Option<String>,

    #[arg(long, conflicts_with = "date", help = "Only today's events")]
    pub today: bool,

    /// Pin "now" to a civil date-time (YYYY-MM-DDTHH:MM)
    #[arg(long = "at", hide = true)]
    pub at: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Validate the configuration file")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use (vim, nano, or custom path)")]
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

    /// Create a new event
    Add {
        #[command(flatten)]
        event: EventArgs,
    },

    /// Edit an existing event (unspecified fields keep their value)
    Edit {
        id: i64,

        #[command(flatten)]
        event: EventArgs,
    },

    /// Toggle an event between ACTIVE and CANCELLED
    Status { id: i64 },

    /// Delete an event permanently
    Del {
        id: i64,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Show a single event
    Show {
        id: i64,

        #[arg(long = "at", hide = true)]
        at: Option<String>,
    },

    /// List events (ordered by date and start time)
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Export the (filtered) agenda
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite an existing file")]
        force: bool,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, help = "Overwrite an existing file")]
        force: bool,
    },
}
