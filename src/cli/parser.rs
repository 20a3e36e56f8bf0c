use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for commtrack
#[derive(Parser)]
#[command(
    name = "commtrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track commissioning equipment and task records, backed by CSV files",
    long_about = None
)]
pub struct Cli {
    /// Override the data directory (useful for tests or shared drives)
    #[arg(global = true, long = "data-dir")]
    pub data_dir: Option<String>,

    /// Session role: 'admin' (requires --password) or 'guest' (read-only)
    #[arg(global = true, long = "role", default_value = "guest")]
    pub role: String,

    /// Admin passphrase, checked against the configured shared secret
    #[arg(global = true, long = "password")]
    pub password: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration, data directory and seed tables
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print: bool,

        #[arg(long = "check", help = "Check configuration for missing or broken fields")]
        check: bool,
    },

    /// Project dashboard: imminent DAC, ongoing, urgent, due, backlog, recent
    Dashboard {
        /// Reference date (YYYY-MM-DD, defaults to today)
        #[arg(long = "now")]
        now: Option<String>,
    },

    /// Equipment log: view, add, import, tag lookups
    Equipment {
        #[command(subcommand)]
        action: EquipmentAction,
    },

    /// Task management: list, register, update status
    Task {
        #[command(subcommand)]
        action: TaskAction,
    },

    /// Search the task table: any field, case-insensitive
    Search {
        /// Text to look for in any field (tag, title, PO, MER, ...)
        text: String,

        /// Exact Work Type filter; "All" disables it
        #[arg(long = "work-type", default_value = "All")]
        work_type: String,
    },

    /// Print or manage the operation log
    Log {
        #[arg(long = "print", help = "Print the operation log")]
        print: bool,
    },
}

#[derive(Subcommand)]
pub enum EquipmentAction {
    /// Show the full equipment table
    List,

    /// Add one equipment record (Admin)
    Add {
        #[arg(long = "tag")]
        tag: String,

        #[arg(long = "name")]
        name: String,

        #[arg(long = "sub-system")]
        sub_system: String,

        #[arg(long = "po")]
        po: String,

        #[arg(long = "module")]
        module: String,

        #[arg(long = "deck")]
        deck: String,

        /// Delivery Acceptance Complete target (YYYY-MM-DD)
        #[arg(long = "dac")]
        dac: String,

        /// Mechanical completion / commissioning target (YYYY-MM-DD)
        #[arg(long = "smcc")]
        smcc: String,
    },

    /// Merge an externally produced CSV batch into the table (Admin)
    Import {
        /// CSV file with exactly the equipment table's columns
        file: String,
    },

    /// Distinct Tag No values, first-seen order
    Tags,

    /// All records and distinct names for one tag
    Find { tag: String },
}

#[derive(Subcommand)]
pub enum TaskAction {
    /// List tasks, optionally filtered by status, optionally exported
    List {
        /// Status filter: 'before start', 'ongoing' or 'completed'
        #[arg(long = "status")]
        status: Option<String>,

        /// Substring filter on Work Type (case sensitivity follows the
        /// `match_case` config setting)
        #[arg(long = "work-type-contains")]
        work_type_contains: Option<String>,

        /// Export the listed tasks to this file
        #[arg(long = "export")]
        export: Option<String>,

        /// Export format
        #[arg(long = "format", value_enum, default_value = "csv")]
        format: ExportFormat,
    },

    /// Register a new task against a tag (Admin)
    Add {
        #[arg(long = "tag")]
        tag: String,

        /// Work type: installation | punch | test | routine (or full label)
        #[arg(long = "work-type")]
        work_type: String,

        /// MER reference number
        #[arg(long = "mer")]
        mer: String,

        /// Description / issues found
        #[arg(long = "description", default_value = "")]
        description: String,
    },

    /// Update the status of an existing task (Admin)
    Status {
        id: u32,

        /// New status: 'before start', 'ongoing' or 'completed'
        status: String,
    },

    /// Show one task in full
    Show { id: u32 },
}
