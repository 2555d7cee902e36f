use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rSupply
/// CLI application to track consumable depletion with SQLite
#[derive(Parser)]
#[command(
    name = "rsupply",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track consumable inventory depletion across bases: live stock, time left and shortfall, stored in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Freeze "now" at the given epoch milliseconds instead of the wall clock
    #[arg(global = true, long = "now-ms", hide = true, allow_negative_numbers = true)]
    pub now_ms: Option<i64>,

    #[command(subcommand)]
    pub command: Commands,
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

    /// Manage profiles (bases)
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Add a row to the selected profile
    Add {
        /// Item name
        name: String,

        #[arg(long = "rate", help = "Consumption per hour (>= 0)")]
        rate: f64,

        #[arg(long = "inventory", help = "Current stock (>= 0)")]
        inventory: f64,
    },

    /// Show live inventory and time left for the selected profile
    List {
        #[arg(long = "watch", help = "Refresh the table periodically until interrupted")]
        watch: bool,
    },

    /// Change the consumption rate of a row (stock used so far is kept)
    Rate {
        /// Row id or name
        row: String,
        /// New consumption per hour
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Record a manual inventory count for a row
    Stock {
        /// Row id or name
        row: String,
        /// Counted quantity
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Rename a row
    Rename {
        /// Row id or name
        row: String,
        /// New name
        name: String,
    },

    /// Remove a row from the selected profile
    Del {
        /// Row id or name
        row: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Compute how much is missing to cover a number of hours
    Calc {
        #[arg(long = "hours", help = "Horizon in hours (default: the profile setting)")]
        hours: Option<f64>,
    },

    /// Export all profiles as a share link, a data value or JSON
    Export {
        #[arg(long, value_enum, default_value = "link")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        #[arg(long = "base-url", value_name = "URL")]
        base_url: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Import profiles from a share link, a data value or a JSON file (replaces everything)
    Import {
        /// Link or data value
        #[arg(required_unless_present = "file")]
        src: Option<String>,

        #[arg(long, value_name = "FILE", conflicts_with = "src")]
        file: Option<String>,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

#[derive(Subcommand)]
pub enum ProfileAction {
    /// List all profiles
    List,

    /// Create a profile and select it
    Add {
        /// Profile name (default from config)
        name: Option<String>,
    },

    /// Select the active profile
    Select {
        /// Profile id or name
        profile: String,
    },

    /// Rename a profile
    Rename {
        /// Profile id or name
        profile: String,
        /// New name
        name: String,
    },

    /// Delete a profile and all its rows
    Del {
        /// Profile id or name
        profile: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Set the default shortfall horizon of the selected profile
    Hours {
        /// Hours (>= 0)
        hours: f64,
    },
}
