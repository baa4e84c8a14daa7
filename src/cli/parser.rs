use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rPcLogger
/// CLI application turning PC startup/shutdown events into daily work hours
#[derive(Parser)]
#[command(
    name = "rpclogger",
    version = env!("CARGO_PKG_VERSION"),
    about = "Daily work hours from PC startup/shutdown events",
    long_about = None
)]
pub struct Cli {
    /// Read records from a CSV/JSON file instead of the configured log source
    #[arg(global = true, long = "source-file", value_name = "FILE")]
    pub source_file: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Year/month selection; both default to the current month.
#[derive(Args, Debug, Clone)]
pub struct MonthArgs {
    #[arg(long, short = 'y', help = "Year (e.g. 2024)")]
    pub year: Option<String>,

    #[arg(long, short = 'm', help = "Month number, 1-12")]
    pub month: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file with default values
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
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

    /// Show the daily summary of a month
    Show {
        #[command(flatten)]
        month: MonthArgs,
    },

    /// Export the daily summary of a month to pc_events_<year>_<month>.<ext>
    Export {
        #[command(flatten)]
        month: MonthArgs,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(
            long,
            value_name = "DIR",
            help = "Output directory (default: export_dir from config)"
        )]
        dir: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },
}
