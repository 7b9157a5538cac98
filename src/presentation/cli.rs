//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--json, --color, --verbose) are inherited by all
//! subcommands.

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Default number of records shown by `history`
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// ftpush - deploy web projects over FTP/FTPS with history and rollback
#[derive(Parser, Debug)]
#[command(name = "ftpush")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'ftpush init' in a project directory to get started.")]
pub struct Cli {
    /// Machine-readable output (NDJSON events, JSON documents)
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the deployment profile (.ftpush.json)
    Init {
        /// Replace an existing profile (history is kept)
        #[arg(short, long)]
        force: bool,
    },

    /// Build and upload the project, then record the deployment
    Push {
        /// Upload everything instead of the changes since the last deployment
        #[arg(long)]
        full: bool,

        /// Show what would happen without uploading or recording anything
        #[arg(long)]
        dry_run: bool,
    },

    /// List recorded deployments, newest first
    History {
        /// Number of records to show
        #[arg(short = 'n', long, default_value_t = DEFAULT_HISTORY_LIMIT, value_parser = clap::value_parser!(usize))]
        limit: usize,
    },

    /// Show profile, repository and tool status
    Status,

    /// Redeploy the revision of an earlier deployment
    Rollback {
        /// Ordinal from `ftpush history` (asks when omitted)
        target: Option<usize>,

        /// Skip confirmations
        #[arg(short, long)]
        yes: bool,
    },
}
