//! CLI definitions for jobdeck.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Jobdeck CLI.
#[derive(Parser)]
#[command(name = "jobdeck")]
#[command(about = "Query-state engine and client for the jobdeck scheduling dashboard")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Parse a location query string and print the canonical view state
    Inspect {
        /// Query string, e.g. "page=2&status=ACTIVE&not_username=bob"
        query: String,

        /// Entity type to assume when the query names none
        #[arg(long)]
        entity_type: Option<String>,
    },

    /// Operate on scheduled jobs through the remote API
    Jobs {
        #[command(subcommand)]
        action: JobsAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum JobsAction {
    /// List jobs matching a view
    List {
        #[command(flatten)]
        view: ViewArgs,
    },

    /// Delete jobs by id
    Delete {
        /// Entity type (defaults to the configured one)
        #[arg(long)]
        entity_type: Option<String>,

        /// Job ids
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Export jobs matching a view as CSV to stdout
    Export {
        #[command(flatten)]
        view: ViewArgs,
    },
}

/// Flags that select a view, mirroring the dashboard's location state.
#[derive(Args)]
pub(crate) struct ViewArgs {
    /// Entity type (defaults to the configured one)
    #[arg(long)]
    pub entity_type: Option<String>,

    /// Page number (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Page size (defaults to the configured one)
    #[arg(long)]
    pub limit: Option<u32>,

    /// Search text
    #[arg(long, default_value = "")]
    pub search: String,

    /// Include filter as KEY=VALUE (repeatable)
    #[arg(long = "filter", value_name = "KEY=VALUE")]
    pub filters: Vec<String>,

    /// Exclude filter as KEY=VALUE (repeatable)
    #[arg(long = "exclude", value_name = "KEY=VALUE")]
    pub excludes: Vec<String>,
}
