//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::logs::LogLevel;

/// Top-level CLI parser for `construct-lens`.
#[derive(Debug, Parser)]
#[command(
    name = "construct-lens",
    version,
    about = "Query a construct-tree snapshot the way the console does"
)]
pub struct Cli {
    /// Snapshot file (YAML by `.yaml`/`.yml` extension, JSON otherwise).
    ///
    /// Falls back to `CONSTRUCT_LENS_SNAPSHOT`.
    #[arg(long, global = true)]
    pub snapshot: Option<PathBuf>,
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the explorer tree.
    Explorer,
    /// Print the map graph (nodes and edges).
    Map,
    /// Print the visible children of a node with their connections.
    Children {
        /// Parent node path.
        #[arg(long)]
        path: Option<String>,
    },
    /// Print the ancestors of a node, root first.
    Breadcrumbs {
        /// Node path.
        #[arg(long)]
        path: Option<String>,
    },
    /// Print a node's type and simulator attributes.
    Node {
        /// Node path.
        path: String,
    },
    /// Print a node with its de-duplicated connections.
    Metadata {
        /// Node path.
        path: String,
    },
    /// Print simulator logs.
    Logs {
        /// Levels to include, comma separated. Defaults to info,warn,error.
        #[arg(long, value_delimiter = ',')]
        levels: Vec<LogLevel>,
        /// Only entries at or after this time (RFC 3339 or epoch milliseconds).
        #[arg(long)]
        since: Option<String>,
        /// Case-insensitive text to match against message and source path.
        #[arg(long, default_value = "")]
        text: String,
    },
    /// Print the app error message, if any.
    Error,
}
