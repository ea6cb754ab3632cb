use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Main command-line interface for the request desk
///
/// The desk tracks business requests (vacation, expenses, equipment, IT
/// support, ...) through an approval workflow. Requests live in memory for
/// the lifetime of one process, so work happens in a session: a script of
/// commands read from a file or stdin, or an MCP server for AI assistants.
#[derive(Parser)]
#[command(version, about, name = "desk")]
pub struct Args {
    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Accept any status change instead of enforcing the approval workflow
    #[arg(long, global = true)]
    pub allow_any_transition: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the desk CLI
///
/// - `run`: Execute session commands, one per line (the default)
/// - `serve`: Start the MCP server for AI assistant integration
#[derive(Subcommand)]
pub enum Commands {
    /// Run session commands from a script file, or stdin when omitted
    #[command(alias = "r")]
    Run {
        /// Script with one command per line; '#' starts a comment line
        script: Option<PathBuf>,
    },
    /// Start the MCP server
    Serve,
}
