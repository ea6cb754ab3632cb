//! Request desk CLI application
//!
//! Runs a session of request commands against an in-memory store, or serves
//! the same store over MCP.

mod args;
mod cli;
mod mcp;
mod renderer;
mod session;

use std::{fs::File, io, io::BufReader};

use Commands::*;
use anyhow::{Context, Result, bail};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use desk_core::{StoreBuilder, TransitionPolicy};
use log::info;
use mcp::{DeskMcpServer, run_stdio_server};
use renderer::TerminalRenderer;
use session::run_session;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        no_color,
        allow_any_transition,
        command,
    } = Args::parse();

    let policy = if allow_any_transition {
        TransitionPolicy::Permissive
    } else {
        TransitionPolicy::Enforced
    };
    let store = StoreBuilder::new().with_transition_policy(policy).build();

    info!("Request desk started with {policy:?} transitions");

    match command.unwrap_or(Run { script: None }) {
        Run { script } => {
            let mut cli = Cli::new(store, TerminalRenderer::new(!no_color));
            let failed = match script {
                Some(path) => {
                    let file = File::open(&path)
                        .with_context(|| format!("Failed to open script {}", path.display()))?;
                    run_session(&mut cli, BufReader::new(file))?
                }
                None => run_session(&mut cli, io::stdin().lock())?,
            };
            if failed > 0 {
                bail!("{failed} session command(s) failed");
            }
            Ok(())
        }
        Serve => {
            info!("Starting request desk MCP server");
            run_stdio_server(DeskMcpServer::new(store))
                .await
                .context("MCP server failed")
        }
    }
}
