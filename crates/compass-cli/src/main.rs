//! Compass CLI Application
//!
//! Command-line interface and MCP server for turning change intents into
//! plans, task breakdowns and verification checklists.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use compass_core::StoreBuilder;
use log::info;
use mcp::{run_stdio_server, CompassMcpServer};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args { root, no_color, command } = Args::parse();

    let store = StoreBuilder::new()
        .with_root(root.as_deref())
        .build()
        .context("Failed to open project")?;

    info!("Compass started in {}", store.root().display());

    if let Some(Serve) = command {
        info!("Starting Compass MCP server");
        return run_stdio_server(CompassMcpServer::new(store))
            .await
            .context("MCP server failed");
    }

    let cli = Cli::new(store, TerminalRenderer::new(!no_color));
    match command {
        Some(Init) => cli.init(),
        Some(New(args)) => cli.new_intent(args.into()),
        Some(Show(args)) => cli.show(args.into()),
        Some(Plan(args)) => cli.plan(args.into()),
        Some(Tasks(args)) => cli.tasks(args),
        Some(Checklist(args)) => cli.checklist(args.into()),
        Some(Verify(args)) => cli.verify(args.into()),
        Some(List) | Some(Serve) | None => cli.list(),
    }
}
