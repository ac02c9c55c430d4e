//! Gantry CLI Application
//!
//! Command-line interface for the Gantry construction timeline tracker.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::{Cli, TimelineCommands};
use gantry_core::{params::ProjectRef, TrackerBuilder};
use log::info;
use mcp::{run_stdio_server, GantryMcpServer};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        api_url,
        api_token,
        project,
        config_file,
        no_color,
        command,
    } = Args::parse();

    let renderer = TerminalRenderer::new(!no_color);

    // The phase list is a compile-time constant; render it before building
    // the tracker so the command works without any API configuration.
    if let Some(Timeline {
        command: TimelineCommands::Phases,
    }) = &command
    {
        return Cli::render_phases(&renderer);
    }

    let tracker = TrackerBuilder::new()
        .with_api_url(api_url)
        .with_api_token(api_token)
        .with_project(project)
        .with_config_path(config_file)
        .build()
        .context("Failed to initialize tracker")?;

    info!("Gantry started");

    match command {
        Some(Timeline { command }) => {
            Cli::new(tracker, renderer)
                .handle_timeline_command(command)
                .await
        }
        Some(Project { command }) => {
            Cli::new(tracker, renderer)
                .handle_project_command(command)
                .await
        }
        Some(Serve) => {
            info!("Starting Gantry MCP server");
            run_stdio_server(GantryMcpServer::new(tracker))
                .await
                .context("MCP server failed")
        }
        None => {
            Cli::new(tracker, renderer)
                .show_timeline(&ProjectRef::default())
                .await
        }
    }
}
