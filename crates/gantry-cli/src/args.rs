use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{ProjectCommands, TimelineCommands};

/// Main command-line interface for the Gantry construction timeline tracker
///
/// Gantry tracks a construction project through five fixed phases, deriving
/// the live status of each phase from the project's timeline events. It
/// provides a command-line interface for viewing the derived timeline and
/// recording site updates, with support for both local CLI operations and
/// MCP (Model Context Protocol) server mode for integration with AI
/// assistants.
#[derive(Parser)]
#[command(version, about, name = "gy")]
pub struct Args {
    /// Base URL of the project API. Overrides GANTRY_API_URL and the
    /// config file
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Bearer token for the project API. Overrides GANTRY_API_TOKEN and
    /// the config file
    #[arg(long, global = true)]
    pub api_token: Option<String>,

    /// Project ID to operate on. Overrides GANTRY_PROJECT and the config
    /// file
    #[arg(long, global = true)]
    pub project: Option<String>,

    /// Path to the config file. Defaults to
    /// $XDG_CONFIG_HOME/gantry/config.json
    #[arg(long, global = true)]
    pub config_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Gantry CLI
///
/// The CLI is organized into three main command categories:
/// - `timeline`: Operations on the derived construction timeline (show,
///   update, progress, events, phases)
/// - `project`: Operations on the tracked project record
/// - `serve`: Start the MCP server for AI assistant integration
#[derive(Subcommand)]
pub enum Commands {
    /// Inspect and update the construction timeline
    #[command(alias = "t")]
    Timeline {
        #[command(subcommand)]
        command: TimelineCommands,
    },
    /// Inspect the tracked project
    #[command(alias = "p")]
    Project {
        #[command(subcommand)]
        command: ProjectCommands,
    },
    /// Start the MCP server
    Serve,
}
