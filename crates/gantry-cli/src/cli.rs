//! Command-line interface definitions and handlers
//!
//! This module defines the subcommand tree using clap's derive API and the
//! [`Cli`] handler that executes parsed commands against the tracker,
//! implementing the parameter wrapper pattern for clean separation between
//! CLI framework concerns and core domain logic.
//!
//! ## Parameter Wrapper Pattern Implementation
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Tracker
//! ```
//!
//! Each command with arguments defines a CLI-specific struct with clap
//! derives and converts it into the matching core parameter type via
//! `From`. This keeps the core types free of clap attributes, lets the CLI
//! evolve its flags and help text independently, and makes the mapping
//! between the two layers explicit and verifiable at compile time.
//!
//! Commands without arguments of their own (show, progress, events) rely on
//! the global `--project` flag, which is resolved once when the tracker is
//! built; their handlers pass a default [`ProjectRef`] through.

use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};
use gantry_core::{
    display::Phases,
    params::{ProjectRef, RecordUpdate},
    Tracker, PHASES,
};

use crate::renderer::TerminalRenderer;

/// Timeline subcommands
///
/// Everything under `gy timeline` works on the derived construction
/// timeline: the five canonical phases and the events recorded against
/// them.
#[derive(Subcommand)]
pub enum TimelineCommands {
    /// Show the derived construction timeline
    #[command(alias = "s")]
    Show,
    /// Record a site update for a phase
    #[command(alias = "u")]
    Update(RecordUpdateArgs),
    /// Show aggregate progress counters
    #[command(alias = "p")]
    Progress,
    /// List the raw timeline events
    #[command(aliases = ["e", "ls"])]
    Events,
    /// List the five canonical phase definitions
    #[command(alias = "ph")]
    Phases,
}

/// Project subcommands
#[derive(Subcommand)]
pub enum ProjectCommands {
    /// Show the tracked project record
    #[command(alias = "s")]
    Show,
}

/// Record a construction site update
///
/// CLI wrapper for RecordUpdate that adds clap-specific argument handling
/// including flags, help text generation, and status value parsing. The
/// phase name is matched case-insensitively against the five canonical
/// phases; the update is rejected when an earlier phase is unfinished.
#[derive(Args)]
pub struct RecordUpdateArgs {
    /// Phase the update belongs to
    #[arg(help = "Phase name: Foundation, Structural Work, Interior Work, Finishing, or Handover")]
    pub phase: String,
    /// Short title of the update; the phase name is prepended automatically
    pub title: String,
    /// Description of the work done
    #[arg(short, long, help = "Description of the work done (required)")]
    pub description: Option<String>,
    /// New status for the phase
    #[arg(short, long, help = "New status for the phase (in-progress, completed)")]
    pub status: StatusArg,
    /// Date the work started
    #[arg(long, help = "Date the work started (YYYY-MM-DD)")]
    pub start_date: Option<String>,
    /// Date the work ended
    #[arg(long, help = "Date the work ended (YYYY-MM-DD)")]
    pub end_date: Option<String>,
}

impl From<RecordUpdateArgs> for RecordUpdate {
    /// Convert CLI arguments to core parameter structure
    ///
    /// The project is left unset so the update targets the project resolved
    /// from the global flag, environment, or config file.
    fn from(val: RecordUpdateArgs) -> Self {
        RecordUpdate {
            project: None,
            phase: val.phase,
            title: val.title,
            description: val.description,
            status: val.status.to_string(),
            start_date: val.start_date,
            end_date: val.end_date,
        }
    }
}

/// Command-line argument representation of event status values
///
/// This enum provides the CLI interface for phase status updates,
/// converting between user-friendly command arguments and the wire status
/// strings. Used with the `--status` flag in timeline update commands.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum StatusArg {
    /// Work on the phase has started
    InProgress,
    /// Work on the phase is finished
    Completed,
}

impl std::fmt::Display for StatusArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusArg::InProgress => write!(f, "in-progress"),
            StatusArg::Completed => write!(f, "completed"),
        }
    }
}

/// Command handler connecting parsed arguments to tracker operations.
///
/// Owns the tracker and the terminal renderer for the lifetime of one
/// command invocation. Every handler formats its result through the same
/// Display implementations the MCP server uses, so both surfaces produce
/// identical markdown.
pub struct Cli {
    tracker: Tracker,
    renderer: TerminalRenderer,
}

impl Cli {
    /// Create a handler for one command invocation.
    pub fn new(tracker: Tracker, renderer: TerminalRenderer) -> Self {
        Self { tracker, renderer }
    }

    /// Dispatch a timeline subcommand.
    pub async fn handle_timeline_command(self, command: TimelineCommands) -> Result<()> {
        match command {
            TimelineCommands::Show => self.show_timeline(&ProjectRef::default()).await,
            TimelineCommands::Update(args) => self.record_update(&args.into()).await,
            TimelineCommands::Progress => self.show_progress(&ProjectRef::default()).await,
            TimelineCommands::Events => self.list_events(&ProjectRef::default()).await,
            TimelineCommands::Phases => Self::render_phases(&self.renderer),
        }
    }

    /// Dispatch a project subcommand.
    pub async fn handle_project_command(self, command: ProjectCommands) -> Result<()> {
        match command {
            ProjectCommands::Show => self.show_project(&ProjectRef::default()).await,
        }
    }

    /// Render the derived timeline for a project.
    pub async fn show_timeline(&self, params: &ProjectRef) -> Result<()> {
        let state = self.tracker.show_timeline(params).await?;
        self.renderer.render(&state.to_string())
    }

    /// Record a site update and render the submission result.
    pub async fn record_update(&self, params: &RecordUpdate) -> Result<()> {
        let result = self.tracker.record_update(params).await?;
        self.renderer.render(&result.to_string())
    }

    /// Render the aggregate progress counters.
    pub async fn show_progress(&self, params: &ProjectRef) -> Result<()> {
        let summary = self.tracker.progress(params).await?;
        self.renderer.render(&summary.to_string())
    }

    /// Render the raw timeline events.
    pub async fn list_events(&self, params: &ProjectRef) -> Result<()> {
        let events = self.tracker.list_events_display(params).await?;
        self.renderer.render(&format!("# Timeline Events\n\n{events}"))
    }

    /// Render the project record.
    pub async fn show_project(&self, params: &ProjectRef) -> Result<()> {
        let project = self.tracker.show_project(params).await?;
        self.renderer.render(&project.to_string())
    }

    /// Render the canonical phase definitions.
    ///
    /// Takes only the renderer because the phase list is a compile-time
    /// constant; no tracker or configuration is required.
    pub fn render_phases(renderer: &TerminalRenderer) -> Result<()> {
        renderer.render(&format!(
            "# Construction Phases\n\n{}",
            Phases(PHASES.to_vec())
        ))
    }
}
