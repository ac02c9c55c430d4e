//! MCP server implementation for Gantry
//!
//! This module implements the Model Context Protocol server for Gantry,
//! providing a standardized interface for AI models to inspect and update
//! the construction timeline.

use std::{future::Future, sync::Arc};

use anyhow::Result;
use gantry_core::Tracker;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{
        GetPromptRequestParam, GetPromptResult, Implementation, ListPromptsResult,
        PaginatedRequestParam, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    tool, tool_handler, tool_router, ErrorData as McpError, RoleServer, ServerHandler,
};
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;
pub mod prompts;

// Parameter wrappers and the result alias live with the handlers
pub use handlers::{McpResult, ProjectRef, RecordUpdate};

/// MCP server for Gantry
#[derive(Clone)]
pub struct GantryMcpServer {
    tracker: Arc<Tracker>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl GantryMcpServer {
    /// Create a new Gantry MCP server
    pub fn new(tracker: Tracker) -> Self {
        Self {
            tracker: Arc::new(tracker),
            tool_router: Self::tool_router(),
        }
    }

    // Each tool builds a handler set over the shared tracker and delegates
    #[tool(
        name = "show_timeline",
        description = "Show the derived construction timeline for a project. Lists all five phases in order with their derived status (pending, in-progress, or completed), marks phases that are locked behind an unfinished predecessor, and reports the current phase plus the completion percentage. Pass a project ID to override the configured default."
    )]
    async fn show_timeline(&self, params: Parameters<ProjectRef>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.tracker.clone());
        handlers.show_timeline(params).await
    }

    #[tool(
        name = "record_update",
        description = "Record a construction site update for a phase. Requires phase (one of: Foundation, Structural Work, Interior Work, Finishing, Handover), a short title, a description of the work done, and status ('in-progress' or 'completed'). Optional start_date and end_date in YYYY-MM-DD format. The update is rejected while an earlier phase is unfinished. Completing the final phase marks the whole project completed automatically."
    )]
    async fn record_update(&self, params: Parameters<RecordUpdate>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.tracker.clone());
        handlers.record_update(params).await
    }

    #[tool(
        name = "progress_summary",
        description = "Report aggregate progress for a project: completed phases out of five, the integer completion percentage, and the current phase. Use for a quick status check without the full timeline."
    )]
    async fn progress_summary(&self, params: Parameters<ProjectRef>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.tracker.clone());
        handlers.progress_summary(params).await
    }

    #[tool(
        name = "list_events",
        description = "List the raw timeline events of a project exactly as the API reports them, in API order. Shows each event's title, status, recorded time, and any start/end dates. Use to audit what was actually recorded rather than the derived phase view."
    )]
    async fn list_events(&self, params: Parameters<ProjectRef>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.tracker.clone());
        handlers.list_events(params).await
    }

    #[tool(
        name = "show_project",
        description = "Show the tracked project record: title, ID, overall status, creation and update times, and description. Pass a project ID to override the configured default."
    )]
    async fn show_project(&self, params: Parameters<ProjectRef>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.tracker.clone());
        handlers.show_project(params).await
    }

    #[tool(
        name = "list_phases",
        description = "List the five canonical construction phases in order (Foundation, Structural Work, Interior Work, Finishing, Handover) with their descriptions. The phase list is fixed; use it to pick the correct phase name before recording an update."
    )]
    async fn list_phases(&self) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.tracker.clone());
        Ok(handlers.list_phases())
    }

    /// List the prompt templates this server offers
    async fn list_prompts(
        &self,
        request: Option<PaginatedRequestParam>,
        context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        let handlers = handlers::McpHandlers::new(self.tracker.clone());
        handlers.list_prompts(request, context).await
    }

    /// Fetch one prompt with its arguments substituted in
    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        let handlers = handlers::McpHandlers::new(self.tracker.clone());
        handlers.get_prompt(request, context).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for GantryMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: "gantry".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(r#"Gantry tracks a construction project through five fixed phases, deriving the live status of each phase from the project's timeline events.

## Core Concepts
- **Phases**: Five canonical construction phases in strict order: Foundation, Structural Work, Interior Work, Finishing, Handover
- **Events**: Timeline entries recorded against the project; a phase's status is derived from the most recent event whose title names that phase
- **Sequential locking**: A phase cannot receive updates until the phase before it is completed

## Workflow Examples

### Checking Site Status
1. Use `show_timeline` to see every phase with its derived status and lock state
2. Use `progress_summary` for the completion percentage and current phase
3. Use `list_events` to audit the raw recorded events behind the derived view

### Recording Progress
1. Check the timeline with `show_timeline` first; locked phases are marked
2. Record the update with `record_update`, giving phase, title, description, and status
3. Use 'in-progress' when work starts and 'completed' when it finishes
4. When the final phase completes, the project itself is marked completed automatically

## Best Practices
- Record updates as work happens so the derived timeline stays current
- Keep titles short and put the detail in the description
- Use `list_phases` to confirm the exact phase name before recording

## Tool Categories
- **Timeline**: show_timeline, record_update, progress_summary, list_events, list_phases
- **Project**: show_project

## Phase Ordering
Phases complete strictly in order. Recording against a later phase while an earlier one is unfinished is rejected with an error naming the phase that must be completed first."#.to_string()),
        }
    }

    async fn list_prompts(
        &self,
        request: Option<PaginatedRequestParam>,
        context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        self.list_prompts(request, context).await
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        self.get_prompt(request, context).await
    }
}

/// Serve MCP over stdio until the client disconnects or a signal arrives.
pub async fn run_stdio_server(server: GantryMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Gantry MCP server on stdio");
    debug!(
        "Tool router carries {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("failed to start MCP service: {e:?}");
    })?;

    // Exit cleanly on SIGINT and SIGTERM as well as client disconnect
    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP service finished"),
                Err(e) => error!("MCP service error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("SIGINT received, shutting down");
        }
        _ = sigterm.recv() => {
            info!("SIGTERM received, shutting down");
        }
    }

    info!("MCP server stopped");
    Ok(())
}
