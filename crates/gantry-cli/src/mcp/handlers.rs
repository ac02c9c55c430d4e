//! MCP tool handlers implementation

use std::sync::Arc;

use gantry_core::{display::Phases, params as core, Tracker, PHASES};
use log::debug;
use rmcp::{
    ErrorData as McpError, RoleServer,
    handler::server::tool::Parameters,
    model::{
        CallToolResult, Content, GetPromptRequestParam, GetPromptResult, ListPromptsResult,
        PaginatedRequestParam, Prompt, PromptArgument, PromptMessage, PromptMessageContent,
        PromptMessageRole,
    },
    service::RequestContext,
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::{
    errors::to_mcp_error,
    prompts::{get_prompt_templates, PromptTemplate},
};

/// Transparent wrapper adding the MCP derives to a core parameter type.
///
/// The core parameter structs know nothing about rmcp or schemars; this
/// wrapper carries the `Deserialize` and `JsonSchema` impls the tool
/// router needs while `#[serde(transparent)]` keeps the wire format
/// identical to the wrapped type's.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

// Aliases used in the tool method signatures
pub type ProjectRef = McpParams<core::ProjectRef>;
pub type RecordUpdate = McpParams<core::RecordUpdate>;

pub type McpResult = Result<CallToolResult, McpError>;

/// Fill a template's `{name}` placeholders from the request arguments.
///
/// Required arguments must be present and must be strings; optional
/// arguments are substituted only when provided, otherwise their
/// placeholder is left in place.
fn fill_template(
    template: &PromptTemplate,
    request: &GetPromptRequestParam,
) -> Result<String, McpError> {
    let mut text = template.template.clone();
    let mut missing = Vec::new();

    for spec in &template.arguments {
        match request.arguments.as_ref().and_then(|args| args.get(&spec.name)) {
            Some(value) => {
                let Some(value) = value.as_str() else {
                    return Err(McpError::invalid_params(
                        format!("Argument '{}' must be a string", spec.name),
                        None,
                    ));
                };
                text = text.replace(&format!("{{{}}}", spec.name), value);
            }
            None if spec.required => missing.push(spec.name.as_str()),
            None => {}
        }
    }

    if missing.is_empty() {
        Ok(text)
    } else {
        Err(McpError::invalid_params(
            format!("Missing required arguments: {}", missing.join(", ")),
            None,
        ))
    }
}

/// Tracker-backed implementations behind the MCP tool surface
pub struct McpHandlers {
    tracker: Arc<Tracker>,
}

impl McpHandlers {
    pub fn new(tracker: Arc<Tracker>) -> Self {
        Self { tracker }
    }

    pub async fn show_timeline(&self, Parameters(params): Parameters<ProjectRef>) -> McpResult {
        debug!("show_timeline: {:?}", params);

        let state = self
            .tracker
            .show_timeline(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to show timeline", &e))?;

        Ok(CallToolResult::success(vec![Content::text(
            state.to_string(),
        )]))
    }

    pub async fn record_update(&self, Parameters(params): Parameters<RecordUpdate>) -> McpResult {
        debug!("record_update: {:?}", params);

        let result = self
            .tracker
            .record_update(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to record update", &e))?;

        Ok(CallToolResult::success(vec![Content::text(
            result.to_string(),
        )]))
    }

    pub async fn progress_summary(&self, Parameters(params): Parameters<ProjectRef>) -> McpResult {
        debug!("progress_summary: {:?}", params);

        let summary = self
            .tracker
            .progress(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to compute progress", &e))?;

        Ok(CallToolResult::success(vec![Content::text(
            summary.to_string(),
        )]))
    }

    pub async fn list_events(&self, Parameters(params): Parameters<ProjectRef>) -> McpResult {
        debug!("list_events: {:?}", params);

        let events = self
            .tracker
            .list_events_display(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to list events", &e))?;

        let result = format!("# Timeline Events\n\n{events}");
        Ok(CallToolResult::success(vec![Content::text(result)]))
    }

    pub async fn show_project(&self, Parameters(params): Parameters<ProjectRef>) -> McpResult {
        debug!("show_project: {:?}", params);

        let project = self
            .tracker
            .show_project(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to show project", &e))?;

        Ok(CallToolResult::success(vec![Content::text(
            project.to_string(),
        )]))
    }

    /// List the canonical phase definitions.
    ///
    /// Infallible: the phase list is a compile-time constant, so this is
    /// the one handler that returns a bare result.
    pub fn list_phases(&self) -> CallToolResult {
        debug!("list_phases");

        let result = format!("# Construction Phases\n\n{}", Phases(PHASES.to_vec()));
        CallToolResult::success(vec![Content::text(result)])
    }

    /// List the available prompt templates
    pub async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        debug!("list_prompts");

        let prompts = get_prompt_templates()
            .iter()
            .map(|template| {
                Prompt::new(
                    &template.name,
                    Some(&template.description),
                    Some(template.arguments.iter().map(PromptArgument::from).collect()),
                )
            })
            .collect();

        Ok(ListPromptsResult {
            next_cursor: None,
            prompts,
        })
    }

    /// Look up a prompt by name and fill in its arguments
    pub async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        debug!("get_prompt: {}", request.name);

        let templates = get_prompt_templates();
        let template = templates
            .iter()
            .find(|t| t.name == request.name)
            .ok_or_else(|| McpError::invalid_params("Prompt not found", None))?;

        let prompt_text = fill_template(template, &request)?;

        Ok(GetPromptResult {
            description: Some(template.description.clone()),
            messages: vec![PromptMessage {
                role: PromptMessageRole::User,
                content: PromptMessageContent::text(prompt_text),
            }],
        })
    }
}
