//! Prompt templates for MCP server

use rmcp::model::PromptArgument;

/// Argument definition for a prompt template
#[derive(Debug, Clone)]
pub struct PromptTemplateArg {
    pub name: String,
    pub description: String,
    pub required: bool,
}

impl From<&PromptTemplateArg> for PromptArgument {
    fn from(arg: &PromptTemplateArg) -> Self {
        PromptArgument {
            name: arg.name.clone(),
            description: Some(arg.description.clone()),
            required: Some(arg.required),
        }
    }
}

/// Definition of a prompt template
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    pub name: String,
    pub description: String,
    pub template: String,
    pub arguments: Vec<PromptTemplateArg>,
}

/// Get predefined prompt templates for timeline tracking
pub fn get_prompt_templates() -> Vec<PromptTemplate> {
    vec![
        PromptTemplate {
            name: "record".to_string(),
            description: "Turn raw site notes into a recorded timeline update using Gantry's MCP tools".to_string(),
            template: r#"You are **Gantry Site Recorder**, expert at turning raw construction site notes into clean timeline updates.

# Site Notes
{notes}

# Your Task
Record these notes as a timeline update using Gantry's MCP tools.

# Step 1: Review the Timeline
Use `show_timeline` first to see the five phases in order, their current derived status, and which phases are locked. An update against a locked phase is rejected until the phase before it is completed, so check before recording.

# Step 2: Identify the Phase
Match the notes to exactly one canonical phase (use `list_phases` if unsure):

- **Foundation**: excavation, footings, slab, waterproofing
- **Structural Work**: framing, load-bearing walls, roof structure
- **Interior Work**: wiring, plumbing, HVAC, insulation, drywall
- **Finishing**: paint, flooring, fixtures, trim
- **Handover**: final inspection, snag list, documentation, key handover

# Step 3: Record the Update
Use `record_update` with:

- **phase**: The canonical phase name from step 2
- **title**: Short summary of the work (5-8 words). Do not prefix the phase name; it is prepended automatically.
- **description**: Full detail from the notes: what was done, by whom, and anything blocking
- **status**: 'completed' only when the notes clearly say the phase is finished; otherwise 'in-progress'
- **start_date** / **end_date**: Optional YYYY-MM-DD dates when the notes give them

## Quality Guidelines

- Never invent detail that is not in the notes
- If the notes cover several phases, record one update per phase in phase order
- On ambiguous wording, prefer 'in-progress' over 'completed'; a later update can still complete the phase

# Step 4: Confirm
Use `progress_summary` to confirm the recorded update moved the timeline as expected, then report what was recorded and the new overall progress."#.to_string(),
            arguments: vec![
                PromptTemplateArg {
                    name: "notes".to_string(),
                    description: "The raw site notes to record as a timeline update".to_string(),
                    required: true,
                },
            ],
        },
        PromptTemplate {
            name: "report".to_string(),
            description: "Prepare a construction progress report from the tracked timeline".to_string(),
            template: r#"You are preparing a construction progress report from Gantry's timeline data.

# Project
{project}

If no project ID appears above, work with the tracker's configured default project by omitting the project argument in tool calls.

# Step 1: Gather the Data
1. Call `show_project` for the project record (title, overall status, dates)
2. Call `show_timeline` for the derived phase statuses and the current phase
3. Call `list_events` for the raw update history

# Step 2: Write the Report
Structure the report as:

## Overview
- Project title and overall status
- Completion percentage and current phase (from `progress_summary`)

## Phase Breakdown
One line per phase in canonical order with its derived status. Flag any phase still pending while a later phase shows progress; that usually means an update was recorded with the wrong phase name.

## Recent Activity
The latest recorded events with their dates. Summarize in your own words rather than pasting tool output.

## Next Steps
- The next phase to be worked on and what unlocks it
- Any stale dates worth flagging (e.g. an in-progress phase with no recent events)

# Tone
Factual and concise. The report goes to the project owner: avoid construction jargon, state dates explicitly, and never speculate beyond the recorded events."#.to_string(),
            arguments: vec![
                PromptTemplateArg {
                    name: "project".to_string(),
                    description: "The project ID to report on (if not provided, the configured default project is used)".to_string(),
                    required: false,
                },
            ],
        },
    ]
}
