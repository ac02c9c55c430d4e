//! Parameter structures for Gantry operations
//!
//! This module contains shared parameter structures that can be used across
//! different interfaces (CLI, MCP, etc.) without framework-specific derives
//! or dependencies. These structures provide a clean interface for passing
//! data between different layers of the application.
//!
//! ## Architecture: Parameter Wrapper Pattern
//!
//! This module implements a parameter wrapper pattern that enables clean
//! separation of concerns between the core domain logic and
//! interface-specific frameworks:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ### Benefits
//!
//! 1. **Separation of Concerns**: Core parameter structures remain
//!    independent of UI framework dependencies (clap, schemars).
//!
//! 2. **Interface Flexibility**: Each interface (CLI, MCP) adds its own
//!    framework-specific derives without polluting core logic.
//!
//! 3. **Conditional Compilation**: JSON schema generation is enabled only
//!    behind the `schema` feature, keeping core lightweight.
//!
//! ### Usage Pattern
//!
//! Interface layers create wrapper structs that:
//! - Add framework-specific derives (clap::Args, schemars::JsonSchema, etc.)
//! - Use transparent serialization (`#[serde(transparent)]`)
//! - Convert to core parameters via `.into()` or accessor methods

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::{EventStatus, PhaseDefinition};

/// Parameters for operations that address a single project.
///
/// Used for showing the timeline, listing events, computing progress, and
/// showing the project record. When `project` is unset, the operation falls
/// back to the default project from the environment or config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ProjectRef {
    /// Project ID to operate on; omit to use the configured default
    pub project: Option<String>,
}

impl ProjectRef {
    /// Reference a specific project by ID.
    pub fn new(project: impl Into<String>) -> Self {
        Self {
            project: Some(project.into()),
        }
    }
}

/// Parameters for recording a construction phase update.
///
/// Recording is gated by phase order: a phase whose predecessor has not
/// completed rejects the update before any network write. The phase name
/// must match one of the five canonical phases exactly (case-insensitive);
/// the loose substring matching applies only when reading events back.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct RecordUpdate {
    /// Project ID to record against; omit to use the configured default
    pub project: Option<String>,
    /// Canonical phase name ('Foundation', 'Structural Work',
    /// 'Interior Work', 'Finishing', or 'Handover')
    pub phase: String,
    /// Short title of the update; the phase name is prepended automatically
    pub title: String,
    /// Description of the work done (required)
    pub description: Option<String>,
    /// New status for the phase ('in-progress' or 'completed')
    pub status: String,
    /// Optional work start date (YYYY-MM-DD)
    pub start_date: Option<String>,
    /// Optional work end date (YYYY-MM-DD)
    pub end_date: Option<String>,
}

impl RecordUpdate {
    /// Validate the parameters and resolve the typed pieces.
    ///
    /// Returns the resolved canonical phase, the parsed status, and the
    /// trimmed description. Dates are checked for ISO-8601 calendar format
    /// only; no range or ordering validation is applied.
    ///
    /// # Errors
    ///
    /// * `GantryError::UnknownPhase` - When the phase name matches no
    ///   canonical phase
    /// * `GantryError::InvalidInput` - When the title or description is
    ///   missing, the status word is invalid, or a date does not parse
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gantry_core::params::RecordUpdate;
    ///
    /// let params = RecordUpdate {
    ///     phase: "Interior Work".to_string(),
    ///     title: "Wiring finished".to_string(),
    ///     description: Some("Second-floor circuits tested".to_string()),
    ///     status: "completed".to_string(),
    ///     ..Default::default()
    /// };
    ///
    /// let (phase, status, description) = params.validate()?;
    /// assert_eq!(phase.id, 3);
    /// # use gantry_core::Result;
    /// # Result::<()>::Ok(())
    /// ```
    pub fn validate(&self) -> crate::Result<(PhaseDefinition, EventStatus, String)> {
        use std::str::FromStr;

        let phase = crate::models::phase_by_name(&self.phase)
            .ok_or_else(|| crate::GantryError::unknown_phase(&self.phase))?;

        if self.title.trim().is_empty() {
            return Err(crate::GantryError::invalid_input("title")
                .with_reason("Title must not be empty"));
        }

        let description = match self.description.as_deref().map(str::trim) {
            Some(text) if !text.is_empty() => text.to_string(),
            _ => {
                return Err(crate::GantryError::invalid_input("description").with_reason(
                    "A description of the update is required. Please describe the work done.",
                ));
            }
        };

        let status = EventStatus::from_str(&self.status).map_err(|_| {
            crate::GantryError::InvalidInput {
                field: "status".to_string(),
                reason: format!(
                    "Invalid status: {}. Must be 'in-progress' or 'completed'",
                    self.status
                ),
            }
        })?;

        validate_date("start_date", self.start_date.as_deref())?;
        validate_date("end_date", self.end_date.as_deref())?;

        Ok((phase, status, description))
    }
}

/// Check that an optional date string is an ISO-8601 calendar date.
fn validate_date(field: &str, value: Option<&str>) -> crate::Result<()> {
    if let Some(raw) = value {
        raw.parse::<jiff::civil::Date>().map_err(|_| {
            crate::GantryError::invalid_input(field).with_reason(format!(
                "Invalid date: {raw}. Expected an ISO-8601 calendar date (YYYY-MM-DD)"
            ))
        })?;
    }

    Ok(())
}
