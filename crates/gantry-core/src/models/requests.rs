//! Request payloads sent to the project API.

use serde::{Deserialize, Serialize};

use super::{EventStatus, ProjectStatus};

/// Visibility assigned to every update recorded by this library.
pub const VISIBILITY_PUBLIC: &str = "public";

/// Event category assigned to every update recorded by this library.
pub const EVENT_TYPE_MILESTONE: &str = "milestone";

/// Payload for creating a timeline event.
///
/// The title is always composed as `"<phase name> - <user title>"` so the
/// phase name stays embedded in the free text; the substring heuristic that
/// links events back to phases depends on it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventSubmission {
    /// Composed event title containing the phase name
    pub title: String,

    /// Required description of the update
    pub description: String,

    /// Explicit user choice: work started or work finished
    pub status: EventStatus,

    /// Optional start date (ISO-8601 calendar date)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    /// Optional end date (ISO-8601 calendar date)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,

    /// Always [`VISIBILITY_PUBLIC`]
    pub visibility: String,

    /// Always [`EVENT_TYPE_MILESTONE`]
    pub event_type: String,
}

impl TryFrom<&crate::params::RecordUpdate> for EventSubmission {
    type Error = crate::GantryError;

    /// Convert validated record-update parameters into an API payload.
    ///
    /// Performs the full local validation pass (phase resolution, status
    /// parsing, required description, date format) and composes the event
    /// title from the canonical phase name and the user's title.
    ///
    /// # Errors
    ///
    /// * `GantryError::UnknownPhase` - When no canonical phase has the given
    ///   name
    /// * `GantryError::InvalidInput` - When the description is missing, the
    ///   status word is invalid, or a date does not parse
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gantry_core::{models::EventSubmission, params::RecordUpdate};
    ///
    /// let params = RecordUpdate {
    ///     phase: "foundation".to_string(),
    ///     title: "Slab poured".to_string(),
    ///     description: Some("Concrete cured over the weekend".to_string()),
    ///     status: "completed".to_string(),
    ///     ..Default::default()
    /// };
    ///
    /// let submission = EventSubmission::try_from(&params)?;
    /// assert_eq!(submission.title, "Foundation - Slab poured");
    /// assert_eq!(submission.visibility, "public");
    /// # use gantry_core::Result;
    /// # Result::<()>::Ok(())
    /// ```
    fn try_from(params: &crate::params::RecordUpdate) -> Result<Self, Self::Error> {
        let (phase, status, description) = params.validate()?;

        Ok(Self {
            title: format!("{} - {}", phase.name, params.title.trim()),
            description,
            status,
            start_date: params.start_date.clone(),
            end_date: params.end_date.clone(),
            visibility: VISIBILITY_PUBLIC.to_string(),
            event_type: EVENT_TYPE_MILESTONE.to_string(),
        })
    }
}

/// Body of the project-status update issued by the auto-completion check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateProjectRequest {
    /// New top-level project status
    pub status: ProjectStatus,
}

impl UpdateProjectRequest {
    /// The payload that marks a project completed.
    pub fn completed() -> Self {
        Self {
            status: ProjectStatus::Completed,
        }
    }
}
