//! Lower-level timeline operations for the Tracker.
//!
//! These operations talk to the project API and derive state; they return
//! plain domain types. The handler layer wraps them for display.

use super::Tracker;
use crate::{
    error::Result,
    models::{
        all_phases_completed, Project, TimelineEvent, TimelineState, UpdateProjectRequest, PHASES,
    },
    params::ProjectRef,
};

impl Tracker {
    /// Fetch the raw timeline event snapshot for a project.
    ///
    /// # Arguments
    ///
    /// * `params` - Project reference, using the configured default project
    ///   when none is given
    ///
    /// # Returns
    ///
    /// All timeline events the API reports, in snapshot order, with no
    /// derivation applied
    pub async fn fetch_events(&self, params: &ProjectRef) -> Result<Vec<TimelineEvent>> {
        let project_id = self.resolve_project(params.project.as_deref())?;
        self.api.list_events(project_id).await
    }

    /// Fetch the project record itself.
    pub async fn fetch_project(&self, params: &ProjectRef) -> Result<Project> {
        let project_id = self.resolve_project(params.project.as_deref())?;
        self.api.get_project(project_id).await
    }

    /// Fetch a fresh event snapshot and derive the full timeline view.
    ///
    /// # Returns
    ///
    /// Per-phase statuses and lock flags, the current phase index, and the
    /// completion counters, all derived from the snapshot
    pub async fn derive_timeline(&self, params: &ProjectRef) -> Result<TimelineState> {
        let events = self.fetch_events(params).await?;
        Ok(TimelineState::derive(&PHASES, &events))
    }

    /// Best-effort completion check after a successful submission.
    ///
    /// Refetches the event snapshot and, when every phase derives as
    /// completed, marks the whole project completed. Returns whether the
    /// project was marked. Failures are logged and swallowed; the update
    /// that triggered the check has already been recorded and stays valid
    /// either way.
    pub(crate) async fn check_auto_completion(&self, project_id: &str) -> bool {
        let events = match self.api.list_events(project_id).await {
            Ok(events) => events,
            Err(err) => {
                log::warn!("Auto-completion check skipped: {err}");
                return false;
            }
        };

        if !all_phases_completed(&PHASES, &events) {
            return false;
        }

        match self
            .api
            .update_project_status(project_id, &UpdateProjectRequest::completed())
            .await
        {
            Ok(()) => true,
            Err(err) => {
                log::warn!("Failed to mark project completed: {err}");
                false
            }
        }
    }
}
