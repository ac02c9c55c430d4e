//! High-level timeline operations that return formatted wrapper types.

use super::Tracker;
use crate::{
    display::{Events, SubmitResult},
    error::{GantryError, Result},
    models::{phase_by_name, EventSubmission, ProgressSummary, Project, TimelineState, PHASES},
    params::{ProjectRef, RecordUpdate},
};

impl Tracker {
    /// Handle showing the derived timeline for a project.
    ///
    /// Fetches a fresh event snapshot and derives the status and lock flag
    /// of every phase.
    ///
    /// # Arguments
    ///
    /// * `params` - Project reference, using the configured default project
    ///   when none is given
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use gantry_core::{params::ProjectRef, TrackerBuilder};
    /// # async {
    /// let tracker = TrackerBuilder::new()
    ///     .with_api_url(Some("https://api.example.com"))
    ///     .build()?;
    /// let state = tracker.show_timeline(&ProjectRef::new("proj-7")).await?;
    /// println!("{state}");
    /// # Result::<(), gantry_core::GantryError>::Ok(())
    /// # };
    /// ```
    pub async fn show_timeline(&self, params: &ProjectRef) -> Result<TimelineState> {
        self.derive_timeline(params).await
    }

    /// Handle listing the raw timeline events of a project.
    ///
    /// Returns the events exactly as the API reports them, wrapped for
    /// display. No phase derivation is applied.
    pub async fn list_events_display(&self, params: &ProjectRef) -> Result<Events> {
        let events = self.fetch_events(params).await?;
        Ok(Events(events))
    }

    /// Handle computing the aggregate progress counters.
    ///
    /// # Returns
    ///
    /// Completed and total phase counts, the integer-rounded percentage,
    /// and the current phase index
    pub async fn progress(&self, params: &ProjectRef) -> Result<ProgressSummary> {
        let state = self.derive_timeline(params).await?;
        Ok(state.summary())
    }

    /// Handle showing the project record.
    pub async fn show_project(&self, params: &ProjectRef) -> Result<Project> {
        self.fetch_project(params).await
    }

    /// Handle recording a construction phase update.
    ///
    /// Validates the parameters locally, checks the sequential lock against
    /// a fresh event snapshot, and only then submits the event. After a
    /// successful submission, a best-effort check marks the whole project
    /// completed once every phase derives as completed.
    ///
    /// # Errors
    ///
    /// * `GantryError::UnknownPhase` / `GantryError::InvalidInput` - When
    ///   local validation fails; nothing is sent
    /// * `GantryError::PhaseLocked` - When an earlier phase is unfinished;
    ///   nothing is written
    /// * `GantryError::Api` / `GantryError::Server` - When the snapshot
    ///   fetch or the submission itself fails
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use gantry_core::{params::RecordUpdate, TrackerBuilder};
    /// # async {
    /// let tracker = TrackerBuilder::new()
    ///     .with_api_url(Some("https://api.example.com"))
    ///     .with_project(Some("proj-7"))
    ///     .build()?;
    /// let params = RecordUpdate {
    ///     phase: "Foundation".to_string(),
    ///     title: "Slab poured".to_string(),
    ///     description: Some("Concrete cured over the weekend".to_string()),
    ///     status: "completed".to_string(),
    ///     ..Default::default()
    /// };
    /// let result = tracker.record_update(&params).await?;
    /// println!("{result}");
    /// # Result::<(), gantry_core::GantryError>::Ok(())
    /// # };
    /// ```
    pub async fn record_update(&self, params: &RecordUpdate) -> Result<SubmitResult> {
        let project_id = self.resolve_project(params.project.as_deref())?;

        // Full local validation before any request goes out.
        let submission = EventSubmission::try_from(params)?;
        let phase = phase_by_name(&params.phase)
            .ok_or_else(|| GantryError::unknown_phase(params.phase.trim()))?;
        let index = phase.index();

        // Pre-flight lock check against a fresh snapshot.
        let events = self.api.list_events(project_id).await?;
        if index > 0 && crate::models::is_locked(index, &PHASES, &events) {
            return Err(GantryError::phase_locked(
                phase.name,
                PHASES[index - 1].name,
            ));
        }

        let event = self.api.create_event(project_id, &submission).await?;
        let project_completed = self.check_auto_completion(project_id).await;

        Ok(SubmitResult::new(event).with_project_completed(project_completed))
    }
}
