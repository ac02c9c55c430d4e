//! Timeline event endpoints.

use log::debug;

use super::ApiClient;
use crate::error::{ApiResultExt, Result};
use crate::models::{EventSubmission, TimelineEvent};

impl ApiClient {
    /// Fetch the full timeline event list for a project.
    ///
    /// Always returns the complete snapshot; derived state is recomputed
    /// from it on every call rather than patched incrementally.
    pub async fn list_events(&self, project_id: &str) -> Result<Vec<TimelineEvent>> {
        let url = format!("{}/projects/{}/timeline-events", self.base_url, project_id);
        debug!("GET {url}");

        let response = self
            .authorize(self.client.get(&url))
            .send()
            .await
            .api_context("Failed to fetch timeline events")?;
        let response = Self::check_status(response).await?;

        response
            .json()
            .await
            .api_context("Failed to parse timeline events response")
    }

    /// Create a new timeline event for a project.
    pub async fn create_event(
        &self,
        project_id: &str,
        submission: &EventSubmission,
    ) -> Result<TimelineEvent> {
        let url = format!("{}/projects/{}/timeline-events", self.base_url, project_id);
        debug!("POST {url}");

        let response = self
            .authorize(self.client.post(&url).json(submission))
            .send()
            .await
            .api_context("Failed to create timeline event")?;
        let response = Self::check_status(response).await?;

        response
            .json()
            .await
            .api_context("Failed to parse created event response")
    }
}
