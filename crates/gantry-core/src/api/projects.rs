//! Project endpoints.

use log::debug;

use super::ApiClient;
use crate::error::{ApiResultExt, Result};
use crate::models::{Project, UpdateProjectRequest};

impl ApiClient {
    /// Fetch a project record.
    pub async fn get_project(&self, project_id: &str) -> Result<Project> {
        let url = format!("{}/projects/{}", self.base_url, project_id);
        debug!("GET {url}");

        let response = self
            .authorize(self.client.get(&url))
            .send()
            .await
            .api_context("Failed to fetch project")?;
        let response = Self::check_status(response).await?;

        response
            .json()
            .await
            .api_context("Failed to parse project response")
    }

    /// Update the top-level project status.
    ///
    /// Issued only by the auto-completion check after every phase derives
    /// as completed. The response body is not inspected.
    pub async fn update_project_status(
        &self,
        project_id: &str,
        request: &UpdateProjectRequest,
    ) -> Result<()> {
        let url = format!("{}/projects/{}", self.base_url, project_id);
        debug!("PATCH {url}");

        let response = self
            .authorize(self.client.patch(&url).json(request))
            .send()
            .await
            .api_context("Failed to update project status")?;
        Self::check_status(response).await?;

        Ok(())
    }
}
