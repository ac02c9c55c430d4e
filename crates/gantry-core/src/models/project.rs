//! Project model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::event::lenient_timestamp;
use super::ProjectStatus;

/// A project record as returned by the project API.
///
/// Read for display and written exactly once by this library: when every
/// construction phase derives as completed, the project status is patched
/// to `completed`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Server-assigned identifier
    pub id: String,

    /// Title of the project
    pub title: String,

    /// Detailed multi-line description of the project
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Top-level project status
    #[serde(default)]
    pub status: ProjectStatus,

    /// Timestamp when the project was created (UTC)
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<Timestamp>,

    /// Timestamp when the project was last modified (UTC)
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub updated_at: Option<Timestamp>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_project() {
        let json = r#"{
            "id": "proj-7",
            "title": "Lakeside Villa",
            "status": "in-progress",
            "createdAt": "2024-01-15T08:00:00Z"
        }"#;

        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.id, "proj-7");
        assert_eq!(project.status, ProjectStatus::InProgress);
        assert!(project.created_at.is_some());
        assert_eq!(project.updated_at, None);
    }

    #[test]
    fn test_missing_status_defaults_to_pending() {
        let json = r#"{"id": "proj-1", "title": "Bungalow"}"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.status, ProjectStatus::Pending);
    }
}
