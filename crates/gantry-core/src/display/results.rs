//! Result wrapper types for displaying operation outcomes.
//!
//! This module provides wrapper types that format the results of mutating
//! operations with consistent messaging and resource display.

use std::fmt;

use crate::models::TimelineEvent;

/// Wrapper type for displaying the result of a recorded timeline update.
///
/// This provides consistent formatting for submission results, including
/// a success message, the recorded event, and a note when the submission
/// pushed the project to completion.
///
/// # Examples
///
/// ```rust
/// use gantry_core::{display::SubmitResult, models::TimelineEvent};
///
/// let event = TimelineEvent {
///     id: Some("evt-9".to_string()),
///     title: "Handover - keys delivered".to_string(),
///     description: Some("Client walkthrough complete".to_string()),
///     status: None,
///     event_type: Some("milestone".to_string()),
///     visibility: Some("public".to_string()),
///     created_at: None,
///     start_date: None,
///     end_date: None,
/// };
///
/// let result = SubmitResult::new(event).with_project_completed(true);
/// println!("{}", result);
/// ```
#[derive(Debug)]
pub struct SubmitResult {
    /// The event the API stored for this update.
    pub event: TimelineEvent,

    /// Whether recording this update completed the whole project.
    pub project_completed: bool,
}

impl SubmitResult {
    /// Create a new SubmitResult wrapper.
    pub fn new(event: TimelineEvent) -> Self {
        Self {
            event,
            project_completed: false,
        }
    }

    /// Mark whether this submission triggered project completion.
    pub fn with_project_completed(mut self, project_completed: bool) -> Self {
        self.project_completed = project_completed;
        self
    }
}

impl fmt::Display for SubmitResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Recorded update: {}", self.event.title)?;
        writeln!(f)?;
        write!(f, "{}", self.event)?;
        if self.project_completed {
            writeln!(f, "All phases completed. Project status set to completed.")?;
        }
        Ok(())
    }
}
