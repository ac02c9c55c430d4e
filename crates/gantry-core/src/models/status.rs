//! Status enumerations for timeline events, phases, and projects.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Status carried on a timeline event as reported by the project API.
///
/// Events only ever declare work as started or finished. An event with no
/// status (or an unrecognized one) still counts as work started; that
/// defaulting happens during derivation, not here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum EventStatus {
    /// Work on the phase has started
    InProgress,

    /// Work on the phase is finished
    Completed,
}

impl FromStr for EventStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "in-progress" | "inprogress" | "in_progress" => Ok(EventStatus::InProgress),
            "completed" => Ok(EventStatus::Completed),
            _ => Err(format!("Invalid event status: {s}")),
        }
    }
}

impl EventStatus {
    /// Convert to the wire string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::InProgress => "in-progress",
            EventStatus::Completed => "completed",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// Uses the same icon set as [`PhaseStatus::with_icon`] so event
    /// listings and phase listings read alike.
    pub fn with_icon(&self) -> &'static str {
        match self {
            EventStatus::Completed => "✓ Completed",
            EventStatus::InProgress => "➤ In Progress",
        }
    }
}

/// Derived status of a construction phase.
///
/// Never stored or sent anywhere; computed from the latest matching event
/// on every fetch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PhaseStatus {
    /// No event references this phase yet
    Pending,

    /// The latest matching event reports work underway
    InProgress,

    /// The latest matching event reports the phase finished
    Completed,
}

impl PhaseStatus {
    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            PhaseStatus::Pending => "pending",
            PhaseStatus::InProgress => "in-progress",
            PhaseStatus::Completed => "completed",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// Returns a formatted string that includes both an icon and the status
    /// name. This method ensures consistent visual representation across
    /// all display contexts.
    ///
    /// # Icons Used
    /// - `✓ Completed` - Checkmark for finished phases
    /// - `➤ In Progress` - Arrow for active phases
    /// - `○ Pending` - Circle for phases not yet started
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gantry_core::models::PhaseStatus;
    ///
    /// assert_eq!(PhaseStatus::Completed.with_icon(), "✓ Completed");
    /// assert_eq!(PhaseStatus::InProgress.with_icon(), "➤ In Progress");
    /// assert_eq!(PhaseStatus::Pending.with_icon(), "○ Pending");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            PhaseStatus::Completed => "✓ Completed",
            PhaseStatus::InProgress => "➤ In Progress",
            PhaseStatus::Pending => "○ Pending",
        }
    }
}

impl From<Option<EventStatus>> for PhaseStatus {
    /// Map an event's reported status to the phase status it implies.
    ///
    /// An event without a usable status still implies the phase was started;
    /// the `Pending` variant is only reachable when no event matches at all.
    fn from(status: Option<EventStatus>) -> Self {
        match status {
            Some(EventStatus::Completed) => PhaseStatus::Completed,
            Some(EventStatus::InProgress) | None => PhaseStatus::InProgress,
        }
    }
}

/// Type-safe enumeration of project statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    /// Project has not started yet
    #[default]
    Pending,

    /// Project is underway
    InProgress,

    /// All construction phases are finished
    Completed,

    /// Project is paused
    OnHold,
}

impl FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(ProjectStatus::Pending),
            "in-progress" | "inprogress" | "in_progress" => Ok(ProjectStatus::InProgress),
            "completed" => Ok(ProjectStatus::Completed),
            "on-hold" | "onhold" | "on_hold" => Ok(ProjectStatus::OnHold),
            _ => Err(format!("Invalid project status: {s}")),
        }
    }
}

impl ProjectStatus {
    /// Convert to the wire string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Pending => "pending",
            ProjectStatus::InProgress => "in-progress",
            ProjectStatus::Completed => "completed",
            ProjectStatus::OnHold => "on-hold",
        }
    }
}
