//! Display implementations for core model types.
//!
//! This module provides `Display` trait implementations for the main model
//! types, formatting them as markdown suitable for terminal rendering.

use std::fmt;

use crate::display::datetime::LocalDateTime;
use crate::models::{
    EventStatus, PhaseDefinition, PhaseState, PhaseStatus, ProgressSummary, Project, ProjectStatus,
    TimelineEvent, TimelineState, PHASES,
};

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for PhaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for PhaseDefinition {
    /// Format a phase definition as a markdown section.
    ///
    /// Shows the phase number, name, and scope description. Used by the
    /// phase listing, which needs no API access.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}. {}", self.id, self.name)?;
        writeln!(f)?;
        writeln!(f, "{}", self.description)?;
        writeln!(f)
    }
}

impl fmt::Display for PhaseState {
    /// Format a derived phase state as a markdown section.
    ///
    /// The heading carries the status icon, and locked phases are marked
    /// so it is obvious which updates would be rejected.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.locked {
            writeln!(
                f,
                "### {}. {} ({}, 🔒 locked)",
                self.phase.id,
                self.phase.name,
                self.status.with_icon()
            )?;
        } else {
            writeln!(
                f,
                "### {}. {} ({})",
                self.phase.id,
                self.phase.name,
                self.status.with_icon()
            )?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.phase.description)?;
        writeln!(f)
    }
}

impl fmt::Display for TimelineState {
    /// Format the full derived timeline as markdown.
    ///
    /// Shows an overview with the current phase and completion counters,
    /// followed by one section per phase in canonical order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Construction Timeline")?;
        writeln!(f)?;
        if let Some(current) = self.phases.get(self.current_phase_index) {
            writeln!(
                f,
                "- Current phase: {} ({} of {})",
                current.phase.name,
                self.current_phase_index + 1,
                self.phases.len()
            )?;
        }
        writeln!(
            f,
            "- Progress: {}/{} phases completed ({}%)",
            self.completed_phases,
            self.phases.len(),
            self.percent
        )?;
        writeln!(f)?;
        writeln!(f, "## Phases")?;
        writeln!(f)?;
        for state in &self.phases {
            write!(f, "{state}")?;
        }
        Ok(())
    }
}

impl fmt::Display for TimelineEvent {
    /// Format a timeline event as a markdown section.
    ///
    /// Events without a recognized status render without a status suffix
    /// rather than guessing one.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => writeln!(f, "### {} ({})", self.title, status.with_icon())?,
            None => writeln!(f, "### {}", self.title)?,
        }
        writeln!(f)?;

        if let Some(description) = &self.description {
            if !description.is_empty() {
                writeln!(f, "{description}")?;
                writeln!(f)?;
            }
        }

        if let Some(created_at) = &self.created_at {
            writeln!(f, "- Recorded: {}", LocalDateTime(created_at))?;
        }
        if let Some(start_date) = &self.start_date {
            writeln!(f, "- Start date: {start_date}")?;
        }
        if let Some(end_date) = &self.end_date {
            writeln!(f, "- End date: {end_date}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Project {
    /// Format a project as markdown with metadata and description.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.title)?;
        writeln!(f)?;
        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- Status: {}", self.status)?;
        if let Some(created_at) = &self.created_at {
            writeln!(f, "- Created: {}", LocalDateTime(created_at))?;
        }
        if let Some(updated_at) = &self.updated_at {
            writeln!(f, "- Updated: {}", LocalDateTime(updated_at))?;
        }
        writeln!(f)?;

        if let Some(description) = &self.description {
            if !description.is_empty() {
                writeln!(f, "{description}")?;
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for ProgressSummary {
    /// Format the progress counters as a short markdown block.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Progress")?;
        writeln!(f)?;
        writeln!(
            f,
            "- Phases completed: {}/{} ({}%)",
            self.completed, self.total, self.percent
        )?;
        if let Some(current) = PHASES.get(self.current_phase_index) {
            writeln!(f, "- Current phase: {}. {}", current.id, current.name)?;
        }
        Ok(())
    }
}
