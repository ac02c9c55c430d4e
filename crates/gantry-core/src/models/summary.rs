//! Progress summary types.

use serde::{Deserialize, Serialize};

use super::TimelineState;

/// Aggregate progress counters for a project timeline.
///
/// Drives the "Phases N/5" counter and the progress bar; carries no
/// per-phase detail.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgressSummary {
    /// Number of completed phases
    pub completed: u32,
    /// Total number of phases
    pub total: u32,
    /// Completion percentage, integer-rounded
    pub percent: u8,
    /// Highest-indexed phase that has progressed (0-based)
    pub current_phase_index: usize,
}

impl From<&TimelineState> for ProgressSummary {
    fn from(state: &TimelineState) -> Self {
        Self {
            completed: state.completed_phases,
            total: state.phases.len() as u32,
            percent: state.percent,
            current_phase_index: state.current_phase_index,
        }
    }
}
