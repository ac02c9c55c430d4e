//! Derivation of timeline state from a snapshot of events.
//!
//! Every function here is a pure function over `(phases, events)`. Nothing
//! is cached or stored; callers re-derive after every fetch so the view
//! always reflects some server snapshot, never a partial local mutation.
//!
//! Events link to phases by a case-insensitive substring match on the event
//! title. The data may be non-monotonic (a later phase completed while an
//! earlier one is still pending); derivation reports what the events say
//! and never attempts gap-filling or integrity repair.

use std::cmp::Ordering;

use super::{PhaseDefinition, PhaseStatus, ProgressSummary, TimelineEvent};

/// Derive the status of a single phase from the event snapshot.
///
/// Filters events whose title references the phase, picks the most recent
/// by creation time, and maps its reported status. No matching event means
/// the phase is still pending; a matching event without a usable status
/// still counts as work started.
pub fn phase_status(phase: &PhaseDefinition, events: &[TimelineEvent]) -> PhaseStatus {
    let mut matching: Vec<&TimelineEvent> = events
        .iter()
        .filter(|event| phase.matches(&event.title))
        .collect();

    // Most recent first. The sort is stable, so events without a parseable
    // timestamp keep their snapshot order, after all timestamped ones.
    matching.sort_by(|a, b| match (a.created_at, b.created_at) {
        (Some(a_ts), Some(b_ts)) => b_ts.cmp(&a_ts),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    match matching.first() {
        Some(latest) => PhaseStatus::from(latest.status),
        None => PhaseStatus::Pending,
    }
}

/// Whether the phase at `index` is locked against new updates.
///
/// The first phase is never locked. Any other phase is locked exactly when
/// its immediate predecessor has not completed AND the phase itself is
/// still pending. A phase that has already started stays unlocked even if
/// its predecessor later derives as incomplete.
pub fn is_locked(index: usize, phases: &[PhaseDefinition], events: &[TimelineEvent]) -> bool {
    if index == 0 || index >= phases.len() {
        return false;
    }

    phase_status(&phases[index - 1], events) != PhaseStatus::Completed
        && phase_status(&phases[index], events) == PhaseStatus::Pending
}

/// Index of the furthest phase that has progressed.
///
/// Scans from the last phase down and returns the first index whose status
/// is completed or in-progress; 0 when nothing has progressed. Trusts the
/// data as-is: a completed later phase is reported even when earlier
/// phases are still pending.
pub fn current_phase_index(phases: &[PhaseDefinition], events: &[TimelineEvent]) -> usize {
    phases
        .iter()
        .rposition(|phase| phase_status(phase, events) != PhaseStatus::Pending)
        .unwrap_or(0)
}

/// True when every phase derives as completed.
pub fn all_phases_completed(phases: &[PhaseDefinition], events: &[TimelineEvent]) -> bool {
    !phases.is_empty()
        && phases
            .iter()
            .all(|phase| phase_status(phase, events) == PhaseStatus::Completed)
}

/// Integer-rounded completion percentage.
///
/// # Examples
///
/// ```rust
/// use gantry_core::models::completion_percent;
///
/// assert_eq!(completion_percent(2, 5), 40);
/// assert_eq!(completion_percent(1, 3), 33);
/// assert_eq!(completion_percent(0, 0), 0);
/// ```
pub fn completion_percent(completed: u32, total: u32) -> u8 {
    if total == 0 {
        return 0;
    }

    ((f64::from(completed) / f64::from(total)) * 100.0).round() as u8
}

/// A phase definition joined with its derived status and lock flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseState {
    /// The canonical phase
    pub phase: PhaseDefinition,

    /// Status derived from the latest matching event
    pub status: PhaseStatus,

    /// Whether recording an update for this phase is currently blocked
    pub locked: bool,
}

/// Complete derived view of a project timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineState {
    /// Per-phase derived state, in canonical order
    pub phases: Vec<PhaseState>,

    /// Highest-indexed phase that has progressed (0-based)
    pub current_phase_index: usize,

    /// Number of phases that derive as completed
    pub completed_phases: u32,

    /// Completion percentage, integer-rounded
    pub percent: u8,
}

impl TimelineState {
    /// Derive the full timeline view from a snapshot of events.
    pub fn derive(phases: &[PhaseDefinition], events: &[TimelineEvent]) -> Self {
        let states: Vec<PhaseState> = phases
            .iter()
            .enumerate()
            .map(|(index, phase)| PhaseState {
                phase: *phase,
                status: phase_status(phase, events),
                locked: is_locked(index, phases, events),
            })
            .collect();

        let completed_phases = states
            .iter()
            .filter(|state| state.status == PhaseStatus::Completed)
            .count() as u32;
        let percent = completion_percent(completed_phases, phases.len() as u32);

        Self {
            phases: states,
            current_phase_index: current_phase_index(phases, events),
            completed_phases,
            percent,
        }
    }

    /// Aggregate progress counters for this timeline.
    pub fn summary(&self) -> ProgressSummary {
        ProgressSummary::from(self)
    }

    /// True when every phase derives as completed.
    pub fn is_complete(&self) -> bool {
        !self.phases.is_empty() && self.completed_phases as usize == self.phases.len()
    }
}
