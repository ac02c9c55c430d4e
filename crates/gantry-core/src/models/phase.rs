//! Canonical construction phase definitions.
//!
//! The five phases below are the authoritative progression order for every
//! project. Phase identity is positional: the list is never reordered or
//! renumbered at runtime, and derived state indexes into it directly.

/// A single construction phase in the canonical progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseDefinition {
    /// Canonical position, 1-based
    pub id: u32,

    /// Short label, used for display and as the matching key against
    /// event titles
    pub name: &'static str,

    /// Human-readable summary of the work in this phase
    pub description: &'static str,
}

/// The fixed, ordered list of construction phases.
pub const PHASES: [PhaseDefinition; 5] = [
    PhaseDefinition {
        id: 1,
        name: "Foundation",
        description: "Site preparation, excavation, and foundation pouring",
    },
    PhaseDefinition {
        id: 2,
        name: "Structural Work",
        description: "Framing, load-bearing walls, and roof structure",
    },
    PhaseDefinition {
        id: 3,
        name: "Interior Work",
        description: "Electrical, plumbing, insulation, and drywall",
    },
    PhaseDefinition {
        id: 4,
        name: "Finishing",
        description: "Flooring, painting, fixtures, and trim",
    },
    PhaseDefinition {
        id: 5,
        name: "Handover",
        description: "Final inspection, cleanup, and client walkthrough",
    },
];

impl PhaseDefinition {
    /// Whether an event title references this phase.
    ///
    /// Events carry no foreign key to phases; the linkage is a
    /// case-insensitive substring match on the free-text title. Any title
    /// containing the phase name anywhere counts as a match.
    pub fn matches(&self, title: &str) -> bool {
        title.to_lowercase().contains(&self.name.to_lowercase())
    }

    /// Zero-based position of this phase in the canonical list.
    pub fn index(&self) -> usize {
        self.id as usize - 1
    }
}

/// Look up a canonical phase by name, case-insensitively.
///
/// Resolution requires the full phase name, not a substring; the loose
/// matching rule applies only to event titles.
///
/// # Examples
///
/// ```rust
/// use gantry_core::models::phase_by_name;
///
/// let phase = phase_by_name("foundation").unwrap();
/// assert_eq!(phase.id, 1);
/// assert!(phase_by_name("Demolition").is_none());
/// ```
pub fn phase_by_name(name: &str) -> Option<PhaseDefinition> {
    PHASES
        .into_iter()
        .find(|phase| phase.name.eq_ignore_ascii_case(name.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phases_are_ordered() {
        for (index, phase) in PHASES.iter().enumerate() {
            assert_eq!(phase.id as usize, index + 1);
            assert_eq!(phase.index(), index);
        }
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let foundation = PHASES[0];
        assert!(foundation.matches("FOUNDATION complete"));
        assert!(foundation.matches("Pouring the foundation today"));
        assert!(!foundation.matches("Framing started"));
    }

    #[test]
    fn test_matches_anywhere_in_title() {
        let interior = PHASES[2];
        assert!(interior.matches("Week 12: interior work resumed after delay"));
    }

    #[test]
    fn test_phase_by_name_exact_only() {
        assert_eq!(phase_by_name("Structural Work").unwrap().id, 2);
        assert_eq!(phase_by_name("structural work").unwrap().id, 2);
        assert_eq!(phase_by_name("  Handover  ").unwrap().id, 5);
        assert!(phase_by_name("Structural").is_none());
        assert!(phase_by_name("").is_none());
    }
}
