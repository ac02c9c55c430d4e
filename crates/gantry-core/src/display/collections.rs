//! Collection wrapper types for displaying groups of domain objects.
//!
//! This module provides wrapper types that format collections of domain objects
//! with consistent structure and empty collection handling.

use std::{fmt, ops::Index};

use crate::models::{PhaseDefinition, TimelineEvent};

/// Newtype wrapper for displaying collections of timeline events.
///
/// This wrapper provides Display formatting for raw event listings without
/// any derivation applied. It handles empty collections gracefully and
/// formats each event using the existing TimelineEvent Display trait.
///
/// # Examples
///
/// ```rust
/// use gantry_core::{display::Events, models::TimelineEvent};
///
/// let event = TimelineEvent {
///     id: Some("evt-1".to_string()),
///     title: "Foundation - slab poured".to_string(),
///     description: None,
///     status: None,
///     event_type: Some("milestone".to_string()),
///     visibility: Some("public".to_string()),
///     created_at: None,
///     start_date: None,
///     end_date: None,
/// };
/// let events = Events(vec![event]);
/// println!("{}", events);
/// ```
pub struct Events(pub Vec<TimelineEvent>);

impl Events {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of events in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the event at the given index.
    pub fn get(&self, index: usize) -> Option<&TimelineEvent> {
        self.0.get(index)
    }

    /// Get an iterator over the events.
    pub fn iter(&self) -> std::slice::Iter<'_, TimelineEvent> {
        self.0.iter()
    }
}

impl Index<usize> for Events {
    type Output = TimelineEvent;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Events {
    type Item = TimelineEvent;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Events {
    type Item = &'a TimelineEvent;
    type IntoIter = std::slice::Iter<'a, TimelineEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Events {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No timeline events found.")
        } else {
            for event in &self.0 {
                write!(f, "{}", event)?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying the canonical phase definitions.
///
/// Formats each phase using the PhaseDefinition Display trait. Used by the
/// phase listing, which works entirely from the built-in definitions.
pub struct Phases(pub Vec<PhaseDefinition>);

impl Phases {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of phases in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the phase at the given index.
    pub fn get(&self, index: usize) -> Option<&PhaseDefinition> {
        self.0.get(index)
    }

    /// Get an iterator over the phases.
    pub fn iter(&self) -> std::slice::Iter<'_, PhaseDefinition> {
        self.0.iter()
    }
}

impl Index<usize> for Phases {
    type Output = PhaseDefinition;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Phases {
    type Item = PhaseDefinition;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Phases {
    type Item = &'a PhaseDefinition;
    type IntoIter = std::slice::Iter<'a, PhaseDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Phases {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No phases defined.")
        } else {
            for phase in &self.0 {
                write!(f, "{}", phase)?;
            }
            Ok(())
        }
    }
}
