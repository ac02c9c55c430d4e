//! Data models for projects, phases, and timeline events.
//!
//! This module contains the domain models of the Gantry timeline tracker.
//! Display implementations for these models are located in
//! [`crate::display::models`] to maintain clean separation of concerns
//! between data structures and presentation logic.
//!
//! # Model Categories
//!
//! The models split into three groups with different ownership:
//!
//! 1. **Canonical definitions** ([`phase`]): the fixed, ordered list of
//!    construction phases. Compiled in, never changed at runtime.
//! 2. **External records** ([`event`], [`project`]): owned by the project
//!    API and only ever read from a fresh snapshot. Parsed leniently, since
//!    the linkage between events and phases is free-text titles rather than
//!    foreign keys.
//! 3. **Derived state** ([`timeline`], [`summary`]): computed from the
//!    first two groups by pure functions on every fetch, never stored.
//!
//! # Display Architecture
//!
//! All Display implementations (in [`crate::display::models`]) format as
//! readable markdown with consistent status icons (✓ Completed, ➤ In
//! Progress, ○ Pending) and a lock marker for phases that cannot accept
//! updates yet. Collection and result wrappers live in [`crate::display`].
//!
//! # Examples
//!
//! ```rust
//! use gantry_core::models::{EventStatus, TimelineEvent, TimelineState, PHASES};
//!
//! let events = vec![TimelineEvent {
//!     id: None,
//!     title: "Foundation - slab poured".to_string(),
//!     description: None,
//!     status: Some(EventStatus::Completed),
//!     event_type: None,
//!     visibility: None,
//!     created_at: None,
//!     start_date: None,
//!     end_date: None,
//! }];
//!
//! let state = TimelineState::derive(&PHASES, &events);
//! assert_eq!(state.completed_phases, 1);
//! println!("{}", state); // Formats with markdown headers and icons
//! ```

pub mod event;
pub mod phase;
pub mod project;
pub mod requests;
pub mod status;
pub mod summary;
pub mod timeline;


// Re-export all public types at the models level
pub use event::TimelineEvent;
pub use phase::{phase_by_name, PhaseDefinition, PHASES};
pub use project::Project;
pub use requests::{
    EventSubmission, UpdateProjectRequest, EVENT_TYPE_MILESTONE, VISIBILITY_PUBLIC,
};
pub use status::{EventStatus, PhaseStatus, ProjectStatus};
pub use summary::ProgressSummary;
pub use timeline::{
    all_phases_completed, completion_percent, current_phase_index, is_locked, phase_status,
    PhaseState, TimelineState,
};
