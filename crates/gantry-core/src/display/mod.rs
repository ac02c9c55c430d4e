//! Display formatting for terminal and MCP output.
//!
//! Domain models implement `Display` directly; this module adds what plain
//! impls cannot cover: collection wrappers with an empty-state line,
//! operation results carrying extra outcome flags, and timestamp
//! localization. Every formatter produces markdown, which the CLI styles
//! through its renderer and the MCP server returns as plain text content.
//!
//! - [`models`]: `Display` impls for the domain models themselves
//! - [`collections`]: [`Events`] and [`Phases`] listing wrappers
//! - [`results`]: [`SubmitResult`] for recorded updates
//! - [`datetime`]: [`LocalDateTime`] system-timezone formatting
//!
//! ```rust
//! use gantry_core::{
//!     display::{Events, SubmitResult},
//!     models::TimelineEvent,
//! };
//!
//! let event = TimelineEvent {
//!     id: Some("evt-1".to_string()),
//!     title: "Foundation - slab poured".to_string(),
//!     description: Some("Cured over the weekend".to_string()),
//!     status: None,
//!     event_type: Some("milestone".to_string()),
//!     visibility: Some("public".to_string()),
//!     created_at: None,
//!     start_date: None,
//!     end_date: None,
//! };
//!
//! // Format a raw event listing
//! let events = Events(vec![event.clone()]);
//! let output = format!("{}", events);
//! assert!(output.contains("Foundation - slab poured"));
//!
//! // Format a submission result
//! let result = SubmitResult::new(event);
//! let output = format!("{}", result);
//! assert!(output.contains("Recorded update:"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;

pub use collections::{Events, Phases};
pub use datetime::LocalDateTime;
pub use results::SubmitResult;
