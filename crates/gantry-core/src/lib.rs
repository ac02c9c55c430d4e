//! Core library for the Gantry construction timeline tracker.
//!
//! This crate provides the core logic for reading and advancing a project's
//! construction timeline: the canonical phase definitions, the derivation of
//! phase status from timeline events, the sequential-order rules, and the
//! client for the project API that stores all state.
//!
//! # Timeline Model
//!
//! A project moves through five fixed phases, from Foundation to Handover.
//! The phases themselves are never stored; their status is derived on every
//! read from the project's timeline events, matched to phases by name. New
//! updates are accepted only in phase order, and completing the final phase
//! marks the whole project completed.
//!
//! # Display Architecture
//!
//! The crate implements a Display-based architecture for formatting output:
//!
//! - **Domain Models** ([`models`]): Implement [`std::fmt::Display`] for direct
//!   formatting
//! - **Display Wrappers** ([`display`]): Provide contextual and specialized
//!   formatting
//! - **Terminal Rendering**: Rich markdown output via the CLI's terminal
//!   renderer
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use gantry_core::{params::RecordUpdate, TrackerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a tracker instance
//! let tracker = TrackerBuilder::new()
//!     .with_api_url(Some("https://api.example.com"))
//!     .with_api_token(Some("secret-token"))
//!     .with_project(Some("proj-7"))
//!     .build()?;
//!
//! // Show the derived timeline
//! let state = tracker.show_timeline(&Default::default()).await?;
//! println!("{state}");
//!
//! // Record a phase update
//! let params = RecordUpdate {
//!     phase: "Foundation".to_string(),
//!     title: "Slab poured".to_string(),
//!     description: Some("Concrete cured over the weekend".to_string()),
//!     status: "completed".to_string(),
//!     ..Default::default()
//! };
//! let result = tracker.record_update(&params).await?;
//! println!("{result}");
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod tracker;

// Re-export commonly used types
pub use api::ApiClient;
pub use config::Config;
pub use display::{Events, LocalDateTime, Phases, SubmitResult};
pub use error::{GantryError, Result};
pub use models::{
    EventStatus, PhaseDefinition, PhaseState, PhaseStatus, ProgressSummary, Project,
    ProjectStatus, TimelineEvent, TimelineState, PHASES,
};
pub use params::{ProjectRef, RecordUpdate};
pub use tracker::{Tracker, TrackerBuilder};
