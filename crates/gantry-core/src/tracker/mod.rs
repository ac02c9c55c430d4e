//! High-level tracker API for construction timelines.
//!
//! This module provides the main [`Tracker`] interface for interacting with
//! a project's construction timeline. The tracker acts as the central
//! coordinator between the application layers and the project API,
//! implementing the sequential-phase rules on top of raw timeline events.
//!
//! # Architecture Overview
//!
//! The tracker module is organized into submodules that handle different
//! aspects of the timeline workflow:
//!
//! ```text
//! ┌─────────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │      Handlers       │    │   Operations    │    │   Project API   │
//! │ (timeline_handlers) │───▶│ (timeline_ops)  │───▶│   (via api/)    │
//! └─────────────────────┘    └─────────────────┘    └─────────────────┘
//!     User Interface          Timeline Logic          Remote State
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Tracker`] instances with configuration
//! - [`timeline_handlers`]: High-level operations (show, record, progress, etc.)
//! - [`timeline_ops`]: Lower-level fetch and derivation operations
//!
//! ## Design Principles
//!
//! 1. **Stateless**: The server owns all state; every view is re-derived
//!    from a fresh event snapshot
//! 2. **Fail Fast Locally**: Input validation and the sequential lock check
//!    run before any mutation is sent
//! 3. **Error Propagation**: Comprehensive error handling with context
//! 4. **Display Integration**: Results formatted via the display system
//!
//! # Usage Examples
//!
//! ## Creating a Tracker
//!
//! ```rust
//! use gantry_core::TrackerBuilder;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_api_url(Some("https://api.example.com"))
//!     .with_api_token(Some("secret-token"))
//!     .with_project(Some("proj-7"))
//!     .build()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Recording an Update
//!
//! ```rust,no_run
//! use gantry_core::{params::RecordUpdate, TrackerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_api_url(Some("https://api.example.com"))
//!     .with_project(Some("proj-7"))
//!     .build()?;
//!
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

use crate::{api::ApiClient, error::GantryError, error::Result};

// Module declarations
pub mod builder;
pub mod timeline_handlers;
pub mod timeline_ops;


// Re-export the main types
pub use builder::TrackerBuilder;

/// Main tracker interface for reading and advancing a construction timeline.
#[derive(Debug)]
pub struct Tracker {
    pub(crate) api: ApiClient,
    pub(crate) project: Option<String>,
}

impl Tracker {
    /// Creates a new tracker over the given API client.
    pub(crate) fn new(api: ApiClient, project: Option<String>) -> Self {
        Self { api, project }
    }

    /// Resolve the project ID for an operation.
    ///
    /// A per-call override beats the configured default project.
    pub(crate) fn resolve_project<'a>(&'a self, override_id: Option<&'a str>) -> Result<&'a str> {
        override_id
            .or(self.project.as_deref())
            .ok_or_else(|| GantryError::Configuration {
                message: "No project selected. Pass --project, set GANTRY_PROJECT, or add \
                          project to the config file."
                    .to_string(),
            })
    }
}
