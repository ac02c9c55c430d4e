//! Error types for the timeline tracker library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Error type covering every tracker operation.
#[derive(Error, Debug)]
pub enum GantryError {
    /// Transport-level failures while talking to the project API
    #[error("API request failed: {message}")]
    Api {
        message: String,
        #[source]
        source: reqwest::Error,
    },
    /// Non-success response returned by the project API
    #[error("Server returned {status}: {message}")]
    Server { status: u16, message: String },
    /// A phase update was attempted while an earlier phase is unfinished
    #[error("Phase '{phase}' is locked: complete '{required}' first")]
    PhaseLocked { phase: String, required: String },
    /// No timeline phase matches the given name
    #[error("Unknown phase '{name}'")]
    UnknownPhase { name: String },
    /// Local file I/O failures, config reading mostly
    #[error("Filesystem error at '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A locally validated request field was rejected
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// JSON encode or decode failures
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Missing or unusable configuration
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Two-step builder for transport errors, message first then source.
pub struct ApiErrorBuilder {
    message: String,
}

impl ApiErrorBuilder {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Attach the underlying reqwest failure and finish the error.
    pub fn with_source(self, source: reqwest::Error) -> GantryError {
        GantryError::Api {
            message: self.message,
            source,
        }
    }
}

/// Two-step builder for validation errors, field first then reason.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Finish the error with the rejection reason.
    pub fn with_reason(self, reason: impl Into<String>) -> GantryError {
        GantryError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl GantryError {
    /// Start a transport error for a named operation.
    pub fn api(message: impl Into<String>) -> ApiErrorBuilder {
        ApiErrorBuilder::new(message)
    }

    /// Start a validation error for a named field.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Locked-phase rejection naming the prerequisite that must finish first.
    pub fn phase_locked(phase: impl Into<String>, required: impl Into<String>) -> Self {
        Self::PhaseLocked {
            phase: phase.into(),
            required: required.into(),
        }
    }

    /// Rejection for a phase name matching none of the canonical phases.
    pub fn unknown_phase(name: impl Into<String>) -> Self {
        Self::UnknownPhase { name: name.into() }
    }
}

/// Context-adding conversion into `GantryError` for foreign error types.
pub trait ResultExt<T, E> {
    /// Wrap the error as a `Configuration` failure with a message prefix.
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

/// Transport-error mapping for reqwest Results.
pub trait ApiResultExt<T> {
    /// Wrap a transport failure with the attempted operation.
    fn api_context(self, message: &str) -> Result<T>;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| GantryError::Configuration {
            message: format!("{}: {}", context, e),
        })
    }
}

impl<T> ApiResultExt<T> for std::result::Result<T, reqwest::Error> {
    fn api_context(self, message: &str) -> Result<T> {
        self.map_err(|e| GantryError::api(message).with_source(e))
    }
}

/// Result type alias for tracker operations
pub type Result<T> = std::result::Result<T, GantryError>;
