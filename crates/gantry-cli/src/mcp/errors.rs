//! Error handling utilities for MCP server

use gantry_core::GantryError;
use rmcp::ErrorData;

/// Helper to convert tracker errors to MCP errors.
///
/// Validation and phase-ordering failures are reported as invalid
/// parameters so the caller can correct the request; transport, server,
/// and configuration failures are internal errors.
pub fn to_mcp_error(message: &str, error: &GantryError) -> ErrorData {
    match error {
        GantryError::InvalidInput { .. }
        | GantryError::UnknownPhase { .. }
        | GantryError::PhaseLocked { .. } => {
            ErrorData::invalid_params(format!("{}: {}", message, error), None)
        }
        _ => ErrorData::internal_error(format!("{}: {}", message, error), None),
    }
}
