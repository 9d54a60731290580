//! Error handling utilities for MCP server

use rmcp::ErrorData;
use skill2niche_core::EngineError;

/// Helper to convert engine errors to MCP errors.
///
/// Input problems become `invalid_params` so the assistant can correct the
/// call; everything else is reported as an internal error.
pub fn to_mcp_error(message: &str, error: &EngineError) -> ErrorData {
    if error.is_user_facing() {
        ErrorData::invalid_params(format!("{message}: {error}"), None)
    } else {
        ErrorData::internal_error(format!("{message}: {error}"), None)
    }
}
