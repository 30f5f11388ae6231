//! API response body types.
//!
//! Success bodies are plain shapes (no envelope) so existing clients of the
//! catalog API keep working; every failure uses [`ErrorBody`].

use serde::Serialize;
use utoipa::ToSchema;

/// Service status returned by the root endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    /// Human-readable status line.
    pub message: String,

    /// Number of records held in memory.
    pub records_loaded: usize,
}

impl StatusResponse {
    /// Creates a running status for a catalog of the given size.
    pub fn running(records_loaded: usize) -> Self {
        Self {
            message: "API is running".to_string(),
            records_loaded,
        }
    }
}

/// List of distinct filter values.
#[derive(Debug, Serialize, ToSchema)]
pub struct ListResponse {
    /// Values, sorted ascending.
    pub items: Vec<String>,
}

impl From<Vec<String>> for ListResponse {
    fn from(items: Vec<String>) -> Self {
        Self { items }
    }
}

/// Error body shared by all failing endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable error message.
    pub detail: String,

    /// Error code for client handling (e.g., "VALIDATION_ERROR", "NOT_FOUND").
    pub code: String,

    /// Per-field validation failures (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Creates an error body without details.
    pub fn new(code: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
            code: code.into(),
            details: None,
        }
    }

    /// Creates an error body with details.
    pub fn with_details(
        code: impl Into<String>,
        detail: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            details: Some(details),
            ..Self::new(code, detail)
        }
    }
}
