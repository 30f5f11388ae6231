//! Error types.
//!
//! [`CatalogLoadError`] covers startup failures, which are fatal and never
//! reach an HTTP client. [`AppError`] covers request-time failures and maps
//! each variant onto an HTTP status.

use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use validator::ValidationErrors;

use crate::response::ErrorBody;

/// Result alias for request-time operations.
pub type AppResult<T> = Result<T, AppError>;

/// Failure while building the catalog at startup.
#[derive(Debug, thiserror::Error)]
pub enum CatalogLoadError {
    /// The source location does not resolve to readable data.
    #[error("dataset not found at '{}': {source}", .path.display())]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source is readable but is not a JSON container object.
    #[error("dataset at '{}' is not a valid container document: {reason}", .path.display())]
    MalformedSource { path: PathBuf, reason: String },

    /// The source parsed but holds no records.
    #[error("dataset at '{}' contains no records", .path.display())]
    EmptyDataset { path: PathBuf },

    /// A record is missing a required field or has a field of the wrong type.
    #[error("record #{index} is malformed: {reason}")]
    MalformedRecord { index: usize, reason: String },
}

/// Request-time error returned by handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A query parameter is missing or cannot be parsed.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A query parameter parsed but violates a validation rule.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// No record matches the requested combination.
    #[error("No data found for {region} — {produit} — {variete} — {annee}")]
    RecordNotFound {
        region: String,
        produit: String,
        variete: String,
        annee: i32,
    },
}

impl AppError {
    /// Machine-readable error code for clients.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidParameter(_) => "INVALID_PARAMETER",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::RecordNotFound { .. } => "NOT_FOUND",
        }
    }

    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidParameter(_) | AppError::Validation(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::RecordNotFound { .. } => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            AppError::Validation(errors) => ErrorBody::with_details(
                self.code(),
                self.to_string(),
                serde_json::to_value(errors).unwrap_or_default(),
            ),
            _ => ErrorBody::new(self.code(), self.to_string()),
        };

        tracing::debug!(code = self.code(), status = status.as_u16(), error = %self, "request rejected");
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_all_inputs() {
        let err = AppError::RecordNotFound {
            region: "Fes".to_string(),
            produit: "Olive".to_string(),
            variete: "Picholine".to_string(),
            annee: 2020,
        };
        assert_eq!(
            err.to_string(),
            "No data found for Fes — Olive — Picholine — 2020"
        );
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.code(), "NOT_FOUND");
    }

    #[test]
    fn test_parameter_errors_are_unprocessable() {
        let err = AppError::InvalidParameter("missing field `produit`".to_string());
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let err = AppError::Validation(ValidationErrors::new());
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_load_error_messages() {
        let err = CatalogLoadError::EmptyDataset {
            path: PathBuf::from("materials.json"),
        };
        assert_eq!(err.to_string(), "dataset at 'materials.json' contains no records");

        let err = CatalogLoadError::MalformedRecord {
            index: 3,
            reason: "missing field `prix`".to_string(),
        };
        assert_eq!(err.to_string(), "record #3 is malformed: missing field `prix`");
    }
}
