//! Unified error handling for the HTTP layer.
//!
//! Provides a single error type that converts into Axum HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::DomainError;
use serde::Serialize;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    #[error("Resource not found")]
    NotFound,

    // Constraint violations detected before a write reaches the store
    #[error("{0}")]
    Constraint(String),

    #[error("Invalid input: {0}")]
    BadRequest(String),

    // External service errors
    #[cfg(feature = "database")]
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),
}

/// Error response body for HTTP
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

/// Store-level constraint classes surfaced by the database driver
#[cfg(feature = "database")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StoreViolation {
    Unique,
    ForeignKey,
}

#[cfg(feature = "database")]
fn store_violation(err: &sea_orm::DbErr) -> Option<StoreViolation> {
    match err.sql_err()? {
        sea_orm::SqlErr::UniqueConstraintViolation(_) => Some(StoreViolation::Unique),
        sea_orm::SqlErr::ForeignKeyConstraintViolation(_) => Some(StoreViolation::ForeignKey),
        _ => None,
    }
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound => "NOT_FOUND",
            AppError::Constraint(_) => "CONSTRAINT_VIOLATION",
            AppError::BadRequest(_) => "BAD_REQUEST",
            #[cfg(feature = "database")]
            AppError::Database(e) => match store_violation(e) {
                Some(StoreViolation::Unique) => "CONFLICT",
                Some(StoreViolation::ForeignKey) => "INVALID_REFERENCE",
                None => "DATABASE_ERROR",
            },
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Constraint(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            #[cfg(feature = "database")]
            AppError::Database(e) if store_violation(e).is_some() => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            // Show full message for client errors
            AppError::Constraint(msg) => msg.clone(),
            AppError::BadRequest(msg) => msg.clone(),

            // Hide details for internal errors
            #[cfg(feature = "database")]
            AppError::Database(e) => match store_violation(e) {
                Some(StoreViolation::Unique) => {
                    tracing::warn!("Unique constraint violation: {}", e);
                    "A record with the same unique value already exists".to_string()
                }
                Some(StoreViolation::ForeignKey) => {
                    tracing::warn!("Foreign key violation: {}", e);
                    "A referenced record does not exist".to_string()
                }
                None => {
                    tracing::error!("Database error: {:?}", e);
                    "A database error occurred".to_string()
                }
            },

            // Use default message for others
            _ => self.to_string(),
        }
    }
}

// =============================================================================
// HTTP Response (Axum)
// =============================================================================

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Missing resources answer with a bare status
        if matches!(self, AppError::NotFound) {
            return StatusCode::NOT_FOUND.into_response();
        }

        let status = self.status();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.user_message(),
            },
        };

        (status, Json(body)).into_response()
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::MissingField(_) => AppError::Constraint(err.to_string()),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_of(response: Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    #[tokio::test]
    async fn not_found_has_empty_body() {
        let response = AppError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_of(response).await.is_empty());
    }

    #[tokio::test]
    async fn missing_field_maps_to_bad_request() {
        let err = AppError::from(DomainError::MissingField("name"));
        assert_eq!(err.code(), "CONSTRAINT_VIOLATION");

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = serde_json::from_slice(&body_of(response).await).unwrap();
        assert_eq!(body["error"]["message"], "name must not be null");
    }

    #[test]
    fn ok_or_not_found_converts_none() {
        assert!(matches!(None::<u8>.ok_or_not_found(), Err(AppError::NotFound)));
        assert_eq!(Some(3).ok_or_not_found().unwrap(), 3);
    }

    #[cfg(feature = "database")]
    #[test]
    fn unclassified_database_errors_are_internal() {
        let err = AppError::from(sea_orm::DbErr::Custom("boom".to_string()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.code(), "DATABASE_ERROR");
    }
}
