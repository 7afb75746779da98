// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::JsonPayloadError, error::ResponseError, http::StatusCode, web, HttpRequest, HttpResponse};
use serde_json::json;
use thiserror::Error;

use crate::db::StoreError;

/// Application-specific error types
/// DOCUMENTATION: Every failure a handler can surface
/// Each variant maps to an HTTP status code and a short detail string
#[derive(Error, Debug)]
pub enum WeddingError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("Invalid ID")]
    InvalidId,

    #[error("{0}")]
    InvalidInput(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Database not available: {0}")]
    StoreUnavailable(String),
}

impl WeddingError {
    fn code(&self) -> &'static str {
        match self {
            WeddingError::NotFound(_) => "NOT_FOUND",
            WeddingError::InvalidId => "INVALID_ID",
            WeddingError::InvalidInput(_) => "INVALID_INPUT",
            WeddingError::ValidationError(_) => "VALIDATION_ERROR",
            WeddingError::DatabaseError(_) => "DATABASE_ERROR",
            WeddingError::StoreUnavailable(_) => "SERVICE_UNAVAILABLE",
        }
    }
}

impl From<StoreError> for WeddingError {
    fn from(err: StoreError) -> Self {
        WeddingError::DatabaseError(err.to_string())
    }
}

impl From<validator::ValidationErrors> for WeddingError {
    fn from(err: validator::ValidationErrors) -> Self {
        WeddingError::ValidationError(err.to_string())
    }
}

/// Convert WeddingError to HTTP response
/// DOCUMENTATION: Maps error types to HTTP status codes and JSON responses
impl ResponseError for WeddingError {
    fn error_response(&self) -> HttpResponse {
        let message = self.to_string();
        let body = json!({
            "detail": message,
            "error": {
                "code": self.code(),
                "message": message,
                "timestamp": chrono::Utc::now().to_rfc3339()
            }
        });

        HttpResponse::build(self.status_code()).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            WeddingError::NotFound(_) => StatusCode::NOT_FOUND,
            WeddingError::InvalidId => StatusCode::BAD_REQUEST,
            WeddingError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            WeddingError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            WeddingError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            WeddingError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

/// JSON extractor configuration shared by the server and tests
/// Malformed bodies and missing or wrong-typed fields become 422 responses.
/// Bodies are decoded as JSON whatever their Content-Type
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(json_error_handler)
}

fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::debug!("Rejected JSON payload for {}: {}", req.path(), err);
    WeddingError::ValidationError(err.to_string()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            WeddingError::NotFound("Place".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(WeddingError::InvalidId.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            WeddingError::ValidationError("name".into()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            WeddingError::StoreUnavailable("no url".into()).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_detail_messages() {
        assert_eq!(WeddingError::NotFound("Place".into()).to_string(), "Place not found");
        assert_eq!(WeddingError::InvalidId.to_string(), "Invalid ID");
        assert_eq!(
            WeddingError::InvalidInput("No fields to update".into()).to_string(),
            "No fields to update"
        );
    }
}
