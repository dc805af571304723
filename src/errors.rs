// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::error::JsonPayloadError;
use actix_web::{error::ResponseError, http::StatusCode, HttpRequest, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Each variant maps to an HTTP status code and a
/// `{ success: false, error, details? }` JSON body
#[derive(Error, Debug)]
pub enum ArtmapError {
    #[error("Exhibition not found with id: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Internal server error")]
    #[allow(dead_code)]
    InternalError,
}

/// Convert ArtmapError to HTTP response
/// DOCUMENTATION: Validation problems are 400s with the message verbatim;
/// persistence failures are 500s with a generic message and the original
/// detail carried only in the optional diagnostic field
impl ResponseError for ArtmapError {
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        let body = match self {
            ArtmapError::DatabaseError(detail) => json!({
                "success": false,
                "error": "An unexpected error occurred while searching",
                "details": detail,
            }),
            ArtmapError::InternalError => json!({
                "success": false,
                "error": "An unexpected error occurred",
            }),
            _ => json!({
                "success": false,
                "error": self.to_string(),
            }),
        };

        HttpResponse::build(status).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ArtmapError::NotFound(_) => StatusCode::NOT_FOUND,
            ArtmapError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ArtmapError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ArtmapError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ArtmapError::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Map malformed JSON bodies (wrong types, non-numeric ids, syntax errors)
/// onto the same `{ success: false, error }` body as our own validation
/// failures, instead of actix's plain-text default
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ArtmapError::InvalidInput(err.to_string()).into()
}
