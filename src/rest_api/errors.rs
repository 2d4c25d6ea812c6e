//! # REST API Errors
//!
//! Error types for the REST surface, and the lossless mapping from
//! catalog failures onto transport statuses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::catalog::CatalogError;

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

/// REST API errors
#[derive(Debug, Clone, Error)]
pub enum RestError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Invalid request body
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Resource not found
    #[error("{0}")]
    NotFound(String),

    /// Uniqueness violation (duplicate name or version)
    #[error("{0}")]
    Conflict(String),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Storage failure surfaced through the service
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RestError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            RestError::NotFound(_) => StatusCode::NOT_FOUND,
            RestError::Conflict(_) => StatusCode::CONFLICT,
            RestError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CatalogError> for RestError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::DuplicateName(_) | CatalogError::DuplicateVersion { .. } => {
                RestError::Conflict(err.to_string())
            }
            CatalogError::NotFound(_) => RestError::NotFound(err.to_string()),
            CatalogError::Store(e) => RestError::Internal(e.to_string()),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<RestError> for ErrorResponse {
    fn from(err: RestError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
