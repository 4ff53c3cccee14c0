//! Custom error types for the API service

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::error::DatabaseError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;

/// Body of every error response
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "User with id 999 not found")]
    pub error: String,
}

/// Custom error type for the API service
#[derive(Error, Debug)]
pub enum ApiError {
    /// Malformed body or invalid field value
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Missing row or malformed path identifier
    #[error("Not found: {0}")]
    NotFound(String),

    /// A unique field is already taken
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Internal server error
    #[error("Internal server error")]
    InternalServerError,

    /// Database error
    #[error("Database error: {0}")]
    Database(DatabaseError),
}

impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::UniqueViolation(constraint) => {
                ApiError::Conflict(format!("Value already in use ({})", constraint))
            }
            DatabaseError::ForeignKeyViolation(constraint) => {
                ApiError::NotFound(format!("Referenced record does not exist ({})", constraint))
            }
            other => ApiError::Database(other),
        }
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::InternalServerError | ApiError::Database(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = match self {
            ApiError::BadRequest(msg) | ApiError::NotFound(msg) | ApiError::Conflict(msg) => msg,
            ApiError::InternalServerError => "Internal server error".to_string(),
            ApiError::Database(err) => {
                error!("Database error: {}", err);
                "Database error".to_string()
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
