//! Error types for the transaction cache
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Cache Error Enum ==
/// Unified error type for the transaction cache.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Non-admin attempted a privileged configuration change
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Store is full and nothing can be evicted
    #[error("Capacity exceeded: {0}")]
    CapacityExceeded(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// No live record for the key
    #[error("Not found: {0}")]
    NotFound(String),
}

impl CacheError {
    // == Error Code ==
    /// Stable numeric code reported to callers.
    pub fn code(&self) -> u32 {
        match self {
            CacheError::Unauthorized(_) => 100,
            CacheError::CapacityExceeded(_) => 101,
            CacheError::InvalidRequest(_) => 102,
            CacheError::NotFound(_) => 103,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            CacheError::Unauthorized(_) => StatusCode::FORBIDDEN,
            CacheError::CapacityExceeded(_) => StatusCode::SERVICE_UNAVAILABLE,
            CacheError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            CacheError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(ErrorResponse::new(self.to_string(), self.code()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the transaction cache.
pub type Result<T> = std::result::Result<T, CacheError>;
