//! Error types for the catalog server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorBody;

// == Api Error Enum ==
/// Unified error type for the catalog server.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Item or route not found
    #[error("{0}")]
    NotFound(String),

    /// Persisted collection could not be parsed.
    ///
    /// The message is deliberately genericized; the parse detail only
    /// surfaces in the non-production `stack` field.
    #[error("Internal Server Error")]
    CorruptData(#[source] serde_json::Error),

    /// Reading or rewriting the collection file failed.
    ///
    /// Unlike `CorruptData`, the underlying message passes through verbatim.
    #[error("{0}")]
    WriteFailure(#[from] std::io::Error),
}

// == Production Mode ==
/// True when the server runs with `APP_ENV=production`.
///
/// Controls whether error responses carry full failure detail or the
/// redacted sentinel in their `stack` field.
fn production_mode() -> bool {
    std::env::var("APP_ENV").map(|v| v == "production").unwrap_or(false)
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::CorruptData(_) | ApiError::WriteFailure(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let detail = match &self {
            ApiError::CorruptData(err) => err.to_string(),
            other => other.to_string(),
        };

        let body = ErrorBody::new(self.to_string(), detail, production_mode());
        (status, Json(body)).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the catalog server.
pub type Result<T> = std::result::Result<T, ApiError>;
