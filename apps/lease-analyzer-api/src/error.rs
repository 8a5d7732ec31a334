//! Error types for the lease analyzer server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use lease_analyzer_core::AnalyzerError;

/// Server error types
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Analyzer(#[from] AnalyzerError),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
    code: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ServerError::InvalidRequest(msg) => {
                (StatusCode::BAD_REQUEST, "INVALID_REQUEST", msg.clone())
            }
            ServerError::Analyzer(err) => match err {
                AnalyzerError::Encoding(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "ENCODING_ERROR",
                    err.to_string(),
                ),
                AnalyzerError::Provider(_) => {
                    tracing::error!("Provider failure: {}", err);
                    (StatusCode::BAD_GATEWAY, "PROVIDER_ERROR", err.to_string())
                }
                AnalyzerError::SchemaMismatch(_) => {
                    tracing::error!("Model answer did not match the report schema: {}", err);
                    (StatusCode::BAD_GATEWAY, "SCHEMA_MISMATCH", err.to_string())
                }
            },
        };

        let body = ErrorResponse {
            success: false,
            error: message,
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
