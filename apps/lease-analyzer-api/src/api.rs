//! API handlers for the lease analyzer server

use std::time::Instant;

use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;
use tracing::info;

use lease_analyzer_core::{AnalyzerError, LeaseReport};

use crate::error::ServerError;
use crate::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Handler: GET /health
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "lease-analyzer-api",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Handler: PUT /analyze-lease/upload
///
/// Accepts a multipart form with one part named `file` holding a PDF lease
/// agreement, runs it through the analysis pipeline, and returns the
/// extracted report as JSON. The uploaded bytes live only for the duration
/// of this request.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<LeaseReport>, ServerError> {
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ServerError::InvalidRequest(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("document.pdf").to_string();
        let bytes = field.bytes().await.map_err(|e| {
            ServerError::from(AnalyzerError::Encoding(format!(
                "Failed to read upload: {e}"
            )))
        })?;

        upload = Some((file_name, bytes.to_vec()));
        break;
    }

    let (file_name, bytes) = upload.ok_or_else(|| {
        ServerError::InvalidRequest("Missing 'file' part in multipart body".to_string())
    })?;

    info!("Uploading file: {} ({} bytes)", file_name, bytes.len());

    let started = Instant::now();
    let report = state.analyzer.analyze(&bytes).await?;
    info!(
        "Analyzed {} in {:.2}s",
        file_name,
        started.elapsed().as_secs_f64()
    );

    Ok(Json(report))
}
