//! API request handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, warn};

use crate::classifier::Verdict;
use crate::error::DocError;
use crate::processor::{DocumentProcessor, DocumentRequest};

/// Shared application state
pub struct AppState {
    pub processor: DocumentProcessor,
}

/// Service banner returned by `GET /`
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub message: &'static str,
    pub version: &'static str,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
}

/// Cleanup response
#[derive(Debug, Serialize)]
pub struct CleanupResponse {
    pub message: &'static str,
    pub file_path: String,
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub detail: String,
}

impl ApiError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { detail: msg.into() }
    }
}

impl IntoResponse for DocError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            e if e.is_invalid_input() => (StatusCode::BAD_REQUEST, e.to_string()),
            DocError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            e => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Internal server error: {}", e),
            ),
        };

        if status.is_server_error() {
            error!("❌ {}", detail);
        } else {
            warn!("❌ {}", detail);
        }

        (status, Json(ApiError::new(detail))).into_response()
    }
}

/// GET / - Service banner
pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Document Handler API",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /health - Health check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: chrono::Local::now().to_rfc3339(),
    })
}

/// POST /process-document - Detect type, score and keep a copy
pub async fn process_document(
    State(state): State<Arc<AppState>>,
    Json(request): Json<DocumentRequest>,
) -> Result<Json<Verdict>, DocError> {
    let processed = state.processor.process(request).await?;
    Ok(Json(processed.verdict))
}

/// DELETE /cleanup/:file_path - Remove a stored copy
pub async fn cleanup(
    State(state): State<Arc<AppState>>,
    Path(file_path): Path<String>,
) -> Result<(StatusCode, Json<CleanupResponse>), DocError> {
    let removed = state.processor.store().remove(&file_path).await?;

    Ok((
        StatusCode::OK,
        Json(CleanupResponse {
            message: "File deleted successfully",
            file_path: removed.display().to_string(),
        }),
    ))
}
