//! HTTP handlers for the REST API.

use axum::{
    extract::{rejection::JsonRejection, Multipart, State},
    Json,
};
use tracing::debug;

use super::dto::{Base64ImageRequest, HealthResponse};
use super::error::AppError;
use super::state::AppState;
use crate::input::decode_data_uri;
use crate::pipeline::AnalysisResponse;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Multipart field carrying the uploaded photo.
const UPLOAD_FIELD: &str = "file";

/// GET /api/health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: "tonesense".to_string(),
    })
}

/// POST /api/analyze
///
/// Analyze a photo uploaded as multipart form data.
pub async fn analyze_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> HandlerResult<AnalysisResponse> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let is_image = field
            .content_type()
            .map(|ct| ct.starts_with("image/"))
            .unwrap_or(false);
        if !is_image {
            return Err(AppError::BadRequest("Please upload a valid image file".into()));
        }

        let bytes = field.bytes().await?;
        debug!(bytes = bytes.len(), "received upload");
        let response = state.worker.analyze(bytes.to_vec()).await?;
        return Ok(Json(response));
    }

    Err(AppError::BadRequest("No image file provided".into()))
}

/// POST /api/analyze-base64
///
/// Analyze a base64-encoded frame, as sent by the live camera view.
/// Body rejections, including an oversized body, are reported as 400.
pub async fn analyze_base64(
    State(state): State<AppState>,
    payload: Result<Json<Base64ImageRequest>, JsonRejection>,
) -> HandlerResult<AnalysisResponse> {
    let Json(request) = payload?;
    if request.image.is_empty() {
        return Err(AppError::BadRequest("No image data provided".into()));
    }

    let bytes = decode_data_uri(&request.image)?;
    debug!(bytes = bytes.len(), "received base64 frame");
    let response = state.worker.analyze(bytes).await?;
    Ok(Json(response))
}
