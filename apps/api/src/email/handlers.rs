//! Axum route handlers for the cold email API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use tracing::info;

use crate::email::pipeline::{compose_email, preview_keywords, ComposedEmail, KeywordMatch};
use crate::email::upload::read_upload;
use crate::errors::AppError;
use crate::state::AppState;

/// POST /generate-email
///
/// Multipart form: `resume` (PDF file) and `job_desc` (text).
/// Full pipeline: PDF → keywords → match → generate.
#[tracing::instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn handle_generate_email(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ComposedEmail>, AppError> {
    let upload = read_upload(multipart).await?;
    info!(
        "Received resume ({} bytes) and job description ({} chars)",
        upload.resume.len(),
        upload.job_desc.len()
    );

    let composed = compose_email(&state, upload).await?;
    Ok(Json(composed))
}

/// POST /api/v1/keywords
///
/// Same form as /generate-email. Returns extracted and matched keywords
/// without calling the model.
#[tracing::instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn handle_preview_keywords(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<KeywordMatch>, AppError> {
    let upload = read_upload(multipart).await?;
    let preview = preview_keywords(&state, upload).await?;
    Ok(Json(preview))
}
