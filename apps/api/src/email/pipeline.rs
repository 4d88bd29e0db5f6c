//! Cold email pipeline.
//!
//! Flow: read PDF → extract keywords → match against the job description →
//!       generate the email → return.
//!
//! PDF parsing and tagging are CPU-bound and run inside `spawn_blocking`.

use std::sync::Arc;

use anyhow::Context;
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::document::DocumentReader;
use crate::email::upload::ResumeUpload;
use crate::errors::AppError;
use crate::keywords::{match_keywords, KeywordExtractor, KeywordSet, MatchMode};
use crate::state::AppState;

/// Keywords found in a resume and the subset present in the job description.
#[derive(Debug, Clone, Serialize)]
pub struct KeywordMatch {
    pub keywords: KeywordSet,
    pub matched_skills: Vec<String>,
    /// True when the tagging backend failed and `keywords` is empty because
    /// of it, not because nothing was found.
    pub extraction_degraded: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComposedEmail {
    pub email: String,
    pub matched_skills: Vec<String>,
    pub extraction_degraded: bool,
}

/// Runs the full pipeline for one upload.
pub async fn compose_email(state: &AppState, upload: ResumeUpload) -> Result<ComposedEmail, AppError> {
    let resume_text = read_resume(state.reader.clone(), upload.resume).await?;

    let matched = match_resume(
        &state.extractor,
        resume_text.clone(),
        &upload.job_desc,
        state.match_mode,
    )
    .await?;

    let email = state
        .generator
        .generate(&resume_text, &upload.job_desc, &matched.matched_skills)
        .await?;

    info!(
        "Generated cold email ({} chars, {} matched skills)",
        email.len(),
        matched.matched_skills.len()
    );

    Ok(ComposedEmail {
        email,
        matched_skills: matched.matched_skills,
        extraction_degraded: matched.extraction_degraded,
    })
}

/// Runs the pipeline up to matching, without calling the model.
pub async fn preview_keywords(
    state: &AppState,
    upload: ResumeUpload,
) -> Result<KeywordMatch, AppError> {
    let resume_text = read_resume(state.reader.clone(), upload.resume).await?;
    match_resume(&state.extractor, resume_text, &upload.job_desc, state.match_mode).await
}

pub async fn read_resume(reader: Arc<dyn DocumentReader>, bytes: Bytes) -> Result<String, AppError> {
    let text = tokio::task::spawn_blocking(move || reader.read_text(&bytes))
        .await
        .context("PDF extraction task failed")??;
    info!("Extracted {} characters of resume text", text.len());
    Ok(text)
}

/// Extracts keywords from `resume_text` and matches them against `job_text`.
/// A tagging backend failure degrades to an empty keyword set.
pub async fn match_resume(
    extractor: &KeywordExtractor,
    resume_text: String,
    job_text: &str,
    mode: MatchMode,
) -> Result<KeywordMatch, AppError> {
    let extractor = extractor.clone();
    let (keywords, extraction_degraded) =
        tokio::task::spawn_blocking(move || extractor.extract_or_empty(&resume_text))
            .await
            .context("Keyword extraction task failed")?;

    let matched_skills = match_keywords(&keywords, job_text, mode);
    info!(
        "Matched {}/{} resume keywords against job description",
        matched_skills.len(),
        keywords.len()
    );

    Ok(KeywordMatch {
        keywords,
        matched_skills,
        extraction_degraded,
    })
}
