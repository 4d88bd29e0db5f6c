//! Multipart form parsing for resume uploads.
//!
//! Expected fields: `resume` (file, `application/pdf`) and `job_desc` (text).

use axum::extract::Multipart;
use bytes::Bytes;

use crate::document::is_pdf;
use crate::errors::{AppError, INVALID_INPUT_MESSAGE};

pub const RESUME_FIELD: &str = "resume";
pub const JOB_DESC_FIELD: &str = "job_desc";

#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub resume: Bytes,
    pub job_desc: String,
}

/// A `resume` part as received, before validation.
#[derive(Debug)]
struct ResumePart {
    content_type: Option<String>,
    bytes: Bytes,
}

pub async fn read_upload(mut multipart: Multipart) -> Result<ResumeUpload, AppError> {
    let mut resume = None;
    let mut job_desc = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some(RESUME_FIELD) => {
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await?;
                resume = Some(ResumePart {
                    content_type,
                    bytes,
                });
            }
            Some(JOB_DESC_FIELD) => job_desc = Some(field.text().await?),
            _ => {}
        }
    }

    validate(resume, job_desc)
}

fn validate(resume: Option<ResumePart>, job_desc: Option<String>) -> Result<ResumeUpload, AppError> {
    let invalid = || AppError::Validation(INVALID_INPUT_MESSAGE.to_string());

    let job_desc = job_desc.filter(|j| !j.trim().is_empty()).ok_or_else(invalid)?;
    let resume = resume
        .filter(|r| is_pdf(r.content_type.as_deref()) && !r.bytes.is_empty())
        .ok_or_else(invalid)?;

    Ok(ResumeUpload {
        resume: resume.bytes,
        job_desc,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf_part(content_type: Option<&str>, bytes: &'static [u8]) -> Option<ResumePart> {
        Some(ResumePart {
            content_type: content_type.map(str::to_string),
            bytes: Bytes::from_static(bytes),
        })
    }

    #[test]
    fn test_valid_upload() {
        let upload = validate(
            pdf_part(Some("application/pdf"), b"%PDF-1.7"),
            Some("Rust engineer".to_string()),
        )
        .unwrap();
        assert_eq!(upload.job_desc, "Rust engineer");
        assert_eq!(&upload.resume[..], b"%PDF-1.7");
    }

    #[test]
    fn test_missing_or_blank_job_description() {
        assert!(matches!(
            validate(pdf_part(Some("application/pdf"), b"%PDF"), None),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            validate(pdf_part(Some("application/pdf"), b"%PDF"), Some("  \n".to_string())),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_non_pdf_resume_is_rejected() {
        let err = validate(pdf_part(Some("text/plain"), b"hello"), Some("job".to_string()))
            .unwrap_err();
        assert_eq!(err.to_string(), format!("Validation error: {INVALID_INPUT_MESSAGE}"));
    }

    #[test]
    fn test_missing_or_empty_resume_is_rejected() {
        assert!(validate(None, Some("job".to_string())).is_err());
        assert!(validate(pdf_part(Some("application/pdf"), b""), Some("job".to_string())).is_err());
        assert!(validate(pdf_part(None, b"%PDF"), Some("job".to_string())).is_err());
    }
}
