//! Cold email generation — pluggable, trait-based generator.
//!
//! `AppState` holds an `Arc<dyn EmailGenerator>`; the default backend is Gemini.

use async_trait::async_trait;

use crate::email::prompts::{build_email_prompt, EMAIL_SYSTEM};
use crate::llm_client::{LlmClient, LlmError};

/// Implement this to swap generation backends without touching the pipeline
/// or handlers.
#[async_trait]
pub trait EmailGenerator: Send + Sync {
    async fn generate(
        &self,
        resume_text: &str,
        job_description: &str,
        matched_skills: &[String],
    ) -> Result<String, LlmError>;
}

pub struct GeminiEmailGenerator {
    llm: LlmClient,
}

impl GeminiEmailGenerator {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl EmailGenerator for GeminiEmailGenerator {
    async fn generate(
        &self,
        resume_text: &str,
        job_description: &str,
        matched_skills: &[String],
    ) -> Result<String, LlmError> {
        let prompt = build_email_prompt(resume_text, job_description, matched_skills);
        self.llm.call_text(&prompt, Some(EMAIL_SYSTEM)).await
    }
}
