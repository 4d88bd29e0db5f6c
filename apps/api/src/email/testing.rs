//! Test doubles for the document and generation collaborators.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::document::{DocumentError, DocumentReader};
use crate::email::generator::EmailGenerator;
use crate::keywords::{KeywordExtractor, MatchMode};
use crate::llm_client::LlmError;
use crate::state::AppState;

pub struct StaticReader(Option<String>);

impl StaticReader {
    pub fn text(text: &str) -> Self {
        Self(Some(text.to_string()))
    }

    pub fn unreadable() -> Self {
        Self(None)
    }
}

impl DocumentReader for StaticReader {
    fn read_text(&self, _bytes: &[u8]) -> Result<String, DocumentError> {
        self.0
            .clone()
            .ok_or_else(|| DocumentError::Unreadable("invalid cross-reference table".to_string()))
    }
}

type Call = (String, String, Vec<String>);

pub struct RecordingGenerator {
    reply: Box<dyn Fn() -> Result<String, LlmError> + Send + Sync>,
    calls: Mutex<Vec<Call>>,
}

impl RecordingGenerator {
    pub fn ok(email: &str) -> Self {
        let email = email.to_string();
        Self {
            reply: Box::new(move || Ok(email.clone())),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: impl Fn() -> LlmError + Send + Sync + 'static) -> Self {
        Self {
            reply: Box::new(move || Err(error())),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailGenerator for RecordingGenerator {
    async fn generate(
        &self,
        resume_text: &str,
        job_description: &str,
        matched_skills: &[String],
    ) -> Result<String, LlmError> {
        self.calls.lock().unwrap().push((
            resume_text.to_string(),
            job_description.to_string(),
            matched_skills.to_vec(),
        ));
        (self.reply)()
    }
}

pub fn state_with(reader: StaticReader, generator: Arc<RecordingGenerator>) -> AppState {
    AppState {
        reader: Arc::new(reader),
        extractor: KeywordExtractor::default(),
        match_mode: MatchMode::Substring,
        generator,
    }
}
