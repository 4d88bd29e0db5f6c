use anyhow::{Context, Result};

use crate::keywords::MatchMode;
use crate::llm_client::{LlmConfig, DEFAULT_API_URL, DEFAULT_MODEL};
use crate::nlp::{TaggerBackend, DEFAULT_MAX_CHARS};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_api_url: String,
    pub llm_timeout_secs: u64,
    pub llm_max_output_tokens: u32,
    pub port: u16,
    pub rust_log: String,
    pub cors_allowed_origin: String,
    pub max_upload_bytes: usize,
    pub tagger_backend: TaggerBackend,
    pub tagger_max_chars: usize,
    pub match_mode: MatchMode,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            gemini_model: env_or("GEMINI_MODEL", DEFAULT_MODEL),
            gemini_api_url: env_or("GEMINI_API_URL", DEFAULT_API_URL),
            llm_timeout_secs: parse_env("LLM_TIMEOUT_SECS", 120)?,
            llm_max_output_tokens: parse_env("LLM_MAX_OUTPUT_TOKENS", 2048)?,
            port: parse_env("PORT", 8000)?,
            rust_log: env_or("RUST_LOG", "info"),
            cors_allowed_origin: env_or("CORS_ALLOWED_ORIGIN", "http://localhost:3000"),
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", 10 * 1024 * 1024)?,
            tagger_backend: env_or("TAGGER_BACKEND", "rule")
                .parse::<TaggerBackend>()
                .map_err(anyhow::Error::msg)
                .context("TAGGER_BACKEND must be 'rule' or 'bert'")?,
            tagger_max_chars: parse_env("TAGGER_MAX_CHARS", DEFAULT_MAX_CHARS)?,
            match_mode: env_or("MATCH_MODE", "substring")
                .parse::<MatchMode>()
                .map_err(anyhow::Error::msg)
                .context("MATCH_MODE must be 'substring' or 'word_boundary'")?,
        })
    }

    /// Generation client settings, handed to `LlmClient::new` by `main`.
    pub fn llm_config(&self) -> LlmConfig {
        LlmConfig {
            api_key: self.gemini_api_key.clone(),
            model: self.gemini_model.clone(),
            base_url: self.gemini_api_url.clone(),
            timeout_secs: self.llm_timeout_secs,
            max_output_tokens: self.llm_max_output_tokens,
        }
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}
