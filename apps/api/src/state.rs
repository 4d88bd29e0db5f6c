use std::sync::Arc;

use crate::document::DocumentReader;
use crate::email::generator::EmailGenerator;
use crate::keywords::{KeywordExtractor, MatchMode};

/// Shared application state injected into all route handlers via Axum extractors.
/// Every collaborator is immutable; handlers never synchronise on it.
#[derive(Clone)]
pub struct AppState {
    /// PDF → text. Default: `PdfDocumentReader`.
    pub reader: Arc<dyn DocumentReader>,
    pub extractor: KeywordExtractor,
    pub match_mode: MatchMode,
    /// Pluggable generator. Default: `GeminiEmailGenerator`.
    pub generator: Arc<dyn EmailGenerator>,
}
