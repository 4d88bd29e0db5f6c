mod config;
mod document;
mod email;
mod errors;
mod keywords;
mod llm_client;
mod nlp;
mod routes;
mod state;

use anyhow::{Context, Result};
use axum::http::{HeaderValue, Method};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::document::PdfDocumentReader;
use crate::email::generator::GeminiEmailGenerator;
use crate::keywords::KeywordExtractor;
use crate::llm_client::LlmClient;
use crate::nlp::{RuleTagger, Tagger, TaggerBackend};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Cold Email API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client and generator
    let llm = LlmClient::new(config.llm_config()).context("Failed to build LLM HTTP client")?;
    info!("LLM client initialized (model: {})", llm.model());
    let generator = Arc::new(GeminiEmailGenerator::new(llm));

    // Initialize keyword extraction backend
    let tagger = build_tagger(config.tagger_backend, config.tagger_max_chars).await?;
    let extractor = KeywordExtractor::new(tagger);
    info!(
        "Keyword extractor initialized (backend {:?}, max {} chars, match mode {:?})",
        config.tagger_backend, config.tagger_max_chars, config.match_mode
    );

    let state = AppState {
        reader: Arc::new(PdfDocumentReader),
        extractor,
        match_mode: config.match_mode,
        generator,
    };

    let cors = CorsLayer::new()
        .allow_origin(
            config
                .cors_allowed_origin
                .parse::<HeaderValue>()
                .context("CORS_ALLOWED_ORIGIN must be a valid header value")?,
        )
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    let app = build_router(state, config.max_upload_bytes)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn build_tagger(backend: TaggerBackend, max_chars: usize) -> Result<Arc<dyn Tagger>> {
    match backend {
        TaggerBackend::Rule => Ok(Arc::new(RuleTagger::with_max_chars(max_chars))),
        #[cfg(feature = "bert")]
        TaggerBackend::Bert => {
            // POSModel::new downloads and loads weights synchronously
            let tagger =
                tokio::task::spawn_blocking(move || nlp::bert::BertTagger::new(max_chars))
                    .await
                    .context("POS model loading task failed")??;
            Ok(Arc::new(tagger))
        }
        #[cfg(not(feature = "bert"))]
        TaggerBackend::Bert => {
            anyhow::bail!("TAGGER_BACKEND=bert requires building with the `bert` feature")
        }
    }
}
