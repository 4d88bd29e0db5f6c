//! Tagging backend — part-of-speech tagging and noun-phrase chunking.
//!
//! The keyword extractor only talks to the `Tagger` trait. `RuleTagger` is the
//! default English backend: deterministic, lexicon-driven, no model files.
//! With the `bert` feature, `bert::BertTagger` tags with a transformer model.

use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

#[cfg(feature = "bert")]
pub mod bert;
pub mod chunker;
pub mod lexicon;
pub mod tagger;

pub use tagger::RuleTagger;

/// Longest input (in characters) the default backend accepts.
pub const DEFAULT_MAX_CHARS: usize = 1_000_000;

/// Which `Tagger` implementation the service runs with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TaggerBackend {
    #[default]
    Rule,
    /// Requires the `bert` feature.
    Bert,
}

impl FromStr for TaggerBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rule" => Ok(TaggerBackend::Rule),
            "bert" => Ok(TaggerBackend::Bert),
            other => Err(format!(
                "unknown tagger backend '{other}' (expected 'rule' or 'bert')"
            )),
        }
    }
}

/// Coarse part-of-speech category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PosTag {
    ProperNoun,
    Noun,
    Verb,
    Auxiliary,
    Adjective,
    Adverb,
    Determiner,
    Pronoun,
    Adposition,
    Conjunction,
    Particle,
    Numeral,
    Punctuation,
    Symbol,
    Other,
}

impl PosTag {
    pub fn is_noun(self) -> bool {
        matches!(self, PosTag::ProperNoun | PosTag::Noun)
    }
}

/// A tagged token. `start`/`end` are byte offsets into the analysed text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub text: String,
    pub tag: PosTag,
    pub is_stop: bool,
    pub start: usize,
    pub end: usize,
}

/// A contiguous noun phrase and its flattened text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NounPhrase {
    pub tokens: Vec<Token>,
    /// Source span with inner whitespace collapsed to single spaces, trimmed.
    pub text: String,
}

impl NounPhrase {
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// Tokens and noun phrases produced from a single pass over a text.
#[derive(Debug, Clone, Default)]
pub struct Analysis {
    pub tokens: Vec<Token>,
    pub phrases: Vec<NounPhrase>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaggerError {
    #[error("input of {len} characters exceeds the tagger limit of {max}")]
    InputTooLong { len: usize, max: usize },

    #[error("tagging backend failure: {0}")]
    #[cfg_attr(not(feature = "bert"), allow(dead_code))]
    Backend(String),
}

/// Pluggable tagging backend. Implementations must be deterministic and
/// callable from any thread without synchronisation.
pub trait Tagger: Send + Sync {
    fn tag(&self, text: &str) -> Result<Vec<Token>, TaggerError>;

    fn chunk(&self, text: &str) -> Result<Vec<NounPhrase>, TaggerError>;

    /// Tags and chunks in one call. Backends that can share the tagging pass
    /// should override this.
    fn analyze(&self, text: &str) -> Result<Analysis, TaggerError> {
        Ok(Analysis {
            tokens: self.tag(text)?,
            phrases: self.chunk(text)?,
        })
    }
}
