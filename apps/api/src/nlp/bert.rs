//! BertTagger: transformer part-of-speech tagging through rust-bert.
//!
//! Built only with the `bert` feature. The model is downloaded on first use
//! and loaded once; construction blocks, so call it off the async runtime.
//! Tags come back as words without offsets, so each word is located in its
//! source line and the shared chunker builds the noun phrases.

use std::sync::Mutex;

use rust_bert::pipelines::pos_tagging::{POSConfig, POSModel, POSTag};
use tracing::{debug, info};

use crate::nlp::chunker::noun_phrases;
use crate::nlp::lexicon::is_stop_word;
use crate::nlp::{Analysis, NounPhrase, PosTag, Tagger, TaggerError, Token};

pub struct BertTagger {
    model: Mutex<POSModel>,
    max_chars: usize,
}

impl BertTagger {
    pub fn new(max_chars: usize) -> Result<Self, TaggerError> {
        let model = POSModel::new(POSConfig::default())
            .map_err(|e| TaggerError::Backend(format!("failed to load POS model: {e}")))?;
        info!("BERT POS model loaded");
        Ok(Self {
            model: Mutex::new(model),
            max_chars,
        })
    }

    fn predict(&self, text: &str) -> Result<Vec<Token>, TaggerError> {
        let len = text.chars().count();
        if len > self.max_chars {
            return Err(TaggerError::InputTooLong {
                len,
                max: self.max_chars,
            });
        }

        let lines = source_lines(text);
        if lines.is_empty() {
            return Ok(Vec::new());
        }
        let inputs: Vec<&str> = lines.iter().map(|(_, line)| *line).collect();

        let predictions = {
            let model = self
                .model
                .lock()
                .map_err(|_| TaggerError::Backend("POS model lock poisoned".to_string()))?;
            model.predict(&inputs)
        };

        let mut tokens = Vec::new();
        for ((offset, line), tags) in lines.iter().zip(predictions) {
            tokens.extend(place_tags(text, *offset, line, &tags));
        }
        Ok(tokens)
    }
}

impl Tagger for BertTagger {
    fn tag(&self, text: &str) -> Result<Vec<Token>, TaggerError> {
        self.predict(text)
    }

    fn chunk(&self, text: &str) -> Result<Vec<NounPhrase>, TaggerError> {
        let tokens = self.predict(text)?;
        Ok(noun_phrases(text, &tokens))
    }

    fn analyze(&self, text: &str) -> Result<Analysis, TaggerError> {
        let tokens = self.predict(text)?;
        let phrases = noun_phrases(text, &tokens);
        Ok(Analysis { tokens, phrases })
    }
}

/// Non-blank lines with their byte offset into `text`.
fn source_lines(text: &str) -> Vec<(usize, &str)> {
    let mut offset = 0;
    let mut lines = Vec::new();
    for raw in text.split_inclusive('\n') {
        let line = raw.trim_end_matches(['\n', '\r']);
        if !line.trim().is_empty() {
            lines.push((offset, line));
        }
        offset += raw.len();
    }
    lines
}

/// Turns the model's words into tokens with offsets into `text`. Words are
/// matched left to right; a word that cannot be found is skipped.
fn place_tags(text: &str, offset: usize, line: &str, tags: &[POSTag]) -> Vec<Token> {
    let mut cursor = 0;
    let mut tokens = Vec::with_capacity(tags.len());
    for tag in tags {
        let word = tag.word.trim();
        if word.is_empty() {
            continue;
        }
        let Some((start, end)) = locate(line, cursor, word) else {
            debug!("POS word {word:?} not found in source line, skipped");
            continue;
        };
        cursor = end;

        let source = &text[offset + start..offset + end];
        tokens.push(Token {
            text: source.to_string(),
            tag: upos_tag(&tag.label),
            is_stop: is_stop_word(&source.to_lowercase()),
            start: offset + start,
            end: offset + end,
        });
    }
    tokens
}

/// Byte span of the first occurrence of `word` in `line` at or after `from`.
/// The default model is uncased, so ASCII case is ignored.
fn locate(line: &str, from: usize, word: &str) -> Option<(usize, usize)> {
    let rest = line.get(from..)?;
    rest.char_indices()
        .map(|(i, _)| i)
        .find(|&i| {
            rest.get(i..i + word.len())
                .is_some_and(|candidate| candidate.eq_ignore_ascii_case(word))
        })
        .map(|i| (from + i, from + i + word.len()))
}

/// Maps a Universal Dependencies tag (or the pipeline's "." punctuation
/// label) onto `PosTag`.
fn upos_tag(label: &str) -> PosTag {
    match label {
        "PROPN" => PosTag::ProperNoun,
        "NOUN" => PosTag::Noun,
        "VERB" => PosTag::Verb,
        "AUX" => PosTag::Auxiliary,
        "ADJ" => PosTag::Adjective,
        "ADV" => PosTag::Adverb,
        "DET" => PosTag::Determiner,
        "PRON" => PosTag::Pronoun,
        "ADP" => PosTag::Adposition,
        "CCONJ" | "SCONJ" => PosTag::Conjunction,
        "PART" => PosTag::Particle,
        "NUM" => PosTag::Numeral,
        "PUNCT" | "." => PosTag::Punctuation,
        "SYM" => PosTag::Symbol,
        _ => PosTag::Other,
    }
}
