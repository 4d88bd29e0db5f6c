//! Keyword extraction — turns resume text into a sorted set of skill/entity
//! candidates using a pluggable `Tagger`.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::nlp::{RuleTagger, Tagger, TaggerError};

pub mod matcher;

pub use matcher::{match_keywords, MatchMode};

/// Single tokens must be longer than this many characters.
const MIN_TOKEN_CHARS: usize = 2;

/// Deduplicated keywords in lexicographic (case-sensitive) order.
/// Blank strings are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct KeywordSet(BTreeSet<String>);

impl KeywordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a trimmed copy of `keyword`. Returns false for blank input or
    /// duplicates.
    pub fn insert(&mut self, keyword: &str) -> bool {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return false;
        }
        self.0.insert(keyword.to_string())
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.0.contains(keyword)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sorted view.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }
}

impl<S: AsRef<str>> FromIterator<S> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = KeywordSet::new();
        for keyword in iter {
            set.insert(keyword.as_ref());
        }
        set
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("keyword extraction backend failed: {0}")]
    Backend(#[from] TaggerError),
}

/// Extracts keywords with whichever tagging backend it was built with.
#[derive(Clone)]
pub struct KeywordExtractor {
    tagger: Arc<dyn Tagger>,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new(Arc::new(RuleTagger::new()))
    }
}

impl KeywordExtractor {
    pub fn new(tagger: Arc<dyn Tagger>) -> Self {
        Self { tagger }
    }

    /// Runs the extraction rules:
    /// 1. multi-word noun phrases that are not entirely lowercase
    /// 2. proper/common nouns that are not stop words and are longer than 2 chars
    /// 3. keep only purely alphabetic strings or strings containing a space
    pub fn extract(&self, text: &str) -> Result<KeywordSet, ExtractionError> {
        let analysis = self.tagger.analyze(text)?;
        let mut keywords = KeywordSet::new();

        for phrase in &analysis.phrases {
            let flat = phrase.text.trim();
            if phrase.word_count() > 1 && !is_all_lowercase(flat) && passes_filter(flat) {
                keywords.insert(flat);
            }
        }

        for token in &analysis.tokens {
            let word = token.text.trim();
            if token.tag.is_noun()
                && !token.is_stop
                && word.chars().count() > MIN_TOKEN_CHARS
                && passes_filter(word)
            {
                keywords.insert(word);
            }
        }

        debug!(
            tokens = analysis.tokens.len(),
            phrases = analysis.phrases.len(),
            keywords = keywords.len(),
            "Keyword extraction complete"
        );

        Ok(keywords)
    }

    /// Like `extract`, but a backend failure is logged and yields an empty
    /// set. The flag is true when that happened.
    pub fn extract_or_empty(&self, text: &str) -> (KeywordSet, bool) {
        match self.extract(text) {
            Ok(keywords) => (keywords, false),
            Err(e) => {
                warn!("Keyword extraction degraded to empty set: {e}");
                (KeywordSet::new(), true)
            }
        }
    }
}

/// Extracts keywords with the default English backend. Backend failures are
/// logged and degrade to an empty set; use `KeywordExtractor::extract` to
/// tell them apart from "no keywords found".
///
/// The HTTP pipeline goes through `KeywordExtractor::extract_or_empty` on the
/// configured backend instead, so this is only the standalone entry point.
#[cfg_attr(not(test), allow(dead_code))]
pub fn extract_keywords(text: &str) -> KeywordSet {
    KeywordExtractor::default().extract_or_empty(text).0
}

/// True when the string has cased characters and none of them is uppercase.
fn is_all_lowercase(s: &str) -> bool {
    let mut has_cased = false;
    for c in s.chars() {
        if c.is_uppercase() {
            return false;
        }
        if c.is_lowercase() {
            has_cased = true;
        }
    }
    has_cased
}

fn passes_filter(s: &str) -> bool {
    let alphabetic = !s.is_empty() && s.chars().all(char::is_alphabetic);
    alphabetic || s.contains(' ')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::{Analysis, NounPhrase, PosTag, Token};

    const RESUME: &str = "Experienced Python Developer skilled in AWS and Docker.";

    struct FailingTagger;

    impl Tagger for FailingTagger {
        fn tag(&self, _text: &str) -> Result<Vec<Token>, TaggerError> {
            Err(TaggerError::Backend("model not loaded".to_string()))
        }

        fn chunk(&self, _text: &str) -> Result<Vec<NounPhrase>, TaggerError> {
            Err(TaggerError::Backend("model not loaded".to_string()))
        }
    }

    /// Returns a fixed analysis regardless of input.
    struct FixedTagger(Analysis);

    impl Tagger for FixedTagger {
        fn tag(&self, _text: &str) -> Result<Vec<Token>, TaggerError> {
            Ok(self.0.tokens.clone())
        }

        fn chunk(&self, _text: &str) -> Result<Vec<NounPhrase>, TaggerError> {
            Ok(self.0.phrases.clone())
        }
    }

    fn token(text: &str, tag: PosTag, is_stop: bool) -> Token {
        Token {
            text: text.to_string(),
            tag,
            is_stop,
            start: 0,
            end: text.len(),
        }
    }

    fn phrase(text: &str) -> NounPhrase {
        NounPhrase {
            tokens: vec![],
            text: text.to_string(),
        }
    }

    #[test]
    fn test_resume_sentence_keywords() {
        let keywords = extract_keywords(RESUME);
        assert!(keywords.contains("AWS"));
        assert!(keywords.contains("Docker"));
        assert!(keywords.contains("Python"));
        assert!(keywords.contains("Experienced Python Developer"));
        assert!(!keywords.contains("skilled"));
    }

    #[test]
    fn test_empty_text_yields_empty_set() {
        assert!(extract_keywords("").is_empty());
        assert!(extract_keywords(" \n\t").is_empty());
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let text = "Senior Data Engineer at Acme Corp.\nBuilt Kafka pipelines on GCP.";
        assert_eq!(extract_keywords(text), extract_keywords(text));
    }

    #[test]
    fn test_keywords_are_never_blank() {
        let text = "  Rust ,, \u{0} -- Tokio\n\n\tthe  AWS Lambda  ";
        for keyword in extract_keywords(text).iter() {
            assert!(!keyword.trim().is_empty());
        }
    }

    #[test]
    fn test_output_is_alphabetic_or_multi_word() {
        let text = "Shipped Node.js services, C++ tooling and CI/CD on AWS EC2 for 5 years.";
        for keyword in extract_keywords(text).iter() {
            assert!(
                keyword.chars().all(char::is_alphabetic) || keyword.contains(' '),
                "unexpected keyword {keyword:?}"
            );
        }
    }

    #[test]
    fn test_hyphenated_compound_yields_no_fragments() {
        let keywords = extract_keywords("Senior Full-Stack Developer at Acme.");
        assert!(keywords.contains("Senior Full-Stack Developer"));
        assert!(!keywords.contains("Senior Full"));
        assert!(!keywords.contains("Stack Developer"));

        let keywords = extract_keywords("Worked as a Full-stack Developer on payments");
        assert!(keywords.contains("a Full-stack Developer"));
        assert!(!keywords.contains("a Full"));
        assert!(!keywords.contains("stack Developer"));
        assert!(match_keywords(&keywords, "A full-time role", MatchMode::Substring).is_empty());
    }

    #[test]
    fn test_degraded_extraction_is_flagged() {
        let failing = KeywordExtractor::new(Arc::new(FailingTagger));
        let (keywords, degraded) = failing.extract_or_empty("Rust");
        assert!(keywords.is_empty());
        assert!(degraded);

        let (keywords, degraded) = KeywordExtractor::default().extract_or_empty(RESUME);
        assert!(keywords.contains("AWS"));
        assert!(!degraded);
    }

    #[test]
    fn test_lowercase_phrases_are_rejected() {
        let analysis = Analysis {
            tokens: vec![],
            phrases: vec![phrase("the project"), phrase("Machine Learning"), phrase("Kafka")],
        };
        let extractor = KeywordExtractor::new(Arc::new(FixedTagger(analysis)));
        let keywords = extractor.extract("ignored").unwrap();
        assert_eq!(keywords.to_vec(), vec!["Machine Learning"]);
    }

    #[test]
    fn test_multi_word_phrases_skip_alphabetic_filter() {
        let analysis = Analysis {
            tokens: vec![],
            phrases: vec![phrase("Full - stack Developer")],
        };
        let extractor = KeywordExtractor::new(Arc::new(FixedTagger(analysis)));
        assert!(extractor.extract("x").unwrap().contains("Full - stack Developer"));
    }

    #[test]
    fn test_token_rules() {
        let analysis = Analysis {
            tokens: vec![
                token("Rust", PosTag::ProperNoun, false),
                token("pipelines", PosTag::Noun, false),
                token("Go", PosTag::ProperNoun, false),
                token("the", PosTag::Determiner, true),
                token("Every", PosTag::Noun, true),
                token("built", PosTag::Verb, false),
                token("EC2", PosTag::ProperNoun, false),
            ],
            phrases: vec![],
        };
        let extractor = KeywordExtractor::new(Arc::new(FixedTagger(analysis)));
        let keywords = extractor.extract("ignored").unwrap();
        assert_eq!(keywords.to_vec(), vec!["Rust", "pipelines"]);
    }

    #[test]
    fn test_backend_failure_is_distinct_from_empty() {
        let extractor = KeywordExtractor::new(Arc::new(FailingTagger));
        assert!(matches!(
            extractor.extract("Python"),
            Err(ExtractionError::Backend(TaggerError::Backend(_)))
        ));
    }

    #[test]
    fn test_input_over_limit_fails_extraction() {
        let extractor = KeywordExtractor::new(Arc::new(RuleTagger::with_max_chars(3)));
        assert!(extractor.extract("Python").is_err());
    }

    #[test]
    fn test_sorted_view_is_case_sensitive_lexicographic() {
        let set: KeywordSet = ["docker", "AWS", "Docker", "AWS", "  "].into_iter().collect();
        assert_eq!(set.to_vec(), vec!["AWS", "Docker", "docker"]);
    }

    #[test]
    fn test_keyword_set_serializes_as_array() {
        let set: KeywordSet = ["Rust", "AWS"].into_iter().collect();
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"["AWS","Rust"]"#);
    }
}
