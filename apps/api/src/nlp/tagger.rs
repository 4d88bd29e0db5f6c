//! RuleTagger — deterministic English part-of-speech tagger.
//!
//! Segmentation follows Unicode word boundaries (UAX #29), so "full-stack"
//! yields three tokens while "Node.js" stays whole. Each word is tagged by,
//! in order: shape (digits, acronyms), closed-class lexicon, capitalisation,
//! left context, open-class lexicon, and finally suffix rules.

use unicode_segmentation::UnicodeSegmentation;

use crate::nlp::chunker::noun_phrases;
use crate::nlp::lexicon::{
    closed_class, is_noun_exception, is_stop_word, open_class, ACRONYM_EXCEPTIONS, MODALS,
    SUBJECT_PRONOUNS,
};
use crate::nlp::{Analysis, NounPhrase, PosTag, Tagger, TaggerError, Token, DEFAULT_MAX_CHARS};

const SYMBOLS: &str = "+#$%&*<=>@^|~©®™•·";
const SENTENCE_BREAKS: &[&str] = &[".", "!", "?", ":", ";", "•", "·", "*", "|"];
const BULLET_DASHES: &[&str] = &["-", "–", "—"];

const NOUN_SUFFIXES: &[&str] = &[
    "tion", "sion", "ment", "ness", "ity", "ship", "ance", "ence", "ism", "ist", "er", "or",
    "ure", "age", "ogy", "ics",
];
const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ous", "ful", "ive", "able", "ible", "ical", "ic", "less", "al", "ary",
];

#[derive(Debug, Clone)]
pub struct RuleTagger {
    max_chars: usize,
}

impl Default for RuleTagger {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
        }
    }
}

impl RuleTagger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_chars(max_chars: usize) -> Self {
        Self { max_chars }
    }

    fn check_length(&self, text: &str) -> Result<(), TaggerError> {
        let len = text.chars().count();
        if len > self.max_chars {
            return Err(TaggerError::InputTooLong {
                len,
                max: self.max_chars,
            });
        }
        Ok(())
    }
}

impl Tagger for RuleTagger {
    fn tag(&self, text: &str) -> Result<Vec<Token>, TaggerError> {
        self.check_length(text)?;
        Ok(tag_tokens(text))
    }

    fn chunk(&self, text: &str) -> Result<Vec<NounPhrase>, TaggerError> {
        let tokens = self.tag(text)?;
        Ok(noun_phrases(text, &tokens))
    }

    fn analyze(&self, text: &str) -> Result<Analysis, TaggerError> {
        let tokens = self.tag(text)?;
        let phrases = noun_phrases(text, &tokens);
        Ok(Analysis { tokens, phrases })
    }
}

/// Left context carried between words.
struct Context<'a> {
    sentence_start: bool,
    prev: Option<&'a Token>,
}

impl Context<'_> {
    fn prev_tag(&self) -> Option<PosTag> {
        self.prev.map(|t| t.tag)
    }

    fn prev_lower(&self) -> Option<String> {
        self.prev.map(|t| t.text.to_lowercase())
    }
}

fn tag_tokens(text: &str) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut sentence_start = true;
    let mut after_space = true;

    for (start, segment) in text.split_word_bound_indices() {
        if segment.chars().all(char::is_whitespace) {
            if segment.contains('\n') || segment.contains('\r') {
                sentence_start = true;
            }
            after_space = true;
            continue;
        }
        if segment.chars().all(char::is_control) {
            continue;
        }

        let tag = {
            let ctx = Context {
                sentence_start,
                prev: tokens.last(),
            };
            tag_word(segment, &ctx)
        };

        match tag {
            PosTag::Punctuation | PosTag::Symbol => {
                if SENTENCE_BREAKS.contains(&segment)
                    || (after_space && BULLET_DASHES.contains(&segment))
                {
                    sentence_start = true;
                }
            }
            _ => sentence_start = false,
        }
        after_space = false;

        tokens.push(Token {
            text: segment.to_string(),
            tag,
            is_stop: is_stop_word(&segment.to_lowercase()),
            start,
            end: start + segment.len(),
        });
    }

    tokens
}

fn tag_word(word: &str, ctx: &Context<'_>) -> PosTag {
    if !word.chars().any(char::is_alphanumeric) {
        return if word.chars().all(|c| SYMBOLS.contains(c)) {
            PosTag::Symbol
        } else if word.chars().all(is_punctuation) {
            PosTag::Punctuation
        } else {
            PosTag::Other
        };
    }

    if word.chars().any(|c| c.is_numeric()) {
        let numeric = word
            .chars()
            .all(|c| c.is_numeric() || ".,:/%-".contains(c));
        return if numeric {
            PosTag::Numeral
        } else if word.chars().any(char::is_uppercase) {
            PosTag::ProperNoun
        } else {
            PosTag::Noun
        };
    }

    let lower = word.to_lowercase();
    let acronym = is_acronym(word);

    if acronym && ACRONYM_EXCEPTIONS.contains(&word) {
        return PosTag::ProperNoun;
    }
    if let Some(tag) = closed_class(&lower) {
        return tag;
    }
    if acronym {
        return PosTag::ProperNoun;
    }

    let capitalized = word.chars().next().is_some_and(char::is_uppercase);
    if capitalized && !ctx.sentence_start {
        return PosTag::ProperNoun;
    }

    if !capitalized && expects_verb(ctx) && !has_suffix(&lower, NOUN_SUFFIXES) {
        return PosTag::Verb;
    }

    if let Some(tag) = open_class(&lower) {
        return tag;
    }

    if let Some(tag) = suffix_tag(&lower, ctx) {
        return tag;
    }

    if capitalized {
        PosTag::ProperNoun
    } else {
        PosTag::Noun
    }
}

/// ASCII punctuation or the General Punctuation block (dashes, quotes, ellipsis).
fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation() || ('\u{2010}'..='\u{205E}').contains(&c)
}

/// Two or more letters, all upper case ("AWS", "SQL").
fn is_acronym(word: &str) -> bool {
    let letters: Vec<char> = word.chars().filter(|c| c.is_alphabetic()).collect();
    letters.len() >= 2 && letters.iter().all(|c| c.is_uppercase())
}

fn expects_verb(ctx: &Context<'_>) -> bool {
    match (ctx.prev_tag(), ctx.prev_lower()) {
        (Some(PosTag::Particle), Some(prev)) => prev == "to",
        (Some(PosTag::Auxiliary), Some(prev)) => MODALS.contains(&prev.as_str()),
        (Some(PosTag::Pronoun), Some(prev)) => SUBJECT_PRONOUNS.contains(&prev.as_str()),
        _ => false,
    }
}

fn has_suffix(lower: &str, suffixes: &[&str]) -> bool {
    lower.chars().count() > 4 && suffixes.iter().any(|s| lower.ends_with(s))
}

fn suffix_tag(lower: &str, ctx: &Context<'_>) -> Option<PosTag> {
    let len = lower.chars().count();
    if len > 4 && lower.ends_with("ly") {
        return Some(PosTag::Adverb);
    }
    if len > 4 && lower.ends_with("ing") {
        let nominal = matches!(
            ctx.prev_tag(),
            Some(PosTag::Determiner | PosTag::Adjective | PosTag::Noun | PosTag::ProperNoun)
        );
        return Some(if nominal { PosTag::Noun } else { PosTag::Verb });
    }
    if len > 3 && lower.ends_with("ed") {
        let attributive = matches!(ctx.prev_tag(), Some(PosTag::Determiner));
        return Some(if attributive {
            PosTag::Adjective
        } else {
            PosTag::Verb
        });
    }
    if is_noun_exception(lower) || has_suffix(lower, NOUN_SUFFIXES) {
        return Some(PosTag::Noun);
    }
    if has_suffix(lower, ADJECTIVE_SUFFIXES) {
        return Some(PosTag::Adjective);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(text: &str) -> Vec<(String, PosTag)> {
        RuleTagger::new()
            .tag(text)
            .unwrap()
            .into_iter()
            .map(|t| (t.text, t.tag))
            .collect()
    }

    fn tag_of(text: &str, word: &str) -> PosTag {
        tags(text)
            .into_iter()
            .find(|(w, _)| w == word)
            .map(|(_, t)| t)
            .unwrap_or_else(|| panic!("{word} not found in {text}"))
    }

    #[test]
    fn test_empty_text_has_no_tokens() {
        assert!(RuleTagger::new().tag("").unwrap().is_empty());
        assert!(RuleTagger::new().tag("   \n\t ").unwrap().is_empty());
    }

    #[test]
    fn test_resume_sentence_tags() {
        let text = "Experienced Python Developer skilled in AWS and Docker.";
        assert_eq!(tag_of(text, "Experienced"), PosTag::Adjective);
        assert_eq!(tag_of(text, "Python"), PosTag::ProperNoun);
        assert_eq!(tag_of(text, "Developer"), PosTag::ProperNoun);
        assert_eq!(tag_of(text, "in"), PosTag::Adposition);
        assert_eq!(tag_of(text, "AWS"), PosTag::ProperNoun);
        assert_eq!(tag_of(text, "and"), PosTag::Conjunction);
        assert_eq!(tag_of(text, "Docker"), PosTag::ProperNoun);
        assert_eq!(tag_of(text, "."), PosTag::Punctuation);
    }

    #[test]
    fn test_stop_flag_is_case_insensitive() {
        let tokens = RuleTagger::new().tag("The team and THE product").unwrap();
        let the: Vec<_> = tokens.iter().filter(|t| t.text.eq_ignore_ascii_case("the")).collect();
        assert_eq!(the.len(), 2);
        assert!(the.iter().all(|t| t.is_stop));
        assert!(!tokens.iter().find(|t| t.text == "team").unwrap().is_stop);
    }

    #[test]
    fn test_context_verbs() {
        assert_eq!(tag_of("We need a developer", "need"), PosTag::Verb);
        assert_eq!(tag_of("able to deploy services", "deploy"), PosTag::Verb);
        assert_eq!(tag_of("you will mentor engineers", "mentor"), PosTag::Verb);
    }

    #[test]
    fn test_suffix_rules() {
        assert_eq!(tag_of("worked quickly", "quickly"), PosTag::Adverb);
        assert_eq!(tag_of("a scalable system", "scalable"), PosTag::Adjective);
        assert_eq!(tag_of("data visualization", "visualization"), PosTag::Noun);
        assert_eq!(tag_of("machine learning", "learning"), PosTag::Noun);
        assert_eq!(tag_of("shipped features", "shipped"), PosTag::Verb);
    }

    #[test]
    fn test_sentence_initial_capital_uses_lexicon() {
        assert_eq!(tag_of("The cloud", "The"), PosTag::Determiner);
        assert_eq!(tag_of("Designed APIs", "Designed"), PosTag::Verb);
        assert_eq!(tag_of("Kubernetes rocks", "Kubernetes"), PosTag::ProperNoun);
    }

    #[test]
    fn test_new_line_resets_sentence_start() {
        assert_eq!(tag_of("Skills\nLed migrations", "Led"), PosTag::Verb);
        assert_eq!(tag_of("skills Led", "Led"), PosTag::ProperNoun);
    }

    #[test]
    fn test_numbers_and_mixed_tokens() {
        assert_eq!(tag_of("over 5 years", "5"), PosTag::Numeral);
        assert_eq!(tag_of("stored in S3", "S3"), PosTag::ProperNoun);
    }

    #[test]
    fn test_hyphenated_words_split_and_dotted_names_stay_whole() {
        let words: Vec<String> = tags("full-stack Node.js").into_iter().map(|(w, _)| w).collect();
        assert_eq!(words, vec!["full", "-", "stack", "Node.js"]);
    }

    #[test]
    fn test_emoji_is_neither_punctuation_nor_word() {
        assert_eq!(tag_of("Shipped 🚀 fast", "🚀"), PosTag::Other);
        assert_eq!(tag_of("Rust — Tokio", "—"), PosTag::Punctuation);
        assert_eq!(tag_of("C++ and C#", "+"), PosTag::Symbol);
    }

    #[test]
    fn test_acronym_exception_is_proper_noun() {
        assert_eq!(tag_of("worked in IT support", "IT"), PosTag::ProperNoun);
        assert_eq!(tag_of("EDUCATION AND SKILLS", "AND"), PosTag::Conjunction);
    }

    #[test]
    fn test_control_characters_do_not_break_tagging() {
        let tokens = RuleTagger::new().tag("Rust\u{0}\u{7}Go\u{1b}").unwrap();
        assert!(tokens.iter().any(|t| t.text == "Rust"));
    }

    #[test]
    fn test_offsets_point_into_source() {
        let text = "Built  Kafka pipelines";
        for token in RuleTagger::new().tag(text).unwrap() {
            assert_eq!(&text[token.start..token.end], token.text);
        }
    }

    #[test]
    fn test_input_over_limit_is_rejected() {
        let tagger = RuleTagger::with_max_chars(5);
        assert_eq!(
            tagger.tag("abcdef"),
            Err(TaggerError::InputTooLong { len: 6, max: 5 })
        );
        assert!(tagger.tag("abcde").is_ok());
    }
}
