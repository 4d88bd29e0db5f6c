//! Matches extracted keywords against a job description.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::keywords::KeywordSet;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Case-insensitive substring containment. "Go" matches inside "going".
    #[default]
    Substring,
    /// Case-insensitive, but the occurrence must not touch a letter or digit
    /// on either side.
    WordBoundary,
}

impl FromStr for MatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "substring" => Ok(MatchMode::Substring),
            "word_boundary" | "word-boundary" => Ok(MatchMode::WordBoundary),
            other => Err(format!(
                "unknown match mode '{other}' (expected 'substring' or 'word_boundary')"
            )),
        }
    }
}

/// Returns the keywords that occur in `job_text`, in the sorted order of
/// `keywords`. The result is always a subset of `keywords`.
pub fn match_keywords(keywords: &KeywordSet, job_text: &str, mode: MatchMode) -> Vec<String> {
    if keywords.is_empty() || job_text.is_empty() {
        return Vec::new();
    }

    let job_lower = job_text.to_lowercase();

    keywords
        .iter()
        .filter(|keyword| {
            let needle = keyword.to_lowercase();
            match mode {
                MatchMode::Substring => job_lower.contains(&needle),
                MatchMode::WordBoundary => contains_word(&job_lower, &needle),
            }
        })
        .map(String::from)
        .collect()
}

fn contains_word(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    haystack.match_indices(needle).any(|(at, _)| {
        let before = haystack[..at].chars().next_back();
        let after = haystack[at + needle.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}
