//! Core data types shared across the engine.

use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// Default maximum input length, in characters.
pub const MAX_TEXT_LENGTH: usize = 5000;
/// Default maximum number of questions per request.
pub const MAX_QUESTIONS: usize = 5;
/// Default maximum question length, in characters.
pub const MAX_QUESTION_LENGTH: usize = 200;

/// A trimmed, non-empty span of source text bounded by `.`, `!` or `?`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// Trimmed sentence text (delimiters excluded)
    pub text: String,
    /// Position in the source sentence sequence (0-based)
    pub index: usize,
    /// Byte offset of the first character in the source
    pub start: usize,
    /// Byte offset one past the last character in the source
    pub end: usize,
}

impl Sentence {
    pub fn new(text: impl Into<String>, index: usize, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            index,
            start,
            end,
        }
    }
}

/// A sentence with its average per-word frequency score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredSentence {
    pub sentence: Sentence,
    pub score: f64,
}

/// A question and the answer generated for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaPair {
    pub question: String,
    pub answer: String,
}

/// Tunables for the whole engine.
///
/// Every field has a default, so a partial JSON object is enough:
///
/// ```json
/// { "max_text_length": 8000, "summary_ratio": 0.25 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotesConfig {
    /// Inputs longer than this (in characters) are rejected by the summarizer
    pub max_text_length: usize,
    /// Maximum number of questions per request
    pub max_questions: usize,
    /// Maximum question length (in characters)
    pub max_question_length: usize,
    /// Fraction of sentences kept in a summary (rounded up)
    pub summary_ratio: f64,
    /// Lower bound on the number of summary sentences
    pub min_summary_sentences: usize,
    /// Terms shorter than this (in characters) are not counted
    pub min_term_length: usize,
    /// Optional stopword language; matching terms are not counted either
    pub stopword_language: Option<String>,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            max_text_length: MAX_TEXT_LENGTH,
            max_questions: MAX_QUESTIONS,
            max_question_length: MAX_QUESTION_LENGTH,
            summary_ratio: 0.3,
            min_summary_sentences: 3,
            min_term_length: 4,
            stopword_language: None,
        }
    }
}

impl NotesConfig {
    /// Parse a config from JSON; omitted fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let cfg = NotesConfig::default();
        assert_eq!(cfg.max_text_length, 5000);
        assert_eq!(cfg.max_questions, 5);
        assert_eq!(cfg.max_question_length, 200);
        assert_eq!(cfg.min_summary_sentences, 3);
        assert_eq!(cfg.min_term_length, 4);
        assert!(cfg.stopword_language.is_none());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let cfg = NotesConfig::from_json(r#"{ "max_text_length": 100, "stopword_language": "en" }"#)
            .unwrap();
        assert_eq!(cfg.max_text_length, 100);
        assert_eq!(cfg.stopword_language.as_deref(), Some("en"));
        assert_eq!(cfg.summary_ratio, 0.3);
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let err = NotesConfig::from_json(r#"{ "max_text_length": "lots" }"#).unwrap_err();
        assert!(matches!(err, crate::NotesError::Config(_)));
    }
}
