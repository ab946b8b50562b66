//! Error types.
//!
//! [`NotesError`] is what callers see. [`ErrorCode`] is the stable,
//! serializable classification carried by validation diagnostics.

use serde::Serialize;
use thiserror::Error;

use crate::pipeline::validation::ValidationReport;

pub type Result<T> = std::result::Result<T, NotesError>;

/// Stable machine-readable error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    LengthExceeded,
    EmptyInput,
    TooManyQuestions,
    QuestionTooLong,
    BlankQuestion,
    InvalidConfig,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LengthExceeded => "length_exceeded",
            Self::EmptyInput => "empty_input",
            Self::TooManyQuestions => "too_many_questions",
            Self::QuestionTooLong => "question_too_long",
            Self::BlankQuestion => "blank_question",
            Self::InvalidConfig => "invalid_config",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors surfaced to the caller of the summarizer or the notes pipeline.
#[derive(Debug, Error)]
pub enum NotesError {
    #[error("Text exceeds maximum length of {max} characters (got {length})")]
    LengthExceeded { length: usize, max: usize },

    #[error("Please provide some text or upload a file to analyze.")]
    EmptyInput,

    #[error("invalid request: {0}")]
    InvalidRequest(ValidationReport),

    #[error("failed to parse configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl NotesError {
    /// Classification for logging and serialized responses.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::LengthExceeded { .. } => ErrorCode::LengthExceeded,
            Self::EmptyInput => ErrorCode::EmptyInput,
            Self::InvalidRequest(report) => report
                .errors()
                .next()
                .map(|e| e.code)
                .unwrap_or(ErrorCode::InvalidConfig),
            Self::Config(_) => ErrorCode::InvalidConfig,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_exceeded_message() {
        let err = NotesError::LengthExceeded {
            length: 5001,
            max: 5000,
        };
        assert_eq!(
            err.to_string(),
            "Text exceeds maximum length of 5000 characters (got 5001)"
        );
        assert_eq!(err.code(), ErrorCode::LengthExceeded);
    }

    #[test]
    fn test_code_serializes_snake_case() {
        let json = serde_json::to_string(&ErrorCode::TooManyQuestions).unwrap();
        assert_eq!(json, "\"too_many_questions\"");
        assert_eq!(ErrorCode::TooManyQuestions.as_str(), "too_many_questions");
    }

    #[test]
    fn test_config_error_from_json() {
        let parse = serde_json::from_str::<serde_json::Value>("{not json");
        let err: NotesError = parse.unwrap_err().into();
        assert_eq!(err.code(), ErrorCode::InvalidConfig);
    }
}
