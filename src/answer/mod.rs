//! Keyword question answering
//!
//! Answers a question by quoting every sentence of the context that contains
//! the question's first word. Matching is case-insensitive substring
//! containment, not whole-word: the keyword "cat" also matches "category".

pub mod report;

use thiserror::Error;

use crate::nlp::segmenter::segment;
use crate::nlp::tokenizer::first_term;

pub use report::AnalysisReport;

/// Returned in place of a report when an answer cannot be produced.
pub const FALLBACK_ANSWER: &str = "Unable to generate a detailed answer for this question.";

/// Reasons an answer could not be generated. Never surfaced to callers of
/// [`Answerer::answer`]; they get [`FALLBACK_ANSWER`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnswerError {
    #[error("question has no keyword")]
    MissingKeyword,
}

/// Keyword-based sentence retriever.
#[derive(Debug, Clone, Copy, Default)]
pub struct Answerer;

impl Answerer {
    pub fn new() -> Self {
        Self
    }

    /// Lowercased first whitespace-delimited token of `question`.
    pub fn keyword(question: &str) -> Result<String, AnswerError> {
        first_term(question).ok_or(AnswerError::MissingKeyword)
    }

    /// Sentences of `context` whose lowercase text contains `keyword`.
    pub fn relevant_sentences(keyword: &str, context: &str) -> Vec<String> {
        segment(context)
            .into_iter()
            .filter(|s| s.text.to_lowercase().contains(keyword))
            .map(|s| s.text)
            .collect()
    }

    /// Build the report for `question`, or say why it can't be built.
    pub fn try_answer(&self, question: &str, context: &str) -> Result<AnalysisReport, AnswerError> {
        let keyword = Self::keyword(question)?;
        let findings = Self::relevant_sentences(&keyword, context);
        tracing::trace!(%keyword, matches = findings.len(), "answered question");
        Ok(AnalysisReport::new(question, findings))
    }

    /// Render the answer report for `question`.
    ///
    /// Never fails: internal errors are logged and replaced by
    /// [`FALLBACK_ANSWER`].
    pub fn answer(&self, question: &str, context: &str) -> String {
        match self.try_answer(question, context) {
            Ok(report) => report.render(),
            Err(err) => {
                tracing::warn!(error = %err, question, "error generating answer");
                FALLBACK_ANSWER.to_string()
            }
        }
    }
}
