//! Pipeline runner: one summary plus one answer per question.
//!
//! [`NotesPipeline::process`] does what a note-taking front end does with the
//! engine:
//!
//! 1. Resolve the source (a file becomes a name placeholder)
//! 2. Reject empty input
//! 3. Validate questions and config
//! 4. Check the text length, then summarize and answer in parallel
//!
//! Over-long text is rejected before any answer is computed. A summary
//! failure aborts the whole request. Answers never fail; a bad
//! question yields the fallback answer and does not affect its siblings.

use rayon::prelude::*;

use super::request::{NotesRequest, NotesResult};
use super::validation::ValidationEngine;
use crate::answer::Answerer;
use crate::errors::{NotesError, Result};
use crate::summarizer::Summarizer;
use crate::types::{NotesConfig, QaPair};

pub const STAGE_VALIDATE: &str = "validate";
pub const STAGE_SUMMARIZE: &str = "summarize";
pub const STAGE_ANSWER: &str = "answer";

/// Enter a debug span for a pipeline stage under `$parent`.
///
/// Rayon worker threads do not inherit the caller's current span.
macro_rules! trace_stage {
    ($parent:expr, $name:expr) => {
        let _span = tracing::debug_span!(parent: $parent, "notes_stage", stage = $name).entered();
    };
}

/// Summarize-and-answer pipeline with a fixed configuration.
#[derive(Debug)]
pub struct NotesPipeline {
    config: NotesConfig,
    validator: ValidationEngine,
    summarizer: Summarizer,
    answerer: Answerer,
}

impl Default for NotesPipeline {
    fn default() -> Self {
        Self::new(NotesConfig::default())
    }
}

impl NotesPipeline {
    pub fn new(config: NotesConfig) -> Self {
        Self {
            summarizer: Summarizer::with_config(&config),
            validator: ValidationEngine::with_defaults(),
            answerer: Answerer::new(),
            config,
        }
    }

    /// Replace the default validation rules.
    pub fn with_validator(mut self, validator: ValidationEngine) -> Self {
        self.validator = validator;
        self
    }

    pub fn config(&self) -> &NotesConfig {
        &self.config
    }

    /// Run the full request.
    pub fn process(&self, request: &NotesRequest) -> Result<NotesResult> {
        let content = request.source.content();
        if content.trim().is_empty() {
            return Err(NotesError::EmptyInput);
        }

        let parent = tracing::Span::current();

        {
            trace_stage!(&parent, STAGE_VALIDATE);
            let report = self.validator.validate(request, &self.config);
            for warning in report.warnings() {
                tracing::debug!(%warning, "request warning");
            }
            if report.has_errors() {
                return Err(NotesError::InvalidRequest(report));
            }
        }

        let log_failure = |err: NotesError| {
            tracing::error!(error = %err, "error processing content");
            err
        };

        self.summarizer.check_length(&content).map_err(log_failure)?;

        let (summary, answers) = rayon::join(
            || {
                trace_stage!(&parent, STAGE_SUMMARIZE);
                self.summarizer.summarize(&content)
            },
            || {
                trace_stage!(&parent, STAGE_ANSWER);
                self.answer_all(&request.questions, &content)
            },
        );

        let summary = summary.map_err(log_failure)?;

        Ok(NotesResult {
            summary: summary.render(),
            answers,
        })
    }

    /// Answer every non-blank question against `context`, keeping input order.
    pub fn answer_all(&self, questions: &[String], context: &str) -> Vec<QaPair> {
        questions
            .par_iter()
            .filter(|q| !q.trim().is_empty())
            .map(|q| QaPair {
                question: q.clone(),
                answer: self.answerer.answer(q, context),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answer::FALLBACK_ANSWER;
    use crate::errors::ErrorCode;

    const NOTES: &str = "Cats are great. Dogs are loyal. Cats sleep a lot.";

    #[test]
    fn test_summary_and_answers() {
        let request = NotesRequest::text(NOTES).with_questions(["cats like sleeping", "dogs?"]);
        let result = NotesPipeline::default().process(&request).unwrap();

        assert_eq!(
            result.summary,
            "Key Points from Your Text:\n• Cats are great\n• Dogs are loyal\n• Cats sleep a lot"
        );
        assert_eq!(result.answers.len(), 2);
        assert_eq!(result.answers[0].question, "cats like sleeping");
        assert!(result.answers[0].answer.contains("   - Cats sleep a lot"));
        assert_eq!(result.answers[1].question, "dogs?");
    }

    #[test]
    fn test_blank_questions_skipped() {
        let request =
            NotesRequest::text(NOTES).with_questions(["cats", "   ", "dogs", "loyal", "sleep"]);
        let result = NotesPipeline::default().process(&request).unwrap();

        let questions: Vec<_> = result.answers.iter().map(|qa| qa.question.as_str()).collect();
        assert_eq!(questions, vec!["cats", "dogs", "loyal", "sleep"]);
    }

    #[test]
    fn test_empty_input() {
        let err = NotesPipeline::default()
            .process(&NotesRequest::text("  \n "))
            .unwrap_err();
        assert!(matches!(err, NotesError::EmptyInput));
    }

    #[test]
    fn test_file_source_uses_placeholder() {
        let request = NotesRequest::file("lecture.pdf").with_questions(["content"]);
        let result = NotesPipeline::default().process(&request).unwrap();

        // "lecture.pdf" splits at the dot
        assert_eq!(
            result.summary,
            "Key Points from Your Text:\n• Content from file: lecture\n• pdf"
        );
        assert!(result.answers[0]
            .answer
            .contains("   - Content from file: lecture"));
    }

    #[test]
    fn test_length_exceeded_aborts_everything() {
        let request = NotesRequest::text("a".repeat(5001)).with_questions(["a"]);
        let err = NotesPipeline::default().process(&request).unwrap_err();
        assert_eq!(err.code(), ErrorCode::LengthExceeded);
    }

    #[test]
    fn test_unknown_stopword_language_rejected() {
        let cfg = NotesConfig {
            stopword_language: Some("klingon".to_string()),
            ..NotesConfig::default()
        };
        let err = NotesPipeline::new(cfg)
            .process(&NotesRequest::text(NOTES))
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidConfig);
    }

    #[test]
    fn test_runs_inside_caller_span() {
        let span = tracing::info_span!("request", id = 7);
        let _guard = span.enter();
        let request = NotesRequest::text(NOTES).with_questions(["cats", "dogs"]);
        let result = NotesPipeline::default().process(&request).unwrap();
        assert_eq!(result.answers.len(), 2);
    }

    #[test]
    fn test_invalid_request() {
        let request = NotesRequest::text(NOTES).with_questions(["a", "b", "c", "d", "e", "f"]);
        let err = NotesPipeline::default().process(&request).unwrap_err();
        match err {
            NotesError::InvalidRequest(report) => {
                assert_eq!(report.errors().count(), 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_answer_all_preserves_order() {
        let questions: Vec<String> = ["sleep", "", "great", "loyal", "zebra"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let answers = NotesPipeline::default().answer_all(&questions, NOTES);
        let got: Vec<_> = answers.iter().map(|qa| qa.question.as_str()).collect();
        assert_eq!(got, vec!["sleep", "great", "loyal", "zebra"]);
        assert!(answers.iter().all(|qa| qa.answer != FALLBACK_ANSWER));
    }

    #[test]
    fn test_custom_config() {
        let cfg = NotesConfig {
            max_text_length: 10,
            ..NotesConfig::default()
        };
        let pipeline = NotesPipeline::new(cfg);
        assert_eq!(pipeline.config().max_text_length, 10);
        assert!(pipeline.process(&NotesRequest::text(NOTES)).is_err());
    }

    #[test]
    fn test_without_rules() {
        let pipeline = NotesPipeline::default().with_validator(ValidationEngine::new());
        let questions: Vec<String> = (0..8).map(|i| format!("q{i}")).collect();
        let result = pipeline
            .process(&NotesRequest::text(NOTES).with_questions(questions))
            .unwrap();
        assert_eq!(result.answers.len(), 8);
    }
}
