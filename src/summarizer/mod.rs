//! Summarization components
//!
//! Provides extractive summarization: segment, score by word frequency, keep
//! the top sentences, and render them as bullets in source order.

pub mod selector;

use serde::Serialize;

use crate::errors::{NotesError, Result};
use crate::nlp::segmenter::segment;
use crate::scoring::frequency::{FrequencyScorer, ScorerConfig};
use crate::types::{NotesConfig, ScoredSentence, MAX_TEXT_LENGTH};

use selector::{SelectorConfig, SentenceSelector};

/// Heading line of every rendered summary.
pub const SUMMARY_HEADER: &str = "Key Points from Your Text:";

/// Bullet prefix for each key point.
pub const BULLET: &str = "• ";

/// Selected sentences of one text, in source order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Summary {
    pub points: Vec<ScoredSentence>,
    /// Number of sentences in the source text
    pub total_sentences: usize,
}

impl Summary {
    /// Sentence texts of the key points.
    pub fn key_points(&self) -> impl Iterator<Item = &str> {
        self.points.iter().map(|p| p.sentence.text.trim())
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Header line followed by one bullet per key point.
    pub fn render(&self) -> String {
        let bullets: Vec<String> = self.key_points().map(|p| format!("{BULLET}{p}")).collect();
        format!("{SUMMARY_HEADER}\n{}", bullets.join("\n"))
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

/// Frequency-based extractive summarizer.
#[derive(Debug, Clone)]
pub struct Summarizer {
    max_text_length: usize,
    scorer: FrequencyScorer,
    selector: SentenceSelector,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Summarizer {
    /// Create a summarizer with the default limits
    pub fn new() -> Self {
        Self {
            max_text_length: MAX_TEXT_LENGTH,
            scorer: FrequencyScorer::new(),
            selector: SentenceSelector::new(),
        }
    }

    /// Create from the engine-wide config
    pub fn with_config(cfg: &NotesConfig) -> Self {
        Self {
            max_text_length: cfg.max_text_length,
            scorer: FrequencyScorer::with_config(ScorerConfig::from(cfg)),
            selector: SentenceSelector::with_config(SelectorConfig::from(cfg)),
        }
    }

    /// Set the maximum accepted input length, in characters
    pub fn with_max_text_length(mut self, max: usize) -> Self {
        self.max_text_length = max;
        self
    }

    /// Reject `text` if it has more than the configured number of characters.
    pub fn check_length(&self, text: &str) -> Result<()> {
        let length = text.chars().count();
        if length > self.max_text_length {
            return Err(NotesError::LengthExceeded {
                length,
                max: self.max_text_length,
            });
        }
        Ok(())
    }

    /// Summarize `text`.
    ///
    /// Fails with [`NotesError::LengthExceeded`] when `text` has more than the
    /// configured number of characters; nothing is computed in that case.
    pub fn summarize(&self, text: &str) -> Result<Summary> {
        self.check_length(text)?;

        let sentences = segment(text);
        let scored = self.scorer.score(&sentences);
        let points = self.selector.select(&scored);

        tracing::debug!(
            sentences = sentences.len(),
            selected = points.len(),
            "summarized text"
        );

        Ok(Summary {
            points,
            total_sentences: sentences.len(),
        })
    }
}
