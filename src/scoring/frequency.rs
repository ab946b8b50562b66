//! Word-frequency sentence scoring
//!
//! Two passes over the sentences of one text:
//!
//! 1. Count every term of at least `min_term_length` characters (and not a
//!    stopword, when a filter is set) into a [`FrequencyTable`].
//! 2. Score each sentence as the sum of its terms' counts divided by its
//!    total word count.
//!
//! Short words are absent from the table, so they add 0 to the sum but still
//! count in the denominator. Sentences full of short words score low.

use rustc_hash::FxHashMap;

use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::{term_len, terms};
use crate::types::{NotesConfig, ScoredSentence, Sentence};

/// Configuration for the frequency scorer
#[derive(Debug, Clone)]
pub struct ScorerConfig {
    /// Terms shorter than this (in characters) are not counted
    pub min_term_length: usize,
    /// Extra exclusion list applied when building the table
    pub stopwords: Option<StopwordFilter>,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            min_term_length: 4,
            stopwords: None,
        }
    }
}

impl From<&NotesConfig> for ScorerConfig {
    fn from(cfg: &NotesConfig) -> Self {
        Self {
            min_term_length: cfg.min_term_length,
            stopwords: cfg.stopword_language.as_deref().map(StopwordFilter::new),
        }
    }
}

/// Per-call term counts. Built fresh for every text and dropped afterwards.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: FxHashMap<String, usize>,
}

impl FrequencyTable {
    /// Count the qualifying terms of all `sentences`.
    pub fn build(sentences: &[Sentence], config: &ScorerConfig) -> Self {
        let mut counts: FxHashMap<String, usize> = FxHashMap::default();

        for sentence in sentences {
            for term in terms(&sentence.text) {
                if term_len(&term) < config.min_term_length {
                    continue;
                }
                if config
                    .stopwords
                    .as_ref()
                    .is_some_and(|f| f.is_stopword(&term))
                {
                    continue;
                }
                *counts.entry(term).or_insert(0) += 1;
            }
        }

        Self { counts }
    }

    /// Occurrences of `term` (lowercase); 0 if it was never counted.
    pub fn frequency(&self, term: &str) -> usize {
        self.counts.get(term).copied().unwrap_or(0)
    }

    /// Number of distinct counted terms.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Scores sentences by average term frequency.
#[derive(Debug, Clone, Default)]
pub struct FrequencyScorer {
    config: ScorerConfig,
}

impl FrequencyScorer {
    /// Create a scorer with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom config
    pub fn with_config(config: ScorerConfig) -> Self {
        Self { config }
    }

    /// Set the minimum counted term length
    pub fn with_min_term_length(mut self, len: usize) -> Self {
        self.config.min_term_length = len;
        self
    }

    /// Exclude stopwords from the table
    pub fn with_stopwords(mut self, filter: StopwordFilter) -> Self {
        self.config.stopwords = Some(filter);
        self
    }

    /// Score every sentence; output order matches input order.
    pub fn score(&self, sentences: &[Sentence]) -> Vec<ScoredSentence> {
        let table = FrequencyTable::build(sentences, &self.config);

        sentences
            .iter()
            .map(|sentence| ScoredSentence {
                sentence: sentence.clone(),
                score: Self::sentence_score(&sentence.text, &table),
            })
            .collect()
    }

    /// Average table frequency over all words of `text`, short words included.
    pub fn sentence_score(text: &str, table: &FrequencyTable) -> f64 {
        let words = terms(text);
        if words.is_empty() {
            return 0.0;
        }
        let total: usize = words.iter().map(|w| table.frequency(w)).sum();
        total as f64 / words.len() as f64
    }
}
