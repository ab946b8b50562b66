//! Top-K sentence selection for summarization
//!
//! Keeps the highest-scoring sentences and returns them in document order.

use std::cmp::Ordering;

use crate::types::{NotesConfig, ScoredSentence};

/// Configuration for sentence selection
#[derive(Debug, Clone)]
pub struct SelectorConfig {
    /// Fraction of all sentences to keep (rounded up)
    pub ratio: f64,
    /// Minimum number of sentences to keep
    pub min_sentences: usize,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            ratio: 0.3,
            min_sentences: 3,
        }
    }
}

impl From<&NotesConfig> for SelectorConfig {
    fn from(cfg: &NotesConfig) -> Self {
        Self {
            ratio: cfg.summary_ratio,
            min_sentences: cfg.min_summary_sentences,
        }
    }
}

/// Score-based sentence selector
#[derive(Debug, Clone, Default)]
pub struct SentenceSelector {
    config: SelectorConfig,
}

impl SentenceSelector {
    /// Create a new selector with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom config
    pub fn with_config(config: SelectorConfig) -> Self {
        Self { config }
    }

    /// Set the kept fraction
    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.config.ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// Set the minimum number of kept sentences
    pub fn with_min_sentences(mut self, n: usize) -> Self {
        self.config.min_sentences = n;
        self
    }

    /// K = max(min_sentences, ceil(ratio * total)), never more than `total`.
    pub fn target_count(&self, total: usize) -> usize {
        let by_ratio = (self.config.ratio * total as f64).ceil() as usize;
        by_ratio.max(self.config.min_sentences).min(total)
    }

    /// Select the top-K sentences by score, returned in document order.
    ///
    /// The ranking sort is stable, so among equal scores the earlier sentence
    /// wins.
    pub fn select(&self, scored: &[ScoredSentence]) -> Vec<ScoredSentence> {
        let k = self.target_count(scored.len());

        let mut ranked: Vec<&ScoredSentence> = scored.iter().collect();
        ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        ranked.truncate(k);

        let mut selected: Vec<ScoredSentence> = ranked.into_iter().cloned().collect();

        // Sort by document order
        selected.sort_by_key(|s| s.sentence.index);
        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Sentence;

    fn make_scored(scores: &[f64]) -> Vec<ScoredSentence> {
        scores
            .iter()
            .enumerate()
            .map(|(i, &score)| ScoredSentence {
                sentence: Sentence::new(format!("Sentence {i}"), i, 0, 0),
                score,
            })
            .collect()
    }

    fn indices(selected: &[ScoredSentence]) -> Vec<usize> {
        selected.iter().map(|s| s.sentence.index).collect()
    }

    #[test]
    fn test_target_count() {
        let selector = SentenceSelector::new();
        assert_eq!(selector.target_count(0), 0);
        assert_eq!(selector.target_count(2), 2);
        assert_eq!(selector.target_count(3), 3);
        assert_eq!(selector.target_count(10), 3);
        assert_eq!(selector.target_count(11), 4);
        assert_eq!(selector.target_count(20), 6);
        assert_eq!(selector.target_count(100), 30);
    }

    #[test]
    fn test_selects_highest_scores() {
        let scored = make_scored(&[0.1, 0.9, 0.2, 0.8, 0.3, 0.7, 0.0, 0.0, 0.0, 0.0]);
        let selected = SentenceSelector::new().select(&scored);
        assert_eq!(indices(&selected), vec![1, 3, 5]);
    }

    #[test]
    fn test_document_order() {
        let scored = make_scored(&[0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0, 1.1]);
        let selected = SentenceSelector::new().select(&scored);

        // Highest four are the last four, returned ascending
        assert_eq!(indices(&selected), vec![7, 8, 9, 10]);
        for i in 1..selected.len() {
            assert!(selected[i].sentence.index > selected[i - 1].sentence.index);
        }
    }

    #[test]
    fn test_ties_prefer_earlier_sentences() {
        let scored = make_scored(&[1.0; 10]);
        let selected = SentenceSelector::new().select(&scored);
        assert_eq!(indices(&selected), vec![0, 1, 2]);
    }

    #[test]
    fn test_fewer_than_minimum_keeps_all() {
        let scored = make_scored(&[0.5, 0.1]);
        let selected = SentenceSelector::new().select(&scored);
        assert_eq!(indices(&selected), vec![0, 1]);
    }

    #[test]
    fn test_empty_input() {
        let selected = SentenceSelector::new().select(&[]);
        assert!(selected.is_empty());
    }

    #[test]
    fn test_custom_ratio_and_minimum() {
        let selector = SentenceSelector::new().with_ratio(0.5).with_min_sentences(1);
        assert_eq!(selector.target_count(3), 2);
        assert_eq!(selector.target_count(1), 1);

        let selector = SentenceSelector::new().with_ratio(2.0);
        assert_eq!(selector.target_count(7), 7);
    }
}
