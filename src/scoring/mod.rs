//! Sentence scoring
//!
//! Term-frequency table plus per-sentence average term weight.

pub mod frequency;

pub use frequency::{FrequencyScorer, FrequencyTable, ScorerConfig};
