//! Whitespace tokenization
//!
//! Terms are the lowercase, whitespace-delimited tokens of a sentence.
//! Punctuation other than sentence terminators stays attached to its word
//! ("results," and "results" are different terms).

/// Lowercase `text` and split it on whitespace.
pub fn terms(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Length of a term in characters (not bytes).
#[inline]
pub fn term_len(term: &str) -> usize {
    term.chars().count()
}

/// First whitespace-delimited token of `text`, lowercased.
pub fn first_term(text: &str) -> Option<String> {
    text.split_whitespace().next().map(str::to_lowercase)
}
