//! Stopword filtering
//!
//! Optional extra noise filter for the frequency table, backed by the
//! `stop-words` crate. The length cutoff already drops most function words;
//! a stopword list also removes the longer ones ("about", "which", "their").

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// A set of lowercase stopwords.
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    stopwords: FxHashSet<String>,
}

impl StopwordFilter {
    /// Load the stopword list for `language` (ISO code or English name).
    ///
    /// Unknown languages fall back to English.
    pub fn new(language: &str) -> Self {
        let lang = Self::language(language).unwrap_or_else(|| {
            tracing::warn!(language, "unknown stopword language, using English");
            LANGUAGE::English
        });
        Self {
            stopwords: get(lang).iter().map(|s| s.to_lowercase()).collect(),
        }
    }

    /// A filter that matches nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a filter from a custom word list.
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Check a term. Terms are expected lowercase already.
    pub fn is_stopword(&self, term: &str) -> bool {
        self.stopwords.contains(term)
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    /// Map an ISO code or English language name to a stopword list.
    pub(crate) fn language(code: &str) -> Option<LANGUAGE> {
        let lang = match code.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            "hu" | "hungarian" => LANGUAGE::Hungarian,
            "tr" | "turkish" => LANGUAGE::Turkish,
            "pl" | "polish" => LANGUAGE::Polish,
            _ => return None,
        };
        Some(lang)
    }
}
