//! # note-digest
//!
//! Extractive summaries and keyword answers for free-text notes.
//!
//! The engine is a handful of pure functions over plain strings:
//!
//! - [`nlp::segmenter`] splits text into sentences on runs of `.`, `!`, `?`
//! - [`scoring::frequency`] scores each sentence by its average term frequency
//! - [`summarizer`] keeps the top sentences and renders them in source order
//! - [`answer`] pulls out the sentences mentioning a question's first keyword
//!
//! [`pipeline::NotesPipeline`] ties them together the way a note-taking front
//! end uses them: one summary plus one answer per non-blank question.
//!
//! ```
//! let summary = note_digest::summarize("Cats are great. Dogs are loyal. Cats sleep a lot.").unwrap();
//! assert!(summary.starts_with("Key Points from Your Text:"));
//! ```

pub mod answer;
pub mod errors;
pub mod nlp;
pub mod pipeline;
pub mod scoring;
pub mod summarizer;
pub mod types;

pub use answer::{Answerer, FALLBACK_ANSWER};
pub use errors::{ErrorCode, NotesError, Result};
pub use pipeline::{NoteSource, NotesPipeline, NotesRequest, NotesResult};
pub use summarizer::{Summarizer, Summary};
pub use types::{NotesConfig, QaPair, ScoredSentence, Sentence};

/// Summarize `text` with the default configuration and render the bullet list.
pub fn summarize(text: &str) -> Result<String> {
    Summarizer::new().summarize(text).map(|s| s.render())
}

/// Answer `question` from `context`. Never fails; see [`Answerer::answer`].
pub fn answer(question: &str, context: &str) -> String {
    Answerer::new().answer(question, context)
}
