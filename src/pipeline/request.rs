//! Request and result types for the notes pipeline.
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "source": { "text": "Cats are great. Dogs are loyal." },
//!   "questions": ["cats?", "what about dogs"]
//! }
//! ```
//!
//! A file upload is described by its name only:
//! `{ "source": { "file": { "name": "lecture.pdf" } } }`.

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::types::QaPair;

/// Where the note content comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteSource {
    /// Typed text
    Text(String),
    /// An uploaded file. Its contents are not read; only the name is used.
    File { name: String },
}

impl NoteSource {
    /// Text the engine will analyze.
    pub fn content(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::File { name } => format!("Content from file: {name}"),
        }
    }
}

/// One summarize-and-answer request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotesRequest {
    pub source: NoteSource,
    #[serde(default)]
    pub questions: Vec<String>,
}

impl NotesRequest {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            source: NoteSource::Text(text.into()),
            questions: Vec::new(),
        }
    }

    pub fn file(name: impl Into<String>) -> Self {
        Self {
            source: NoteSource::File { name: name.into() },
            questions: Vec::new(),
        }
    }

    pub fn with_questions<I, S>(mut self, questions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.questions = questions.into_iter().map(Into::into).collect();
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Summary plus one answer per non-blank question, in question order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotesResult {
    pub summary: String,
    pub answers: Vec<QaPair>,
}
