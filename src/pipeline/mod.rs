//! Request pipeline around the engine.
//!
//! - [`request`]: request/result types (JSON-serializable)
//! - [`validation`]: rule-based request validation
//! - [`runner`]: [`NotesPipeline`], summary and answers for one request
//! - [`export`]: plain-text export document

pub mod export;
pub mod request;
pub mod runner;
pub mod validation;

pub use export::render_export;
pub use request::{NoteSource, NotesRequest, NotesResult};
pub use runner::NotesPipeline;
pub use validation::{ValidationEngine, ValidationReport};
