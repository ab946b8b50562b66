//! Plain-text export of a [`NotesResult`].
//!
//! Produces the document a front end offers as a download: the summary, a
//! block per question, and a "Generated on" footer. Writing it to disk and
//! choosing a file name are left to the caller.

use super::request::NotesResult;
use crate::types::QaPair;

const RULE_WIDTH: usize = 30;

fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

fn qa_block(qa: &QaPair) -> String {
    format!(
        "QUESTION: {}\n\nANALYSIS:\n{}\n\n{}\n",
        qa.question,
        qa.answer,
        rule()
    )
}

/// Render the export document. `generated_on` is printed verbatim in the
/// footer (format the timestamp however the caller likes).
pub fn render_export(result: &NotesResult, generated_on: &str) -> String {
    let rule = rule();
    let answers: Vec<String> = result.answers.iter().map(qa_block).collect();

    format!(
        "COMPREHENSIVE SUMMARY AND ANALYSIS\n\
         {rule}\n\
         \n\
         {summary}\n\
         \n\
         {rule}\n\
         \n\
         DETAILED Q&A ANALYSIS\n\
         {rule}\n\
         \n\
         {answers}\n\
         \n\
         Generated on: {generated_on}\n",
        summary = result.summary,
        answers = answers.join("\n"),
    )
}
