//! Sentence segmentation
//!
//! Splits raw text on runs of sentence terminators (`.`, `!`, `?`). A run of
//! several terminators ("Really?!", "Wait...") counts as a single boundary.
//! Pieces are trimmed and empty pieces are dropped, so every [`Sentence`]
//! has non-empty text.

use crate::types::Sentence;

/// Returns `true` for characters that end a sentence.
#[inline]
pub fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Split `text` into trimmed, non-empty sentences in source order.
///
/// Length limits are the caller's responsibility; this never fails.
pub fn segment(text: &str) -> Vec<Sentence> {
    let mut sentences = Vec::new();
    let mut piece_start = 0;

    for (i, c) in text.char_indices() {
        if is_terminator(c) {
            push_piece(text, piece_start, i, &mut sentences);
            piece_start = i + c.len_utf8();
        }
    }
    push_piece(text, piece_start, text.len(), &mut sentences);

    sentences
}

fn push_piece(text: &str, start: usize, end: usize, out: &mut Vec<Sentence>) {
    let raw = &text[start..end];
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return;
    }

    let lead = raw.len() - raw.trim_start().len();
    let begin = start + lead;
    out.push(Sentence::new(
        trimmed,
        out.len(),
        begin,
        begin + trimmed.len(),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(sentences: &[Sentence]) -> Vec<&str> {
        sentences.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_basic_split() {
        let sentences = segment("Cats are great. Dogs are loyal. Cats sleep a lot.");
        assert_eq!(
            texts(&sentences),
            vec!["Cats are great", "Dogs are loyal", "Cats sleep a lot"]
        );
    }

    #[test]
    fn test_terminator_runs_are_one_boundary() {
        let sentences = segment("Wait... What?! Yes!!! ok");
        assert_eq!(texts(&sentences), vec!["Wait", "What", "Yes", "ok"]);
    }

    #[test]
    fn test_indices_follow_source_order() {
        let sentences = segment(". . First. ! Second? Third");
        assert_eq!(texts(&sentences), vec!["First", "Second", "Third"]);
        for (i, s) in sentences.iter().enumerate() {
            assert_eq!(s.index, i);
        }
    }

    #[test]
    fn test_offsets_point_at_trimmed_text() {
        let text = "  Hello there.   Général Kenobi!  ";
        for s in segment(text) {
            assert_eq!(&text[s.start..s.end], s.text);
        }
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(segment("").is_empty());
        assert!(segment("   \n\t ").is_empty());
        assert!(segment("...!?!").is_empty());
    }

    #[test]
    fn test_no_terminator() {
        let sentences = segment("just one fragment without an ending");
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].text, "just one fragment without an ending");
    }

    #[test]
    fn test_newlines_do_not_split() {
        let sentences = segment("line one\nline two. next");
        assert_eq!(texts(&sentences), vec!["line one\nline two", "next"]);
    }
}
