//! Sentence segmentation.
//!
//! A naive splitter: every `.`, `!` and `?` ends a sentence. Abbreviations,
//! decimals and ellipses are not special-cased, so `"Dr. No"` is two
//! sentences and `"..."` contributes none (its fragments are empty).
//!
//! Sentences are emitted as trimmed slices of the input; empty fragments
//! are skipped.

use memchr::memchr3_iter;

/// Splits raw text into sentences.
///
/// ```
/// use lexmetric_core::analyzer::segmenter::SentenceSegmenter;
///
/// let mut sentences = Vec::new();
/// SentenceSegmenter.segment("One. Two!  Three?", |s| sentences.push(s));
/// assert_eq!(sentences, ["One", "Two", "Three"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceSegmenter;

impl SentenceSegmenter {
    /// Emits each non-empty trimmed sentence, left to right.
    #[allow(clippy::needless_lifetimes)]
    pub fn segment<'t, F>(&self, text: &'t str, mut emit: F)
    where
        F: FnMut(&'t str),
    {
        let mut start = 0usize;

        // Terminators are ASCII, so every split point is a char boundary.
        for i in memchr3_iter(b'.', b'!', b'?', text.as_bytes()) {
            let fragment = text[start..i].trim();
            if !fragment.is_empty() {
                emit(fragment);
            }
            start = i + 1;
        }

        let tail = text[start..].trim();
        if !tail.is_empty() {
            emit(tail);
        }
    }

    /// Number of non-empty sentences.
    pub fn count(&self, text: &str) -> usize {
        let mut n = 0usize;
        self.segment(text, |_| n += 1);
        n
    }
}
