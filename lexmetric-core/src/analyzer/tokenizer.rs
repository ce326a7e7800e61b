//! Word tokenizer.
//!
//! Second stage of the pipeline: takes text produced by
//! [`TextCleaner`](super::cleaner::TextCleaner) and splits it into word
//! tokens.
//!
//! ## The Input Contract
//!
//! Cleaned text only contains word characters, whitespace and apostrophes.
//! That makes word boundaries simple:
//!
//! - Any run of Unicode whitespace separates tokens
//! - Apostrophes stay inside their token, so `don't` is one token
//! - A token made only of apostrophes (a stray quote) is dropped
//!
//! Tokens are slices of the input; nothing is allocated per token.
//!
//! ```
//! use lexmetric_core::analyzer::tokenizer::WordTokenizer;
//!
//! let mut words = Vec::new();
//! WordTokenizer.tokenize("don't  stop ' me", |t| words.push(t.text));
//! assert_eq!(words, ["don't", "stop", "me"]);
//! ```

/// A word-like unit of cleaned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'t> {
    /// The token as it appears in the cleaned text.
    pub text: &'t str,
    /// Zero-based index among emitted tokens.
    pub position: usize,
}

impl<'t> Token<'t> {
    /// True when every character is alphabetic.
    ///
    /// Digits, underscores and apostrophes make a token non-alphabetic, so
    /// `"2024"`, `"snake_case"` and `"don't"` all return `false`.
    #[inline]
    pub fn is_alphabetic(&self) -> bool {
        !self.text.is_empty() && self.text.chars().all(char::is_alphabetic)
    }

    /// Length in Unicode scalar values.
    #[inline]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Splits cleaned text into [`Token`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    /// Emits tokens left to right.
    #[allow(clippy::needless_lifetimes)]
    pub fn tokenize<'t, F>(&self, cleaned: &'t str, mut emit: F)
    where
        F: FnMut(Token<'t>),
    {
        let mut position = 0usize;

        for text in cleaned.split_whitespace() {
            if text.bytes().all(|b| b == b'\'') {
                continue;
            }
            emit(Token { text, position });
            position += 1;
        }
    }

    /// Collects all tokens.
    pub fn tokens<'t>(&self, cleaned: &'t str) -> Vec<Token<'t>> {
        let mut out = Vec::new();
        self.tokenize(cleaned, |t| out.push(t));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str) -> Vec<&str> {
        WordTokenizer.tokens(input).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn splits_on_whitespace_runs() {
        assert_eq!(texts("hello   world\tfoo\nbar"), ["hello", "world", "foo", "bar"]);
    }

    #[test]
    fn leading_and_trailing_whitespace_ignored() {
        assert_eq!(texts("  hello  "), ["hello"]);
    }

    #[test]
    fn contractions_are_single_tokens() {
        assert_eq!(texts("i can't won't"), ["i", "can't", "won't"]);
    }

    #[test]
    fn apostrophe_only_tokens_dropped() {
        assert_eq!(texts("' '' hello '''"), ["hello"]);
    }

    #[test]
    fn positions_are_sequential_after_drops() {
        let tokens = WordTokenizer.tokens("a ' b c");
        let positions: Vec<usize> = tokens.iter().map(|t| t.position).collect();
        assert_eq!(positions, [0, 1, 2]);
    }

    #[test]
    fn empty_emits_nothing() {
        assert!(WordTokenizer.tokens("").is_empty());
        assert!(WordTokenizer.tokens(" \n ").is_empty());
    }

    #[test]
    fn alphabetic_classification() {
        let tokens = WordTokenizer.tokens("hello 2024 snake_case don't café x1");
        let flags: Vec<bool> = tokens.iter().map(Token::is_alphabetic).collect();
        assert_eq!(flags, [true, false, false, false, true, false]);
    }

    #[test]
    fn char_len_counts_scalars() {
        let tokens = WordTokenizer.tokens("café hello");
        assert_eq!(tokens[0].char_len(), 4);
        assert_eq!(tokens[0].text.len(), 5);
        assert_eq!(tokens[1].char_len(), 5);
    }

    #[test]
    fn tokens_are_slices_of_input() {
        let input = String::from("hello world");
        let base = input.as_ptr() as usize;
        let end = base + input.len();

        WordTokenizer.tokenize(&input, |t| {
            let ptr = t.text.as_ptr() as usize;
            assert!(ptr >= base && ptr < end);
        });
    }

    #[test]
    fn tokenizer_is_reusable() {
        let mut n = 0usize;
        WordTokenizer.tokenize("hello world", |_| n += 1);
        assert_eq!(n, 2);

        n = 0;
        WordTokenizer.tokenize("one two three", |_| n += 1);
        assert_eq!(n, 3);
    }
}
