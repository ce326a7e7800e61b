//! Pre-tokenization cleanup.
//!
//! Raw document text goes through three steps before it is split into words:
//!
//! 1. **URL stripping**: substrings starting with `http` or `www` up to the
//!    next whitespace are removed.
//! 2. **Character filtering**: everything except word characters (Unicode
//!    alphanumerics and `_`), whitespace and apostrophes is dropped.
//! 3. **Lowercasing**: full Unicode lowercasing of the filtered text.
//!
//! Whitespace is kept as-is; the tokenizer splits on any run of it.
//!
//! ```
//! use lexmetric_core::analyzer::cleaner::TextCleaner;
//!
//! let cleaner = TextCleaner::new();
//! assert_eq!(cleaner.clean("Visit https://x.io now, OK?"), "visit  now ok");
//! ```

use std::borrow::Cow;

use regex::Regex;

const URL_PATTERN: &str = r"http\S+|www\S+|https\S+";

#[inline(always)]
fn is_kept(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '\'' || c.is_whitespace()
}

/// Strips URLs and punctuation from raw text.
///
/// Holds the compiled URL pattern, so build one and reuse it across
/// documents. `TextCleaner` is `Send + Sync`.
#[derive(Debug, Clone)]
pub struct TextCleaner {
    urls: Regex,
}

impl Default for TextCleaner {
    fn default() -> Self {
        Self::new()
    }
}

impl TextCleaner {
    /// Creates a cleaner.
    pub fn new() -> Self {
        Self {
            urls: Regex::new(URL_PATTERN).expect("URL pattern is a valid regex"),
        }
    }

    /// Removes URL-like substrings. Borrows the input when there are none.
    #[inline]
    pub fn strip_urls<'a>(&self, input: &'a str) -> Cow<'a, str> {
        self.urls.replace_all(input, "")
    }

    /// Drops every character that is not a word character, whitespace or
    /// apostrophe, writing the survivors into `out`.
    ///
    /// Clears `out` first and reuses its capacity.
    pub fn filter_into(&self, input: &str, out: &mut String) {
        out.clear();
        out.reserve(input.len());

        let bytes = input.as_bytes();
        let mut i = 0usize;

        // ASCII run: byte-wise test, no char decoding.
        while i < bytes.len() && bytes[i] < 128 {
            let c = bytes[i] as char;
            if is_kept(c) {
                out.push(c);
            }
            i += 1;
        }

        out.extend(input[i..].chars().filter(|&c| is_kept(c)));
    }

    /// URL stripping and character filtering, without lowercasing.
    pub fn clean_preserving_case(&self, input: &str) -> String {
        let stripped = self.strip_urls(input);
        let mut out = String::with_capacity(stripped.len());
        self.filter_into(&stripped, &mut out);
        out
    }

    /// Full cleanup: URL stripping, character filtering, lowercasing.
    pub fn clean(&self, input: &str) -> String {
        lowercase(self.clean_preserving_case(input))
    }
}

/// Lowercases in place when the text is ASCII, otherwise falls back to
/// full Unicode lowercasing (which handles context-dependent mappings such
/// as final sigma).
#[inline]
pub fn lowercase(mut text: String) -> String {
    if text.is_ascii() {
        text.make_ascii_lowercase();
        text
    } else {
        text.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean(input: &str) -> String {
        TextCleaner::new().clean(input)
    }

    #[test]
    fn lowercases() {
        assert_eq!(clean("HELLO World"), "hello world");
    }

    #[test]
    fn strips_punctuation() {
        assert_eq!(clean("Hello, world! (really?)"), "hello world really");
        assert_eq!(clean("a-b"), "ab");
        assert_eq!(clean("$100.50"), "10050");
    }

    #[test]
    fn keeps_apostrophes_and_underscores() {
        assert_eq!(clean("Don't snake_case"), "don't snake_case");
    }

    #[test]
    fn keeps_whitespace_verbatim() {
        assert_eq!(clean("a\tb\nc  d"), "a\tb\nc  d");
    }

    #[test]
    fn strips_http_urls() {
        assert_eq!(clean("see http://example.com/x?y=1 here"), "see  here");
        assert_eq!(clean("see https://example.com here"), "see  here");
    }

    #[test]
    fn strips_www_urls() {
        assert_eq!(clean("go to www.example.com."), "go to ");
    }

    #[test]
    fn bare_http_is_not_a_url() {
        // The pattern needs at least one non-space character after "http".
        assert_eq!(clean("http is a protocol"), "http is a protocol");
    }

    #[test]
    fn url_inside_word_is_stripped_from_prefix() {
        assert_eq!(clean("xhttpfoo bar"), "x bar");
    }

    #[test]
    fn strip_urls_borrows_without_match() {
        let cleaner = TextCleaner::new();
        assert!(matches!(cleaner.strip_urls("plain text"), Cow::Borrowed(_)));
        assert!(matches!(cleaner.strip_urls("a www.b.c"), Cow::Owned(_)));
    }

    #[test]
    fn unicode_letters_kept() {
        assert_eq!(clean("Café Müller"), "café müller");
        assert_eq!(clean("ПРИВЕТ, мир!"), "привет мир");
    }

    #[test]
    fn unicode_punctuation_dropped() {
        assert_eq!(clean("“quoted” — dash…"), "quoted  dash");
    }

    #[test]
    fn preserving_case() {
        let cleaner = TextCleaner::new();
        assert_eq!(cleaner.clean_preserving_case("The US, and us."), "The US and us");
    }

    #[test]
    fn filter_into_reuses_buffer() {
        let cleaner = TextCleaner::new();
        let mut buf = String::with_capacity(64);
        let cap = buf.capacity();

        cleaner.filter_into("Hello!", &mut buf);
        assert_eq!(buf, "Hello");
        cleaner.filter_into("World?", &mut buf);
        assert_eq!(buf, "World");
        assert_eq!(buf.capacity(), cap);
    }

    #[test]
    fn empty_input() {
        assert_eq!(clean(""), "");
    }

    #[test]
    fn only_symbols() {
        assert_eq!(clean("!@#$%^&*()"), "");
    }

    #[test]
    fn lowercase_ascii_and_unicode() {
        assert_eq!(lowercase("ABC".to_string()), "abc");
        assert_eq!(lowercase("ÀBÇ".to_string()), "àbç");
    }
}
