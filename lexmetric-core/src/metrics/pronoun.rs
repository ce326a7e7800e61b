//! Personal pronoun counting.

use regex::Regex;

const PRONOUN_PATTERN: &str = r"(?i)\b(?:i|we|my|ours|us)\b";

/// Counts whole-word, case-insensitive matches of `i`, `we`, `my`, `ours`
/// and `us`.
///
/// A match spelled `us` in any casing other than all-lowercase is not
/// counted, so the country abbreviation "US" is skipped when the text
/// still carries its original case. On lowercased text the rule never
/// fires.
#[derive(Debug, Clone)]
pub struct PronounCounter {
    pattern: Regex,
}

impl Default for PronounCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl PronounCounter {
    /// Creates a counter.
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(PRONOUN_PATTERN).expect("pronoun pattern is a valid regex"),
        }
    }

    /// Number of counted pronouns in `text`.
    pub fn count(&self, text: &str) -> usize {
        self.pattern
            .find_iter(text)
            .filter(|m| {
                let word = m.as_str();
                word.to_lowercase() != "us" || is_lower(word)
            })
            .count()
    }
}

/// At least one cased character, and no uppercase ones.
fn is_lower(word: &str) -> bool {
    word.chars().any(char::is_lowercase) && !word.chars().any(char::is_uppercase)
}
