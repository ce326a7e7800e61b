//! Heuristic English syllable estimation.
//!
//! Counts vowel groups rather than looking words up in a pronunciation
//! dictionary. The result is crude but deterministic: the same string
//! always yields the same count.

#[inline(always)]
const fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Estimates the number of syllables in `word`.
///
/// 1. Lowercase and drop a trailing `es` or `ed`.
/// 2. Count a nucleus for a leading vowel and for every vowel that follows
///    a non-vowel.
/// 3. Subtract one for a trailing silent `e`.
/// 4. Clamp to at least 1.
///
/// Returns 0 when nothing is left to count: empty or whitespace-only
/// input, or a word that is exactly `es`/`ed`.
///
/// # Example
///
/// ```
/// use lexmetric_core::analyzer::syllable::estimate_syllables;
///
/// assert_eq!(estimate_syllables("the"), 1);
/// assert_eq!(estimate_syllables("beautiful"), 3);
/// assert_eq!(estimate_syllables(""), 0);
/// ```
pub fn estimate_syllables(word: &str) -> u32 {
    let lowered = word.trim().to_lowercase();

    let stem = lowered
        .strip_suffix("es")
        .or_else(|| lowered.strip_suffix("ed"))
        .unwrap_or(&lowered);

    let mut chars = stem.chars();
    let Some(first) = chars.next() else {
        return 0;
    };

    let mut count: i64 = i64::from(is_vowel(first));
    let mut prev_vowel = is_vowel(first);

    for c in chars {
        let vowel = is_vowel(c);
        if vowel && !prev_vowel {
            count += 1;
        }
        prev_vowel = vowel;
    }

    if stem.ends_with('e') {
        count -= 1;
    }

    count.max(1) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_zero() {
        assert_eq!(estimate_syllables(""), 0);
        assert_eq!(estimate_syllables("   "), 0);
    }

    #[test]
    fn bare_suffix_is_zero() {
        assert_eq!(estimate_syllables("ed"), 0);
        assert_eq!(estimate_syllables("ES"), 0);
    }

    #[test]
    fn single_syllable_words() {
        assert_eq!(estimate_syllables("the"), 1);
        assert_eq!(estimate_syllables("cat"), 1);
        assert_eq!(estimate_syllables("a"), 1);
        assert_eq!(estimate_syllables("rhythm"), 1);
    }

    #[test]
    fn silent_e_removes_final_nucleus() {
        // s-[y]-ll-[a]-bl-[e]: three groups, the trailing e is dropped.
        assert_eq!(estimate_syllables("syllable"), 2);
        assert_eq!(estimate_syllables("make"), 1);
    }

    #[test]
    fn consecutive_vowels_count_once() {
        assert_eq!(estimate_syllables("boat"), 1);
        assert_eq!(estimate_syllables("queue"), 1);
        assert_eq!(estimate_syllables("beautiful"), 3);
    }

    #[test]
    fn es_and_ed_suffixes_stripped() {
        // "wanted" -> "want"
        assert_eq!(estimate_syllables("wanted"), 1);
        // "boxes" -> "box"
        assert_eq!(estimate_syllables("boxes"), 1);
        // "created" -> "creat": [c]-[rea]-[t]
        assert_eq!(estimate_syllables("created"), 1);
    }

    #[test]
    fn silent_e_applies_after_suffix_strip() {
        // "agreed" -> "agre", whose trailing e is then dropped.
        assert_eq!(estimate_syllables("agreed"), 1);
    }

    #[test]
    fn leading_vowel_counts() {
        assert_eq!(estimate_syllables("orange"), 2);
        assert_eq!(estimate_syllables("idea"), 2);
        assert_eq!(estimate_syllables("education"), 4);
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(estimate_syllables("WONDERFUL"), estimate_syllables("wonderful"));
        assert_eq!(estimate_syllables("Wanted"), 1);
    }

    #[test]
    fn no_vowels_clamps_to_one() {
        assert_eq!(estimate_syllables("123"), 1);
        assert_eq!(estimate_syllables("brr"), 1);
    }

    #[test]
    fn complex_words() {
        assert!(estimate_syllables("wonderful") > 2);
        assert!(estimate_syllables("international") > 2);
        assert!(estimate_syllables("great") <= 2);
    }

    #[test]
    fn deterministic() {
        for word in ["analysis", "readability", "x", "queueing"] {
            assert_eq!(estimate_syllables(word), estimate_syllables(word));
        }
    }
}
