//! Core types for the lexmetric readability and sentiment engine.
//!
//! This crate holds the values that cross the boundary between the engine
//! and whatever feeds it documents or consumes its results:
//!
//! - **Inputs**: [`Document`] and the [`AnalyzerConfig`] knobs
//! - **Outputs**: [`MetricRecord`] (one per document) and [`TextStats`]
//! - **Failures**: [`LexiconError`] and [`ConfigError`]
//!
//! Nothing here performs analysis; keeping the types separate lets the
//! table writer, loaders and tests share them without depending on the
//! engine internals.

#![warn(missing_docs)]

use core::fmt;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default ε added to denominators of the polarity and subjectivity scores.
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Default syllable count a word must exceed to be considered complex.
pub const DEFAULT_COMPLEX_SYLLABLE_THRESHOLD: u32 = 2;

/// A fetched document ready for analysis.
///
/// Created by the fetch/storage layer; the engine only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Identifier echoed into the output record (`URL_ID`).
    pub url_id: String,
    /// Source reference echoed into the output record (`URL`).
    pub url: String,
    /// Raw text body.
    pub text: String,
}

impl Document {
    /// Creates a new document.
    pub fn new(url_id: impl Into<String>, url: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            url_id: url_id.into(),
            url: url.into(),
            text: text.into(),
        }
    }
}

/// Per-document readability and sentiment metrics.
///
/// Field order is the column order of the output table. Serialized names
/// are the table headers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    /// Document identifier.
    #[serde(rename = "URL_ID")]
    pub url_id: String,
    /// Document source reference.
    #[serde(rename = "URL")]
    pub url: String,
    /// Number of non-stopword tokens found in the positive lexicon.
    #[serde(rename = "POSITIVE SCORE")]
    pub positive_score: usize,
    /// Number of non-stopword tokens found in the negative lexicon.
    #[serde(rename = "NEGATIVE SCORE")]
    pub negative_score: usize,
    /// `(pos - neg) / (pos + neg + ε)`, in `[-1, 1]`.
    #[serde(rename = "POLARITY SCORE")]
    pub polarity_score: f64,
    /// `(pos + neg) / (filtered words + ε)`.
    #[serde(rename = "SUBJECTIVITY SCORE")]
    pub subjectivity_score: f64,
    /// Raw token count divided by sentence count.
    #[serde(rename = "AVG SENTENCE LENGTH")]
    pub avg_sentence_length: f64,
    /// `100 * complex words / word count`.
    #[serde(rename = "PERCENTAGE OF COMPLEX WORDS")]
    pub percentage_complex_words: f64,
    /// `0.4 * (avg sentence length + percentage of complex words)`.
    #[serde(rename = "FOG INDEX")]
    pub fog_index: f64,
    /// Same value as `avg_sentence_length`, reported under its own header.
    #[serde(rename = "AVG NUMBER OF WORDS PER SENTENCE")]
    pub avg_words_per_sentence: f64,
    /// Tokens whose syllable estimate exceeds the complexity threshold.
    #[serde(rename = "COMPLEX WORD COUNT")]
    pub complex_word_count: usize,
    /// Alphabetic-only tokens.
    #[serde(rename = "WORD COUNT")]
    pub word_count: usize,
    /// Mean syllable estimate over alphabetic tokens.
    #[serde(rename = "SYLLABLES PER WORD")]
    pub syllables_per_word: f64,
    /// Whole-word matches of `i`, `we`, `my`, `ours`, `us`.
    #[serde(rename = "PERSONAL PRONOUNS")]
    pub personal_pronoun_count: usize,
    /// Mean character length of alphabetic tokens.
    #[serde(rename = "AVG WORD LENGTH")]
    pub avg_word_length: f64,
}

impl MetricRecord {
    /// Table headers, in field order.
    pub const COLUMNS: [&'static str; 15] = [
        "URL_ID",
        "URL",
        "POSITIVE SCORE",
        "NEGATIVE SCORE",
        "POLARITY SCORE",
        "SUBJECTIVITY SCORE",
        "AVG SENTENCE LENGTH",
        "PERCENTAGE OF COMPLEX WORDS",
        "FOG INDEX",
        "AVG NUMBER OF WORDS PER SENTENCE",
        "COMPLEX WORD COUNT",
        "WORD COUNT",
        "SYLLABLES PER WORD",
        "PERSONAL PRONOUNS",
        "AVG WORD LENGTH",
    ];

    /// An all-zero record for the given document.
    pub fn zeroed(url_id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            url_id: url_id.into(),
            url: url.into(),
            positive_score: 0,
            negative_score: 0,
            polarity_score: 0.0,
            subjectivity_score: 0.0,
            avg_sentence_length: 0.0,
            percentage_complex_words: 0.0,
            fog_index: 0.0,
            avg_words_per_sentence: 0.0,
            complex_word_count: 0,
            word_count: 0,
            syllables_per_word: 0.0,
            personal_pronoun_count: 0,
            avg_word_length: 0.0,
        }
    }
}

impl fmt::Display for MetricRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} words={} pos={} neg={} polarity={:.3} fog={:.3}",
            self.url_id,
            self.word_count,
            self.positive_score,
            self.negative_score,
            self.polarity_score,
            self.fog_index
        )
    }
}

/// Intermediate counts produced while building a [`MetricRecord`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextStats {
    /// Non-empty fragments between `.`, `!` and `?`.
    pub sentence_count: usize,
    /// All tokens, alphabetic or not.
    pub raw_word_count: usize,
    /// Alphabetic tokens not in the stopword set.
    pub filtered_word_count: usize,
}

/// Which form of the cleaned text personal pronouns are matched against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PronounCase {
    /// Match on the lowercased text. "US" is counted as "us".
    #[default]
    Lowercased,
    /// Match on the text before lowercasing; "us" only counts when written
    /// in lowercase.
    PreserveCase,
}

/// Character encoding of a lexicon source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceEncoding {
    /// Strict UTF-8; invalid input is a decode error.
    Utf8,
    /// ISO-8859-1; every byte maps to the code point of the same value.
    Latin1,
}

impl SourceEncoding {
    /// Decodes raw bytes. Returns `None` only for invalid UTF-8.
    pub fn decode(self, bytes: &[u8]) -> Option<String> {
        match self {
            SourceEncoding::Utf8 => String::from_utf8(bytes.to_vec()).ok(),
            SourceEncoding::Latin1 => Some(bytes.iter().map(|&b| b as char).collect()),
        }
    }
}

/// Engine configuration.
///
/// All fields have defaults, so an empty TOML document is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// Added to the polarity and subjectivity denominators.
    pub epsilon: f64,
    /// A word is complex when its syllable estimate exceeds this.
    pub complex_syllable_threshold: u32,
    /// Text form used for personal pronoun matching.
    pub pronoun_case: PronounCase,
    /// Literal annotations removed from lexicon lines.
    pub annotations: Vec<String>,
    /// Encoding of stopword source files.
    pub stopword_encoding: SourceEncoding,
    /// Encoding of sentiment source files.
    pub sentiment_encoding: SourceEncoding,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            complex_syllable_threshold: DEFAULT_COMPLEX_SYLLABLE_THRESHOLD,
            pronoun_case: PronounCase::Lowercased,
            annotations: vec!["(Former Yug. Rep.)".to_string()],
            stopword_encoding: SourceEncoding::Latin1,
            sentiment_encoding: SourceEncoding::Utf8,
        }
    }
}

impl AnalyzerConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML or unknown keys, and
    /// `ConfigError::Invalid` when a value is out of range.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "epsilon must be a positive finite number, got {}",
                self.epsilon
            )));
        }
        if self.annotations.iter().any(|a| a.is_empty()) {
            return Err(ConfigError::Invalid(
                "annotations must not contain empty strings".to_string(),
            ));
        }
        if let Some(bad) = self.annotations.iter().find(|a| a.contains(['\n', '|'])) {
            return Err(ConfigError::Invalid(format!(
                "annotation {bad:?} contains a line or '|' separator and can never match"
            )));
        }
        Ok(())
    }
}

/// Errors raised while building lexicons.
///
/// Only `LexiconSourceNotFound` aborts a build; the others are collected
/// and the offending source is skipped.
#[derive(Debug, Error)]
pub enum LexiconError {
    /// The lexicon source directory does not exist.
    #[error("lexicon source not found: {}", path.display())]
    LexiconSourceNotFound {
        /// Directory that was looked up.
        path: PathBuf,
    },
    /// A sentiment source name contains neither "positive" nor "negative".
    #[error("unclassified lexicon source: {name}")]
    UnclassifiedLexiconSource {
        /// Source name.
        name: String,
    },
    /// A source file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// A source file is not valid in its configured encoding.
    #[error("failed to decode {}", path.display())]
    Decode {
        /// File that failed.
        path: PathBuf,
    },
}

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The config file is not valid TOML for [`AnalyzerConfig`].
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    /// A value is out of range.
    #[error("invalid config value: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.epsilon, 1e-6);
        assert_eq!(config.complex_syllable_threshold, 2);
        assert_eq!(config.pronoun_case, PronounCase::Lowercased);
        assert_eq!(config.annotations, vec!["(Former Yug. Rep.)".to_string()]);
        assert_eq!(config.stopword_encoding, SourceEncoding::Latin1);
        assert_eq!(config.sentiment_encoding, SourceEncoding::Utf8);
    }

    #[test]
    fn empty_toml_is_default() {
        let config = AnalyzerConfig::from_toml_str("").unwrap();
        assert_eq!(config, AnalyzerConfig::default());
    }

    #[test]
    fn toml_overrides() {
        let config = AnalyzerConfig::from_toml_str(
            r#"
            epsilon = 0.001
            complex_syllable_threshold = 3
            pronoun_case = "preserve_case"
            stopword_encoding = "utf8"
            "#,
        )
        .unwrap();

        assert_eq!(config.epsilon, 0.001);
        assert_eq!(config.complex_syllable_threshold, 3);
        assert_eq!(config.pronoun_case, PronounCase::PreserveCase);
        assert_eq!(config.stopword_encoding, SourceEncoding::Utf8);
        assert_eq!(config.sentiment_encoding, SourceEncoding::Utf8);
    }

    #[test]
    fn unknown_key_rejected() {
        let err = AnalyzerConfig::from_toml_str("epsilonn = 1.0").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn non_positive_epsilon_rejected() {
        for input in ["epsilon = 0.0", "epsilon = -1.0", "epsilon = nan"] {
            let err = AnalyzerConfig::from_toml_str(input).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)), "{input}");
        }
    }

    #[test]
    fn empty_annotation_rejected() {
        let err = AnalyzerConfig::from_toml_str(r#"annotations = [""]"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn separator_in_annotation_rejected() {
        for toml in [r#"annotations = ["a | b"]"#, r#"annotations = ["line\nbreak"]"#] {
            let err = AnalyzerConfig::from_toml_str(toml).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)), "{toml}");
        }
        assert!(AnalyzerConfig::from_toml_str(r#"annotations = ["(Former Yug. Rep.)"]"#).is_ok());
    }

    #[test]
    fn latin1_maps_bytes_to_code_points() {
        let decoded = SourceEncoding::Latin1.decode(&[b'c', b'a', b'f', 0xE9]).unwrap();
        assert_eq!(decoded, "café");
    }

    #[test]
    fn utf8_rejects_invalid_bytes() {
        assert!(SourceEncoding::Utf8.decode(&[0xFF, 0xFE]).is_none());
        assert_eq!(SourceEncoding::Utf8.decode("ok".as_bytes()).as_deref(), Some("ok"));
    }

    #[test]
    fn zeroed_record_echoes_ids() {
        let record = MetricRecord::zeroed("doc-1", "https://example.com/a");
        assert_eq!(record.url_id, "doc-1");
        assert_eq!(record.url, "https://example.com/a");
        assert_eq!(record.word_count, 0);
        assert_eq!(record.fog_index, 0.0);
    }

    #[test]
    fn record_display_summarizes_scores() {
        let mut record = MetricRecord::zeroed("doc-7", "https://example.com");
        record.word_count = 12;
        record.positive_score = 3;
        record.negative_score = 1;
        record.polarity_score = 0.5;
        record.fog_index = 5.25;

        assert_eq!(
            record.to_string(),
            "doc-7 words=12 pos=3 neg=1 polarity=0.500 fog=5.250"
        );
    }

    #[test]
    fn record_serializes_with_table_headers() {
        let record = MetricRecord::zeroed("a", "b");
        let json = serde_json::to_string(&record).unwrap();

        let mut last = 0;
        for column in MetricRecord::COLUMNS {
            let key = format!("\"{column}\":");
            let pos = json.find(&key).unwrap_or_else(|| panic!("missing {column}"));
            assert!(pos >= last, "{column} out of order");
            last = pos;
        }
    }

    #[test]
    fn lexicon_error_messages() {
        let err = LexiconError::UnclassifiedLexiconSource {
            name: "neutral.txt".to_string(),
        };
        assert_eq!(err.to_string(), "unclassified lexicon source: neutral.txt");

        let err = LexiconError::LexiconSourceNotFound {
            path: PathBuf::from("missing"),
        };
        assert_eq!(err.to_string(), "lexicon source not found: missing");
    }
}
