//! Per-document readability and sentiment metrics.
//!
//! [`MetricsEngine`] runs the whole pipeline for one document:
//!
//! ```text
//! raw text ──► SentenceSegmenter ──► sentence count
//!     │
//!     └──► TextCleaner ──► WordTokenizer ──► tokens
//!                                              │
//!            estimate_syllables, lexicons  ◄───┘
//!                                              │
//!                                              ▼
//!                                        MetricRecord
//! ```
//!
//! The engine holds no per-document state. One instance can analyse any
//! number of documents, from any number of threads.
//!
//! ## Word counts
//!
//! Two word counts are in play. The *raw* count covers every token and
//! feeds the average sentence length (and through it the Fog Index). The
//! reported `word_count` only covers alphabetic tokens and is the base for
//! the complex-word percentage, syllables per word and average word length.
//! Complex words themselves are counted over all tokens.

mod pronoun;

pub use pronoun::PronounCounter;

use lexmetric_types::{AnalyzerConfig, Document, MetricRecord, PronounCase, TextStats};
use tracing::debug;

use crate::analyzer::cleaner::{lowercase, TextCleaner};
use crate::analyzer::segmenter::SentenceSegmenter;
use crate::analyzer::syllable::estimate_syllables;
use crate::analyzer::tokenizer::WordTokenizer;
use crate::lexicon::{Lexicons, SentimentLexicon, StopwordSet};

/// A record together with the intermediate counts behind it.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// The reported metrics.
    pub record: MetricRecord,
    /// Counts not carried in the record.
    pub stats: TextStats,
}

/// Computes [`MetricRecord`]s.
#[derive(Debug, Clone)]
pub struct MetricsEngine {
    config: AnalyzerConfig,
    cleaner: TextCleaner,
    pronouns: PronounCounter,
}

impl Default for MetricsEngine {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default())
    }
}

impl MetricsEngine {
    /// Creates an engine with the given configuration.
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            config,
            cleaner: TextCleaner::new(),
            pronouns: PronounCounter::new(),
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyses a document against both lexicons.
    pub fn analyze_document(&self, document: &Document, lexicons: &Lexicons) -> MetricRecord {
        self.analyze(
            &document.text,
            &document.url_id,
            &document.url,
            &lexicons.stopwords,
            &lexicons.sentiment,
        )
    }

    /// Analyses raw text. Never fails: empty or non-text input yields a
    /// record of zeros.
    pub fn analyze(
        &self,
        text: &str,
        url_id: &str,
        url: &str,
        stopwords: &StopwordSet,
        sentiment: &SentimentLexicon,
    ) -> MetricRecord {
        self.analyze_detailed(text, url_id, url, stopwords, sentiment)
            .record
    }

    /// Like [`analyze`](Self::analyze), also returning intermediate counts.
    pub fn analyze_detailed(
        &self,
        text: &str,
        url_id: &str,
        url: &str,
        stopwords: &StopwordSet,
        sentiment: &SentimentLexicon,
    ) -> Analysis {
        let sentence_count = SentenceSegmenter.count(text);

        let (cleaned, pronoun_count) = match self.config.pronoun_case {
            PronounCase::Lowercased => {
                let cleaned = self.cleaner.clean(text);
                let pronouns = self.pronouns.count(&cleaned);
                (cleaned, pronouns)
            }
            PronounCase::PreserveCase => {
                let mixed = self.cleaner.clean_preserving_case(text);
                let pronouns = self.pronouns.count(&mixed);
                (lowercase(mixed), pronouns)
            }
        };

        let threshold = self.config.complex_syllable_threshold;
        let mut raw_word_count = 0usize;
        let mut complex_word_count = 0usize;
        let mut word_count = 0usize;
        let mut syllable_total = 0u64;
        let mut char_total = 0usize;
        let mut filtered_word_count = 0usize;
        let mut positive_score = 0usize;
        let mut negative_score = 0usize;

        WordTokenizer.tokenize(&cleaned, |token| {
            raw_word_count += 1;

            let syllables = estimate_syllables(token.text);
            if syllables > threshold {
                complex_word_count += 1;
            }

            if !token.is_alphabetic() {
                return;
            }
            word_count += 1;
            syllable_total += u64::from(syllables);
            char_total += token.char_len();

            if stopwords.contains(token.text) {
                return;
            }
            filtered_word_count += 1;
            // Overlapping lexicons score on both sides.
            if sentiment.is_positive(token.text) {
                positive_score += 1;
            }
            if sentiment.is_negative(token.text) {
                negative_score += 1;
            }
        });

        let avg_sentence_length = ratio(raw_word_count as f64, sentence_count);
        let syllables_per_word = ratio(syllable_total as f64, word_count);
        let avg_word_length = ratio(char_total as f64, word_count);
        let percentage_complex_words = if word_count > 0 {
            (complex_word_count as f64 / word_count as f64) * 100.0
        } else {
            0.0
        };

        let eps = self.config.epsilon;
        let sentiment_total = positive_score + negative_score;
        let polarity_score =
            (positive_score as f64 - negative_score as f64) / (sentiment_total as f64 + eps);
        let subjectivity_score = sentiment_total as f64 / (filtered_word_count as f64 + eps);

        // Uses the raw-token sentence length, not one recomputed from
        // alphabetic words.
        let fog_index = 0.4 * (avg_sentence_length + percentage_complex_words);

        debug!(
            url_id,
            sentences = sentence_count,
            tokens = raw_word_count,
            words = word_count,
            "analysed document"
        );

        Analysis {
            record: MetricRecord {
                url_id: url_id.to_string(),
                url: url.to_string(),
                positive_score,
                negative_score,
                polarity_score,
                subjectivity_score,
                avg_sentence_length,
                percentage_complex_words,
                fog_index,
                avg_words_per_sentence: avg_sentence_length,
                complex_word_count,
                word_count,
                syllables_per_word,
                personal_pronoun_count: pronoun_count,
                avg_word_length,
            },
            stats: TextStats {
                sentence_count,
                raw_word_count,
                filtered_word_count,
            },
        }
    }
}

#[inline]
fn ratio(numerator: f64, denominator: usize) -> f64 {
    if denominator > 0 {
        numerator / denominator as f64
    } else {
        0.0
    }
}

/// One-shot analysis with the default configuration.
///
/// Builds a fresh [`MetricsEngine`] per call; keep an engine around when
/// analysing more than a handful of documents.
///
/// ```
/// use lexmetric_core::lexicon::{SentimentLexicon, StopwordSet};
/// use lexmetric_core::metrics::analyze;
///
/// let stopwords = StopwordSet::from_words(["is"]);
/// let sentiment = SentimentLexicon::from_words(["fine"], []);
/// let record = analyze("All is fine.", "1", "https://example.com", &stopwords, &sentiment);
///
/// assert_eq!(record.positive_score, 1);
/// assert_eq!(record.word_count, 3);
/// ```
pub fn analyze(
    text: &str,
    document_id: &str,
    source_ref: &str,
    stopwords: &StopwordSet,
    sentiment: &SentimentLexicon,
) -> MetricRecord {
    MetricsEngine::default().analyze(text, document_id, source_ref, stopwords, sentiment)
}
