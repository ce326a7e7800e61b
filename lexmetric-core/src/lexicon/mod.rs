//! Stopword and sentiment lexicons.
//!
//! Lexicons are built once per batch from raw word-list sources and then
//! shared read-only by every document analysis. Both sets are unordered;
//! use the `sorted*` views when a stable listing is needed.
//!
//! ## Normalization
//!
//! Each source is split into entries on newlines and on `|` (word lists
//! sometimes put alternatives on one line). Configured annotations such as
//! `"(Former Yug. Rep.)"` are removed, entries are trimmed and lowercased,
//! and empty entries are discarded.
//!
//! ## Sentiment classification
//!
//! A sentiment source is bucketed by its name: names containing
//! `positive` go to the positive set, names containing `negative` to the
//! negative set (case-insensitive, `positive` wins if both appear).
//! Anything else is reported as
//! [`LexiconError::UnclassifiedLexiconSource`] and skipped.

pub mod loader;

use std::borrow::Cow;

use lexmetric_types::{AnalyzerConfig, LexiconError};
use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use tracing::{info, warn};

/// A named raw word list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconSource {
    /// Source name, typically the file name.
    pub name: String,
    /// Raw contents.
    pub text: String,
}

impl LexiconSource {
    /// Creates a source.
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// Splits raw list text into normalized entries.
///
/// ```
/// use lexmetric_core::lexicon::normalize_entries;
///
/// let annotations = vec!["(Former Yug. Rep.)".to_string()];
/// let words: Vec<String> =
///     normalize_entries("  The|AND \n\nMacedonia (Former Yug. Rep.)\n", &annotations).collect();
/// assert_eq!(words, ["the", "and", "macedonia"]);
/// ```
pub fn normalize_entries<'a>(
    text: &'a str,
    annotations: &'a [String],
) -> impl Iterator<Item = String> + 'a {
    text.split(['\n', '|']).filter_map(move |raw| {
        let mut entry = Cow::Borrowed(raw);
        for annotation in annotations {
            if entry.contains(annotation.as_str()) {
                entry = Cow::Owned(entry.replace(annotation.as_str(), ""));
            }
        }

        let trimmed = entry.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        }
    })
}

/// Normalized words excluded from sentiment and content analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordSet {
    words: FxHashSet<String>,
}

impl StopwordSet {
    /// Builds a set from already-normalized words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Membership test on an exact (already lowercased) word.
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Words in lexicographic order.
    pub fn sorted(&self) -> Vec<&str> {
        sorted(&self.words)
    }
}

/// Which sentiment bucket a source feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentLabel {
    /// Positive words.
    Positive,
    /// Negative words.
    Negative,
}

impl SentimentLabel {
    /// Infers the label from a source name.
    pub fn classify(name: &str) -> Option<Self> {
        let name = name.to_lowercase();
        if name.contains("positive") {
            Some(SentimentLabel::Positive)
        } else if name.contains("negative") {
            Some(SentimentLabel::Negative)
        } else {
            None
        }
    }
}

/// Positive and negative word sets.
///
/// The sets are not forced to be disjoint: a word listed in both scores
/// on both sides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SentimentLexicon {
    positive: FxHashSet<String>,
    negative: FxHashSet<String>,
}

impl SentimentLexicon {
    /// Builds a lexicon from already-normalized words.
    pub fn from_words<P, N, S>(positive: P, negative: N) -> Self
    where
        P: IntoIterator<Item = S>,
        N: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            positive: positive.into_iter().map(Into::into).collect(),
            negative: negative.into_iter().map(Into::into).collect(),
        }
    }

    /// True if `word` is in the positive set.
    #[inline]
    pub fn is_positive(&self, word: &str) -> bool {
        self.positive.contains(word)
    }

    /// True if `word` is in the negative set.
    #[inline]
    pub fn is_negative(&self, word: &str) -> bool {
        self.negative.contains(word)
    }

    /// Size of the positive set.
    pub fn positive_len(&self) -> usize {
        self.positive.len()
    }

    /// Size of the negative set.
    pub fn negative_len(&self) -> usize {
        self.negative.len()
    }

    /// Positive words in lexicographic order.
    pub fn sorted_positive(&self) -> Vec<&str> {
        sorted(&self.positive)
    }

    /// Negative words in lexicographic order.
    pub fn sorted_negative(&self) -> Vec<&str> {
        sorted(&self.negative)
    }

    /// Words present in both sets, sorted.
    pub fn overlap(&self) -> Vec<&str> {
        let mut both: Vec<&str> = self
            .positive
            .iter()
            .filter(|w| self.negative.contains(w.as_str()))
            .map(String::as_str)
            .collect();
        both.sort_unstable();
        both
    }
}

/// Both lexicons, built once and shared by reference across documents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicons {
    /// Stopwords.
    pub stopwords: StopwordSet,
    /// Sentiment words.
    pub sentiment: SentimentLexicon,
}

impl Lexicons {
    /// Empty lexicons: every sentiment score comes out as 0.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Non-fatal problems met while building lexicons.
///
/// Each problem is logged when recorded; the offending source was skipped.
#[derive(Debug, Default)]
pub struct BuildReport {
    issues: SmallVec<[LexiconError; 4]>,
}

impl BuildReport {
    /// Records and logs an issue.
    pub fn push(&mut self, issue: LexiconError) {
        warn!(error = %issue, "skipping lexicon source");
        self.issues.push(issue);
    }

    /// Appends another report's issues without logging them again.
    pub fn merge(&mut self, other: BuildReport) {
        self.issues.extend(other.issues);
    }

    /// True when nothing was skipped.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Number of issues.
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// True when nothing was skipped.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Recorded issues, in the order they occurred.
    pub fn issues(&self) -> &[LexiconError] {
        &self.issues
    }
}

/// Turns raw sources into normalized lexicons.
#[derive(Debug, Clone)]
pub struct LexiconBuilder {
    annotations: Vec<String>,
}

impl Default for LexiconBuilder {
    fn default() -> Self {
        Self::new(&AnalyzerConfig::default())
    }
}

impl LexiconBuilder {
    /// Creates a builder using the config's annotation list.
    pub fn new(config: &AnalyzerConfig) -> Self {
        Self {
            annotations: config.annotations.clone(),
        }
    }

    /// Unions all sources into one deduplicated stopword set.
    pub fn build_stopwords(&self, sources: &[LexiconSource]) -> StopwordSet {
        let mut words = FxHashSet::default();
        for source in sources {
            words.extend(normalize_entries(&source.text, &self.annotations));
        }

        info!(sources = sources.len(), words = words.len(), "built stopword set");
        StopwordSet { words }
    }

    /// Buckets sources by name and normalizes their words, leaving out
    /// anything already in `stopwords`.
    ///
    /// Sources whose name matches neither label are reported and skipped.
    pub fn build_sentiment(
        &self,
        sources: &[LexiconSource],
        stopwords: &StopwordSet,
    ) -> (SentimentLexicon, BuildReport) {
        let mut lexicon = SentimentLexicon::default();
        let mut report = BuildReport::default();

        for source in sources {
            let Some(label) = SentimentLabel::classify(&source.name) else {
                report.push(LexiconError::UnclassifiedLexiconSource {
                    name: source.name.clone(),
                });
                continue;
            };

            let bucket = match label {
                SentimentLabel::Positive => &mut lexicon.positive,
                SentimentLabel::Negative => &mut lexicon.negative,
            };

            bucket.extend(
                normalize_entries(&source.text, &self.annotations)
                    .filter(|word| !stopwords.contains(word)),
            );
        }

        info!(
            positive = lexicon.positive.len(),
            negative = lexicon.negative.len(),
            skipped = report.len(),
            "built sentiment lexicon"
        );
        (lexicon, report)
    }

    /// Builds both lexicons. Stopwords come first since sentiment
    /// normalization filters against them.
    pub fn build(
        &self,
        stopword_sources: &[LexiconSource],
        sentiment_sources: &[LexiconSource],
    ) -> (Lexicons, BuildReport) {
        let stopwords = self.build_stopwords(stopword_sources);
        let (sentiment, report) = self.build_sentiment(sentiment_sources, &stopwords);
        (Lexicons { stopwords, sentiment }, report)
    }
}

fn sorted(words: &FxHashSet<String>) -> Vec<&str> {
    let mut out: Vec<&str> = words.iter().map(String::as_str).collect();
    out.sort_unstable();
    out
}
