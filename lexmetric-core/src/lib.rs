//! Readability and sentiment metrics for plain-text documents.
//!
//! The engine takes already-fetched document text plus two lexicons
//! (stopwords, positive/negative sentiment words) and produces one
//! [`MetricRecord`] per document: sentiment scores, average sentence and
//! word length, complex-word percentage, Fog Index, syllables per word and
//! personal pronoun count.
//!
//! ```
//! use lexmetric_core::lexicon::{LexiconBuilder, LexiconSource};
//! use lexmetric_core::metrics::MetricsEngine;
//! use lexmetric_core::Document;
//!
//! let (lexicons, report) = LexiconBuilder::default().build(
//!     &[LexiconSource::new("stopwords.txt", "this\nit\nis\nand")],
//!     &[LexiconSource::new("positive-words.txt", "love\ngreat\nwonderful")],
//! );
//! assert!(report.is_clean());
//!
//! let engine = MetricsEngine::default();
//! let doc = Document::new("1", "https://example.com", "I love this. It is great and wonderful.");
//! let record = engine.analyze_document(&doc, &lexicons);
//!
//! assert_eq!(record.positive_score, 3);
//! assert_eq!(record.personal_pronoun_count, 1);
//! ```
//!
//! Lexicons are built once and shared read-only; the engine keeps no state
//! between documents, so batches may be analysed in parallel
//! ([`batch::analyze_batch_par`]).

pub mod analyzer;
pub mod batch;
pub mod config;
pub mod lexicon;
pub mod metrics;
pub mod table;

pub use lexmetric_types::{
    AnalyzerConfig, ConfigError, Document, LexiconError, MetricRecord, PronounCase,
    SourceEncoding, TextStats,
};
