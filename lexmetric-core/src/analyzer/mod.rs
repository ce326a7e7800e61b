//! Text analysis pipeline.
//!
//! This module provides the text processing components:
//! - **Segmenter**: Splits raw text into sentences
//! - **Cleaner**: Strips URLs and punctuation, lowercases
//! - **Tokenizer**: Splits cleaned text into word tokens
//! - **Syllable**: Estimates syllables per word

pub mod cleaner;
pub mod segmenter;
pub mod syllable;
pub mod tokenizer;

pub use cleaner::TextCleaner;
pub use segmenter::SentenceSegmenter;
pub use syllable::estimate_syllables;
pub use tokenizer::{Token, WordTokenizer};
