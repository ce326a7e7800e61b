//! Batch analysis.
//!
//! Documents are independent, so a batch can run sequentially or fan out
//! across threads. Either way the records come back in input order and the
//! lexicons are only read.

use lexmetric_types::{Document, MetricRecord};
use rayon::prelude::*;
use tracing::info;

use crate::lexicon::Lexicons;
use crate::metrics::MetricsEngine;

/// Analyses documents one after another.
pub fn analyze_batch(
    engine: &MetricsEngine,
    documents: &[Document],
    lexicons: &Lexicons,
) -> Vec<MetricRecord> {
    let records: Vec<MetricRecord> = documents
        .iter()
        .map(|doc| engine.analyze_document(doc, lexicons))
        .collect();

    info!(documents = records.len(), "batch analysed");
    records
}

/// Analyses documents on the rayon thread pool.
///
/// Produces exactly the same records, in the same order, as
/// [`analyze_batch`].
pub fn analyze_batch_par(
    engine: &MetricsEngine,
    documents: &[Document],
    lexicons: &Lexicons,
) -> Vec<MetricRecord> {
    let records: Vec<MetricRecord> = documents
        .par_iter()
        .map(|doc| engine.analyze_document(doc, lexicons))
        .collect();

    info!(documents = records.len(), "batch analysed in parallel");
    records
}
