//! End-to-end training pipeline.
//!
//! Glue over the ingest → aggregate → estimate → evaluate sequence.
//! Takes the whole input as a string and returns the trained model with
//! its run summary; file I/O stays at the CLI boundary so tests can
//! drive the pipeline directly.

use log::{info, warn};

use crate::corpus::FrequencyAggregator;
use crate::error::Result;
use crate::evaluate::{EvaluationReport, evaluate_training_fit};
use crate::ingest::{IngestStats, read_records};
use crate::model::NaiveBayesModel;

/// The artifacts and summary counts of one training run.
#[derive(Debug)]
pub struct TrainRun {
    /// The trained model.
    pub model: NaiveBayesModel,
    /// What ingestion saw and skipped.
    pub ingest: IngestStats,
    /// Valid records dropped because their text tokenized to nothing.
    pub empty_documents: usize,
    /// Training-set accuracy of the just-trained model.
    pub evaluation: EvaluationReport,
}

impl TrainRun {
    /// Number of documents the model was estimated from.
    pub fn document_count(&self) -> usize {
        self.model.metadata.doc_count
    }

    /// Training vocabulary size.
    pub fn vocab_size(&self) -> usize {
        self.model.metadata.vocab_size
    }

    /// Number of categories observed in training.
    pub fn category_count(&self) -> usize {
        self.model.priors.len()
    }
}

/// Train a model from raw input text (JSONL or batch-export object).
///
/// # Errors
///
/// Returns [`crate::error::CentimeError::Corpus`] when zero documents
/// survive ingestion and aggregation.
pub fn train(input: &str) -> Result<TrainRun> {
    let (records, ingest) = read_records(input);
    if ingest.skipped() > 0 {
        warn!(
            "skipped {} of {} records ({} parse errors, {} missing fields)",
            ingest.skipped(),
            ingest.records_seen,
            ingest.parse_errors,
            ingest.missing_fields
        );
    }

    let mut aggregator = FrequencyAggregator::new();
    for record in &records {
        aggregator.observe(&record.text, &record.category);
    }
    let corpus = aggregator.finish();

    info!(
        "aggregated {} documents, {} vocabulary tokens, {} categories",
        corpus.total_documents(),
        corpus.vocab_size(),
        corpus.category_count()
    );

    let model = NaiveBayesModel::estimate(&corpus)?;
    let evaluation = evaluate_training_fit(&model, corpus.documents());

    Ok(TrainRun {
        model,
        ingest,
        empty_documents: corpus.empty_documents(),
        evaluation,
    })
}
