//! Training-set self-evaluation.
//!
//! Re-scores the exact documents the model was estimated from and
//! reports the fraction predicted correctly. This is a sanity check on
//! training-set fit only. There is no held-out split, so the number is
//! optimistic and says nothing about generalization.

use serde::Serialize;

use crate::classify::Classifier;
use crate::corpus::Document;
use crate::model::NaiveBayesModel;

/// Outcome of a self-evaluation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluationReport {
    /// Documents whose predicted category matched their label.
    pub correct: usize,
    /// Documents scored.
    pub total: usize,
}

impl EvaluationReport {
    /// Fraction correct, or 0.0 for an empty document set.
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 / self.total as f64
        }
    }
}

/// Score every retained training document against the model and count
/// exact label matches.
pub fn evaluate_training_fit(model: &NaiveBayesModel, documents: &[Document]) -> EvaluationReport {
    let classifier = Classifier::new(model);
    let mut correct = 0;

    for document in documents {
        if let Some(prediction) = classifier.predict_tokens(&document.tokens) {
            if prediction.category == document.category {
                correct += 1;
            }
        }
    }

    EvaluationReport {
        correct,
        total: documents.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::FrequencyAggregator;

    #[test]
    fn test_separable_corpus_fits_perfectly() {
        let mut aggregator = FrequencyAggregator::new();
        aggregator.observe("zomato order", "Food");
        aggregator.observe("zomato order", "Food");
        aggregator.observe("uber ride", "Transport");
        let corpus = aggregator.finish();

        let model = NaiveBayesModel::estimate(&corpus).unwrap();
        let report = evaluate_training_fit(&model, corpus.documents());

        assert_eq!(report.total, 3);
        assert_eq!(report.correct, 3);
        assert_eq!(report.accuracy(), 1.0);
    }

    #[test]
    fn test_conflicting_labels_cannot_all_fit() {
        // Identical text under two labels: at most one side can win.
        let mut aggregator = FrequencyAggregator::new();
        aggregator.observe("starbucks coffee", "Food");
        aggregator.observe("starbucks coffee", "Shopping");
        let corpus = aggregator.finish();

        let model = NaiveBayesModel::estimate(&corpus).unwrap();
        let report = evaluate_training_fit(&model, corpus.documents());

        assert_eq!(report.total, 2);
        assert_eq!(report.correct, 1);
        assert!((report.accuracy() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_evaluation_is_reproducible() {
        let mut aggregator = FrequencyAggregator::new();
        aggregator.observe("netflix subscription", "Entertainment");
        aggregator.observe("electricity bill payment", "Utilities");
        aggregator.observe("netflix renewal", "Entertainment");
        let corpus = aggregator.finish();

        let model = NaiveBayesModel::estimate(&corpus).unwrap();
        let first = evaluate_training_fit(&model, corpus.documents());
        let second = evaluate_training_fit(&model, corpus.documents());

        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_document_set() {
        let mut aggregator = FrequencyAggregator::new();
        aggregator.observe("zomato order", "Food");
        let model = NaiveBayesModel::estimate(&aggregator.finish()).unwrap();

        let report = evaluate_training_fit(&model, &[]);
        assert_eq!(report.total, 0);
        assert_eq!(report.accuracy(), 0.0);
    }
}
