//! The trained Naive Bayes model and its estimation.
//!
//! A [`NaiveBayesModel`] is produced once per training run from a frozen
//! [`CorpusStats`] snapshot and is immutable afterwards. It is the sole
//! unit exchanged with storage (see [`storage`]).

pub mod storage;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::corpus::CorpusStats;
use crate::error::{CentimeError, Result};

/// Algorithm identifier written into snapshot metadata.
pub const ALGORITHM_NAME: &str = "NaiveBayes";

/// Snapshot metadata describing the trained artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetadata {
    /// Algorithm identifier (always [`ALGORITHM_NAME`] for this crate).
    pub algorithm: String,
    /// Number of distinct tokens in the training vocabulary.
    pub vocab_size: usize,
    /// Number of training documents the model was estimated from.
    pub doc_count: usize,
}

/// A trained multinomial Naive Bayes model.
///
/// `priors` maps each category to its log-prior probability.
/// `likelihoods` maps each category to a *dense* table: every vocabulary
/// token has an entry under every category, smoothed so that no entry is
/// ever `-inf`. Tokens outside the vocabulary are not representable in
/// the table and must be skipped by the classifier.
///
/// Both maps are ordered by category/token name, so iteration order and
/// the serialized snapshot are stable across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NaiveBayesModel {
    pub metadata: ModelMetadata,
    pub priors: BTreeMap<String, f64>,
    pub likelihoods: BTreeMap<String, BTreeMap<String, f64>>,
}

impl NaiveBayesModel {
    /// Estimate a model from an aggregated corpus.
    ///
    /// Log-priors come from retained document counts over the categories
    /// actually observed. Log-likelihoods use Laplace (add-one) smoothing
    /// over the global vocabulary:
    ///
    /// ```text
    /// log_likelihood(w | c) = ln( (occurrences(w, c) + 1)
    ///                           / (total_tokens(c) + |vocabulary|) )
    /// ```
    ///
    /// computed for every `(category, token)` pair.
    ///
    /// # Errors
    ///
    /// Returns [`CentimeError::Corpus`] when no documents (and therefore
    /// no categories) survived ingestion; there is no valid prior
    /// distribution to estimate.
    pub fn estimate(corpus: &CorpusStats) -> Result<Self> {
        let total_docs = corpus.total_documents();
        if total_docs == 0 || corpus.category_count() == 0 {
            return Err(CentimeError::corpus(
                "no training documents survived ingestion; cannot estimate a model",
            ));
        }

        let vocab_size = corpus.vocab_size();
        let mut priors = BTreeMap::new();
        let mut likelihoods = BTreeMap::new();

        for (category, stats) in corpus.classes() {
            let prior = stats.doc_count() as f64 / total_docs as f64;
            priors.insert(category.clone(), prior.ln());

            let denominator = stats.total_tokens() as f64 + vocab_size as f64;
            let mut table = BTreeMap::new();
            for token in corpus.vocabulary() {
                let smoothed = (stats.token_count(token) as f64 + 1.0) / denominator;
                table.insert(token.clone(), smoothed.ln());
            }
            likelihoods.insert(category.clone(), table);
        }

        Ok(NaiveBayesModel {
            metadata: ModelMetadata {
                algorithm: ALGORITHM_NAME.to_string(),
                vocab_size,
                doc_count: total_docs,
            },
            priors,
            likelihoods,
        })
    }

    /// Categories known to this model, in name order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.priors.keys().map(|s| s.as_str())
    }

    /// Log-likelihood of `token` under `category`, or `None` when either
    /// the category is unknown or the token is out-of-vocabulary.
    pub fn log_likelihood(&self, category: &str, token: &str) -> Option<f64> {
        self.likelihoods.get(category)?.get(token).copied()
    }
}
