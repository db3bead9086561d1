//! Category inference against a trained model.

use crate::analysis::{AlphanumTokenizer, Tokenizer};
use crate::model::NaiveBayesModel;

/// The outcome of scoring one document.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// The best-scoring category.
    pub category: String,
    /// The winning unnormalized log-posterior score.
    pub score: f64,
}

/// Scores tokenized documents against a borrowed [`NaiveBayesModel`].
///
/// The classifier never mutates or retains the input; it holds its own
/// tokenizer so raw text takes the same analysis path as training data.
#[derive(Debug)]
pub struct Classifier<'a> {
    model: &'a NaiveBayesModel,
    tokenizer: AlphanumTokenizer,
}

impl<'a> Classifier<'a> {
    /// Create a classifier over a trained model.
    pub fn new(model: &'a NaiveBayesModel) -> Self {
        Classifier {
            model,
            tokenizer: AlphanumTokenizer::new(),
        }
    }

    /// Tokenize `text` and predict its category.
    pub fn predict(&self, text: &str) -> Option<Prediction> {
        self.predict_tokens(&self.tokenizer.tokenize(text))
    }

    /// Predict the category for an already-tokenized document.
    ///
    /// Each category's score starts at its log-prior; every token present
    /// in the model's vocabulary adds that category's log-likelihood for
    /// it. Out-of-vocabulary tokens are skipped, with no penalty and no
    /// bonus.
    /// A document with zero recognized tokens still gets a prediction
    /// (whichever category has the highest prior).
    ///
    /// Ties go to the first category reaching the maximum in iteration
    /// order. Categories iterate sorted by name; callers must treat the
    /// tie-break as implementation-defined rather than meaningful.
    ///
    /// Returns `None` only for a model with no categories, which a
    /// successful training run never produces.
    pub fn predict_tokens(&self, tokens: &[String]) -> Option<Prediction> {
        let mut best: Option<Prediction> = None;

        for (category, prior) in &self.model.priors {
            let mut score = *prior;
            for token in tokens {
                if let Some(likelihood) = self.model.log_likelihood(category, token) {
                    score += likelihood;
                }
            }

            let beats_best = match &best {
                Some(current) => score > current.score,
                None => true,
            };
            if beats_best {
                best = Some(Prediction {
                    category: category.clone(),
                    score,
                });
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::FrequencyAggregator;
    use crate::model::{ALGORITHM_NAME, ModelMetadata};
    use std::collections::BTreeMap;

    fn sample_model() -> NaiveBayesModel {
        let mut aggregator = FrequencyAggregator::new();
        aggregator.observe("zomato order", "Food");
        aggregator.observe("zomato order", "Food");
        aggregator.observe("uber ride", "Transport");
        NaiveBayesModel::estimate(&aggregator.finish()).unwrap()
    }

    #[test]
    fn test_shared_token_and_prior_win() {
        let model = sample_model();
        let classifier = Classifier::new(&model);

        // "zomato" is Food evidence; "delivery" is out-of-vocabulary.
        let prediction = classifier.predict("zomato delivery").unwrap();
        assert_eq!(prediction.category, "Food");
    }

    #[test]
    fn test_oov_tokens_are_skipped() {
        let model = sample_model();
        let classifier = Classifier::new(&model);

        let with_oov = classifier
            .predict_tokens(&["zomato".to_string(), "swiggy".to_string()])
            .unwrap();
        let without = classifier.predict_tokens(&["zomato".to_string()]).unwrap();

        // An unknown token changes nothing, not even the score.
        assert_eq!(with_oov.category, without.category);
        assert_eq!(with_oov.score, without.score);
    }

    #[test]
    fn test_zero_recognized_tokens_falls_back_to_prior() {
        let model = sample_model();
        let classifier = Classifier::new(&model);

        let prediction = classifier.predict("completely unrelated words").unwrap();
        // Food has the higher prior (2 of 3 documents).
        assert_eq!(prediction.category, "Food");
        assert_eq!(prediction.score, model.priors["Food"]);
    }

    #[test]
    fn test_tie_breaks_to_first_category_in_name_order() {
        // Hand-built model where both categories score identically.
        let mut priors = BTreeMap::new();
        priors.insert("Groceries".to_string(), (0.5f64).ln());
        priors.insert("Dining".to_string(), (0.5f64).ln());

        let mut table = BTreeMap::new();
        table.insert("market".to_string(), (0.5f64).ln());
        let mut likelihoods = BTreeMap::new();
        likelihoods.insert("Groceries".to_string(), table.clone());
        likelihoods.insert("Dining".to_string(), table);

        let model = NaiveBayesModel {
            metadata: ModelMetadata {
                algorithm: ALGORITHM_NAME.to_string(),
                vocab_size: 1,
                doc_count: 2,
            },
            priors,
            likelihoods,
        };

        let classifier = Classifier::new(&model);
        let prediction = classifier.predict("market").unwrap();

        assert_eq!(prediction.category, "Dining");
    }

    #[test]
    fn test_empty_model_yields_no_prediction() {
        let model = NaiveBayesModel {
            metadata: ModelMetadata {
                algorithm: ALGORITHM_NAME.to_string(),
                vocab_size: 0,
                doc_count: 0,
            },
            priors: BTreeMap::new(),
            likelihoods: BTreeMap::new(),
        };

        let classifier = Classifier::new(&model);
        assert!(classifier.predict("anything").is_none());
    }

    #[test]
    fn test_transport_evidence_outweighs_food_prior() {
        let model = sample_model();
        let classifier = Classifier::new(&model);

        let prediction = classifier.predict("uber ride").unwrap();
        assert_eq!(prediction.category, "Transport");
    }
}
