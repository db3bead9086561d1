//! Training corpus aggregation.
//!
//! The [`FrequencyAggregator`] is the single owner of all mutable
//! training state: per-category statistics, the global vocabulary, and
//! the retained documents. It is threaded through the ingestion pass and
//! consumed by [`FrequencyAggregator::finish`], which returns an
//! immutable [`CorpusStats`] snapshot. Nothing mutates corpus state after
//! that point, so estimation always sees a frozen vocabulary.

use std::collections::{BTreeMap, BTreeSet};

use ahash::AHashMap;

use crate::analysis::{AlphanumTokenizer, Tokenizer};

/// A tokenized training document with exactly one category label.
///
/// Documents are created during aggregation, retained only for the
/// self-evaluation pass, and never stored in the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Ordered, non-empty token sequence.
    pub tokens: Vec<String>,
    /// The category label.
    pub category: String,
}

/// Occurrence statistics for a single category.
#[derive(Debug, Clone, Default)]
pub struct ClassStatistics {
    doc_count: usize,
    total_tokens: u64,
    token_counts: AHashMap<String, u64>,
}

impl ClassStatistics {
    /// Number of retained documents labeled with this category.
    pub fn doc_count(&self) -> usize {
        self.doc_count
    }

    /// Total token occurrences in this category (not distinct tokens).
    pub fn total_tokens(&self) -> u64 {
        self.total_tokens
    }

    /// Occurrences of `token` in this category; zero if never seen here.
    pub fn token_count(&self, token: &str) -> u64 {
        self.token_counts.get(token).copied().unwrap_or(0)
    }

    fn observe_document(&mut self, tokens: &[String]) {
        self.doc_count += 1;
        for token in tokens {
            *self.token_counts.entry(token.clone()).or_insert(0) += 1;
            self.total_tokens += 1;
        }
    }
}

/// Accumulates per-category counts and the global vocabulary over a
/// stream of labeled texts.
#[derive(Debug, Default)]
pub struct FrequencyAggregator {
    tokenizer: AlphanumTokenizer,
    classes: BTreeMap<String, ClassStatistics>,
    vocabulary: BTreeSet<String>,
    documents: Vec<Document>,
    empty_documents: usize,
}

impl FrequencyAggregator {
    /// Create an empty aggregator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenize `text` and fold it into the counts under `category`.
    ///
    /// A text that tokenizes to nothing is dropped entirely and returns
    /// `false`: keeping it would inflate the category's document count
    /// while contributing no token signal, skewing the prior.
    pub fn observe(&mut self, text: &str, category: &str) -> bool {
        let tokens = self.tokenizer.tokenize(text);
        if tokens.is_empty() {
            self.empty_documents += 1;
            return false;
        }

        self.classes
            .entry(category.to_string())
            .or_default()
            .observe_document(&tokens);
        for token in &tokens {
            if !self.vocabulary.contains(token) {
                self.vocabulary.insert(token.clone());
            }
        }
        self.documents.push(Document {
            tokens,
            category: category.to_string(),
        });

        true
    }

    /// Freeze the accumulated state into an immutable snapshot.
    pub fn finish(self) -> CorpusStats {
        CorpusStats {
            classes: self.classes,
            vocabulary: self.vocabulary,
            documents: self.documents,
            empty_documents: self.empty_documents,
        }
    }
}

/// Immutable snapshot of an aggregated training corpus.
///
/// Categories iterate in name order everywhere (the maps are ordered),
/// which is what makes downstream tie-breaking reproducible.
#[derive(Debug, Clone)]
pub struct CorpusStats {
    classes: BTreeMap<String, ClassStatistics>,
    vocabulary: BTreeSet<String>,
    documents: Vec<Document>,
    empty_documents: usize,
}

impl CorpusStats {
    /// Per-category statistics, keyed by category name.
    pub fn classes(&self) -> &BTreeMap<String, ClassStatistics> {
        &self.classes
    }

    /// The global vocabulary: every distinct token across all documents.
    pub fn vocabulary(&self) -> &BTreeSet<String> {
        &self.vocabulary
    }

    /// The retained documents, in observation order.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Number of retained documents across all categories.
    pub fn total_documents(&self) -> usize {
        self.documents.len()
    }

    /// Number of distinct tokens in the vocabulary.
    pub fn vocab_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Number of categories actually observed.
    pub fn category_count(&self) -> usize {
        self.classes.len()
    }

    /// Documents dropped for tokenizing to nothing.
    pub fn empty_documents(&self) -> usize {
        self.empty_documents
    }
}
