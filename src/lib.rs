//! # Centime
//!
//! A Naive Bayes classifier for short merchant/transaction strings,
//! assigning spending categories for a personal finance pipeline.
//!
//! ## Features
//!
//! - Ingests labeled records as JSONL or a batch-export JSON object
//! - Alphanumeric tokenization shared between training and inference
//! - Laplace-smoothed log-probability estimation over a dense table
//! - Self-describing JSON model snapshots with atomic writes
//! - Deterministic, name-ordered tie-breaking during classification
//! - Training-set accuracy self-check

pub mod analysis;
pub mod classify;
pub mod cli;
pub mod corpus;
pub mod error;
pub mod evaluate;
pub mod ingest;
pub mod model;
pub mod training;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
