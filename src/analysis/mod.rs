//! Text analysis for training and inference.
//!
//! Both sides of the pipeline (the frequency aggregator during training
//! and the classifier at inference time) must see byte-identical token
//! sequences for the same input, so tokenization lives in one place.

pub mod tokenizer;

pub use tokenizer::{AlphanumTokenizer, Tokenizer};
