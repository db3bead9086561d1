//! Tokenizer implementations for text analysis.

/// Trait for tokenizers that convert raw text into tokens.
///
/// Tokenization is infallible: any input string is valid, and an input
/// with no token content simply yields an empty vector.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into an ordered sequence of tokens.
    fn tokenize(&self, text: &str) -> Vec<String>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// A tokenizer that lower-cases its input and extracts maximal runs of
/// ASCII letters and digits.
///
/// Everything else (punctuation, whitespace, symbols, non-ASCII) acts as
/// a separator and is discarded. Deterministic and side-effect free.
///
/// # Examples
///
/// ```
/// use centime::analysis::{AlphanumTokenizer, Tokenizer};
///
/// let tokenizer = AlphanumTokenizer::new();
/// let tokens = tokenizer.tokenize("UPI-ZOMATO*Order #4211");
/// assert_eq!(tokens, vec!["upi", "zomato", "order", "4211"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct AlphanumTokenizer;

impl AlphanumTokenizer {
    /// Create a new alphanumeric tokenizer.
    pub fn new() -> Self {
        AlphanumTokenizer
    }
}

impl Tokenizer for AlphanumTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        let mut current = String::new();

        for ch in text.chars() {
            if ch.is_ascii_alphanumeric() {
                current.push(ch.to_ascii_lowercase());
            } else if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            tokens.push(current);
        }

        tokens
    }

    fn name(&self) -> &'static str {
        "alphanum"
    }
}
