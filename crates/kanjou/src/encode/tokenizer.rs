//! # Subword Tokenizer Capability
//!
//! The feature encoder consumes subword tokenization through a small
//! trait, so tests and benchmarks can supply deterministic stand-ins
//! while production code loads a Hugging Face `tokenizer.json`.

use std::path::Path;

use tokenizers::Tokenizer as HfTokenizer;

use crate::error::{KanjouError, Result};

/// Unknown-token string in WordPiece vocabularies.
const UNK_TOKEN: &str = "[UNK]";

/// Capability interface for subword tokenization.
pub trait SubwordTokenizer {
    /// Split a single word into subword units.
    fn tokenize(&self, word: &str) -> Result<Vec<String>>;

    /// Map subword units to vocabulary ids.
    fn convert_tokens_to_ids(&self, tokens: &[String]) -> Result<Vec<u32>>;
}

/// WordPiece tokenizer backed by a Hugging Face `tokenizer.json` file.
pub struct WordpieceTokenizer {
    inner: HfTokenizer,
    unk_id: u32,
}

impl WordpieceTokenizer {
    /// Load a tokenizer from a `tokenizer.json` file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let inner = HfTokenizer::from_file(path.as_ref())
            .map_err(|e| KanjouError::Tokenizer(e.to_string()))?;
        let unk_id = inner.token_to_id(UNK_TOKEN).unwrap_or(0);
        Ok(Self { inner, unk_id })
    }
}

impl SubwordTokenizer for WordpieceTokenizer {
    fn tokenize(&self, word: &str) -> Result<Vec<String>> {
        let encoding = self
            .inner
            .encode(word, false)
            .map_err(|e| KanjouError::Tokenizer(e.to_string()))?;
        Ok(encoding.get_tokens().to_vec())
    }

    fn convert_tokens_to_ids(&self, tokens: &[String]) -> Result<Vec<u32>> {
        Ok(tokens
            .iter()
            .map(|token| self.inner.token_to_id(token).unwrap_or(self.unk_id))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_tokenizer_file_is_error() {
        let result = WordpieceTokenizer::from_file("does/not/exist/tokenizer.json");
        assert!(matches!(result, Err(KanjouError::Tokenizer(_))));
    }
}
