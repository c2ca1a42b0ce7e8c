//! # Feature Encoder
//!
//! Converts dual-sequence examples into fixed-length numeric feature
//! records aligned to a subword vocabulary. Word-level labels attach to
//! the first subword unit of each word; the validity mask records which
//! positions own a label.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::corpus::record::NO_POLARITY;
use crate::encode::example::InputExample;
use crate::encode::tokenizer::SubwordTokenizer;
use crate::error::Result;
use crate::labels::{AspectTag, CLS_TOKEN, SEP_TOKEN};

/// One encoded example: seven parallel arrays, each exactly
/// `max_seq_length` long.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputFeatures {
    /// Subword vocabulary ids for `[CLS] + tokens + [SEP]`, zero-padded.
    pub token_ids: Vec<u32>,
    /// 1 for real tokens, 0 for padding.
    pub attention_mask: Vec<u8>,
    /// All zero; the encoding is single-segment.
    pub segment_ids: Vec<u8>,
    /// Label id per word-initial position, 0 elsewhere.
    pub label_ids: Vec<u32>,
    /// Polarity per word-initial position, [`NO_POLARITY`] for
    /// `[CLS]`/`[SEP]`, non-aspect words and padding.
    pub polarities: Vec<i32>,
    /// 1 on the first subword unit of each word, 0 on continuations.
    pub validity_mask: Vec<u8>,
    /// 1 for positions holding a real label id, 0 for padding.
    pub label_mask: Vec<u8>,
}

/// Configuration for the feature encoder.
#[derive(Debug, Clone)]
pub struct EncoderConfig {
    /// Fixed output length for every feature array.
    pub max_seq_length: usize,
    /// Pad the validity mask with 0 instead of the historical 1.
    ///
    /// The reference data format pads validity with 1; keep the default
    /// unless the consumer has been updated to expect 0.
    pub zero_pad_validity: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            max_seq_length: 128,
            zero_pad_validity: false,
        }
    }
}

impl EncoderConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fixed sequence length.
    pub fn with_max_seq_length(mut self, max_seq_length: usize) -> Self {
        self.max_seq_length = max_seq_length;
        self
    }

    /// Pad the validity mask with 0 instead of 1.
    pub fn with_zero_pad_validity(mut self, enabled: bool) -> Self {
        self.zero_pad_validity = enabled;
        self
    }
}

/// Encodes examples into fixed-length feature records.
pub struct FeatureEncoder<T: SubwordTokenizer> {
    tokenizer: T,
    config: EncoderConfig,
}

impl<T: SubwordTokenizer> FeatureEncoder<T> {
    /// Create an encoder over a tokenizer capability.
    ///
    /// Panics if `max_seq_length` is below 3; two slots are reserved for
    /// `[CLS]` and `[SEP]`, so anything shorter cannot hold a token.
    pub fn new(tokenizer: T, config: EncoderConfig) -> Self {
        assert!(config.max_seq_length >= 3, "max_seq_length must be >= 3");
        Self { tokenizer, config }
    }

    /// Get the encoder configuration.
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Encode one example into a feature record.
    ///
    /// The seven output arrays are guaranteed (asserted, not assumed) to
    /// have length `max_seq_length`; a violation means an upstream stage
    /// broke the word/label alignment contract and is fatal.
    pub fn encode(&self, example: &InputExample) -> Result<InputFeatures> {
        let max_len = self.config.max_seq_length;

        let mut tokens: Vec<String> = Vec::new();
        let mut word_labels: Vec<AspectTag> = Vec::new();
        let mut polarities: Vec<i32> = Vec::new();
        let mut validity_mask: Vec<u8> = Vec::new();

        for ((word, &label), &polarity) in example
            .words()
            .iter()
            .zip(example.labels())
            .zip(example.polarities())
        {
            let pieces = self.tokenizer.tokenize(word)?;
            for (m, piece) in pieces.into_iter().enumerate() {
                tokens.push(piece);
                if m == 0 {
                    // The first subword unit owns the word's label
                    word_labels.push(label);
                    polarities.push(polarity);
                    validity_mask.push(1);
                } else {
                    validity_mask.push(0);
                }
            }
        }

        // Reserve two slots for [CLS] and [SEP]. All arrays are cut at the
        // same token index, so a multi-subword word may be split across the
        // boundary; labels stranded past it are dropped below.
        if tokens.len() >= max_len - 1 {
            tokens.truncate(max_len - 2);
            word_labels.truncate(max_len - 2);
            polarities.truncate(max_len - 2);
            validity_mask.truncate(max_len - 2);
        }

        let mut final_tokens: Vec<String> = Vec::with_capacity(tokens.len() + 2);
        let mut segment_ids: Vec<u8> = Vec::with_capacity(tokens.len() + 2);
        let mut label_ids: Vec<u32> = Vec::with_capacity(word_labels.len() + 2);

        final_tokens.push(CLS_TOKEN.to_string());
        segment_ids.push(0);
        label_ids.push(AspectTag::Cls.label_id());
        polarities.insert(0, NO_POLARITY);
        validity_mask.insert(0, 1);

        let token_count = tokens.len();
        for (i, token) in tokens.into_iter().enumerate() {
            final_tokens.push(token);
            segment_ids.push(0);
            if i < word_labels.len() {
                label_ids.push(word_labels[i].label_id());
            }
        }

        final_tokens.push(SEP_TOKEN.to_string());
        segment_ids.push(0);
        label_ids.push(AspectTag::Sep.label_id());
        polarities.push(NO_POLARITY);
        validity_mask.push(1);

        let mut token_ids = self.tokenizer.convert_tokens_to_ids(&final_tokens)?;
        let mut attention_mask: Vec<u8> = vec![1; token_ids.len()];
        let mut label_mask: Vec<u8> = vec![1; label_ids.len()];

        let validity_pad = if self.config.zero_pad_validity { 0 } else { 1 };
        token_ids.resize(max_len, 0);
        attention_mask.resize(max_len, 0);
        segment_ids.resize(max_len, 0);
        label_ids.resize(max_len, 0);
        label_mask.resize(max_len, 0);
        validity_mask.resize(max_len, validity_pad);
        polarities.resize(max_len, NO_POLARITY);

        assert_eq!(token_ids.len(), max_len, "token ids length");
        assert_eq!(attention_mask.len(), max_len, "attention mask length");
        assert_eq!(segment_ids.len(), max_len, "segment ids length");
        assert_eq!(label_ids.len(), max_len, "label ids length");
        assert_eq!(polarities.len(), max_len, "polarities length");
        assert_eq!(validity_mask.len(), max_len, "validity mask length");
        assert_eq!(label_mask.len(), max_len, "label mask length");

        debug!(guid = example.guid(), tokens = token_count, "encoded example");

        Ok(InputFeatures {
            token_ids,
            attention_mask,
            segment_ids,
            label_ids,
            polarities,
            validity_mask,
            label_mask,
        })
    }

    /// Encode a batch of examples, preserving input order.
    pub fn encode_batch(&self, examples: &[InputExample]) -> Result<Vec<InputFeatures>> {
        let features = examples
            .iter()
            .map(|example| self.encode(example))
            .collect::<Result<Vec<_>>>()?;
        debug!(count = features.len(), "encoded batch");
        Ok(features)
    }
}
