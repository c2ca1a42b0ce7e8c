//! # Dual-Sequence Examples
//!
//! Builds one training example per tagged sentence: the sentence itself,
//! followed by a `[SEP]`-prefixed subsequence holding just its aspect
//! terms. Labels and polarities are extended in the same order, so every
//! word in the combined sequence owns exactly one label and one polarity.

use crate::corpus::record::{NO_POLARITY, TaggedRecord};
use crate::dataset::Split;
use crate::labels::{AspectTag, SEP_TOKEN};

/// A single training/test example for aspect extraction and polarity
/// classification.
///
/// The word, label and polarity sequences always have equal length; the
/// constructor enforces this, so downstream consumers never re-derive the
/// word count from the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputExample {
    guid: String,
    words: Vec<String>,
    sentence_len: usize,
    labels: Vec<AspectTag>,
    polarities: Vec<i32>,
}

impl InputExample {
    /// Build an example from a tagged record.
    ///
    /// The aspect subsequence starts with a `[SEP]` placeholder (tag `O`,
    /// no polarity) and collects every word whose polarity is set. Aspect
    /// copies never carry a polarity; only the original sentence position
    /// keeps the real value.
    pub fn from_record(record: &TaggedRecord, guid: String) -> Self {
        let sentence_len = record.len();

        let mut words = record.words.clone();
        let mut labels = record.tags.clone();
        let mut polarities = record.polarities.clone();

        words.push(SEP_TOKEN.to_string());
        labels.push(AspectTag::Outside);
        polarities.push(NO_POLARITY);

        for i in 0..sentence_len {
            if record.polarities[i] != NO_POLARITY {
                words.push(record.words[i].clone());
                labels.push(record.tags[i]);
                polarities.push(NO_POLARITY);
            }
        }

        Self::new(guid, words, sentence_len, labels, polarities)
    }

    /// Create an example from already-extended sequences.
    ///
    /// Panics if the sequences disagree in length or the sentence length
    /// exceeds the word count.
    pub fn new(
        guid: String,
        words: Vec<String>,
        sentence_len: usize,
        labels: Vec<AspectTag>,
        polarities: Vec<i32>,
    ) -> Self {
        assert_eq!(words.len(), labels.len(), "one label per word");
        assert_eq!(words.len(), polarities.len(), "one polarity per word");
        assert!(sentence_len <= words.len(), "sentence within word sequence");
        Self {
            guid,
            words,
            sentence_len,
            labels,
            polarities,
        }
    }

    /// Unique id for the example (`"{split}-{index}"`).
    pub fn guid(&self) -> &str {
        &self.guid
    }

    /// The combined word sequence: sentence, `[SEP]`, aspect terms.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// One tag per word in [`words`](Self::words).
    pub fn labels(&self) -> &[AspectTag] {
        &self.labels
    }

    /// One polarity per word in [`words`](Self::words).
    pub fn polarities(&self) -> &[i32] {
        &self.polarities
    }

    /// Number of words belonging to the original sentence.
    pub fn sentence_len(&self) -> usize {
        self.sentence_len
    }

    /// The full dual sequence as text: sentence plus aspect subsequence.
    pub fn primary_text(&self) -> String {
        self.words.join(" ")
    }

    /// The sentence alone.
    pub fn secondary_text(&self) -> String {
        self.words[..self.sentence_len].join(" ")
    }
}

/// Build one example per record, with order-derived guids.
pub fn build_examples(records: &[TaggedRecord], split: Split) -> Vec<InputExample> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| InputExample::from_record(record, format!("{}-{}", split, i)))
        .collect()
}
