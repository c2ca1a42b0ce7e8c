//! # Kanjou
//!
//! Corpus preparation for aspect-based sentiment analysis. Parses tagged
//! review corpora, derives dual-sequence examples that append each
//! sentence's aspect terms, and encodes them into fixed-length feature
//! arrays aligned to a subword vocabulary.
//!
//! The pipeline runs strictly left to right:
//! corpus reader → example builder → feature encoder.
//!
//! ## Quick Start
//!
//! ```rust
//! use kanjou::{AspectTag, Split, TaggedRecord, build_examples};
//!
//! let record = TaggedRecord::new(
//!     vec!["great".into(), "battery".into(), "life".into()],
//!     vec![AspectTag::Outside, AspectTag::BeginAspect, AspectTag::Outside],
//!     vec![-1, 1, -1],
//! );
//! let examples = build_examples(std::slice::from_ref(&record), Split::Train);
//!
//! assert_eq!(examples[0].guid(), "train-0");
//! assert_eq!(examples[0].primary_text(), "great battery life [SEP] battery");
//! assert_eq!(examples[0].secondary_text(), "great battery life");
//! ```
pub mod corpus;
pub mod dataset;
pub mod encode;
pub mod error;
pub mod labels;

// Re-export primary API
pub use corpus::{NO_POLARITY, TaggedRecord, read_corpus};
pub use dataset::{Domain, Split, load_examples};
pub use encode::{
    EncoderConfig, FeatureEncoder, InputExample, InputFeatures, SubwordTokenizer,
    WordpieceTokenizer, build_examples,
};
pub use error::{KanjouError, Result};
pub use labels::{AspectTag, CLS_TOKEN, SEP_TOKEN};
