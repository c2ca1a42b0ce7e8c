pub mod example;
pub mod features;
pub mod tokenizer;

pub use example::{InputExample, build_examples};
pub use features::{EncoderConfig, FeatureEncoder, InputFeatures};
pub use tokenizer::{SubwordTokenizer, WordpieceTokenizer};
