use thiserror::Error;

/// Errors that can occur while preparing a corpus.
#[derive(Debug, Error)]
pub enum KanjouError {
    /// An I/O failure while reading a corpus file.
    #[error("corpus I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A corpus line with fewer than two whitespace-separated fields.
    #[error("malformed corpus line {line}: {content:?}")]
    MalformedLine {
        /// 1-based line number in the corpus file.
        line: usize,
        /// The offending line.
        content: String,
    },

    /// A polarity field that is not an integer.
    #[error("invalid polarity on line {line}: {value:?}")]
    InvalidPolarity {
        /// 1-based line number in the corpus file.
        line: usize,
        /// The offending field.
        value: String,
    },

    /// A tag outside the aspect label set.
    #[error("unknown tag: {0:?}")]
    UnknownTag(String),

    /// An unrecognized dataset domain name.
    #[error("unknown dataset domain: {0:?}")]
    UnknownDomain(String),

    /// An unrecognized corpus split name.
    #[error("unknown corpus split: {0:?}")]
    UnknownSplit(String),

    /// The subword tokenizer failed.
    #[error("tokenizer error: {0}")]
    Tokenizer(String),
}

/// Result type alias for corpus preparation operations.
pub type Result<T> = std::result::Result<T, KanjouError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = KanjouError::MalformedLine {
            line: 7,
            content: "battery".into(),
        };
        assert!(err.to_string().contains("line 7"));
        assert!(err.to_string().contains("battery"));

        let err = KanjouError::UnknownTag("B-PER".into());
        assert!(err.to_string().contains("B-PER"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<KanjouError>();
    }
}
