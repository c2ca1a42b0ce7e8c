//! # Corpus Reader
//!
//! Parses token-per-line ATEPC corpus files into [`TaggedRecord`]s.
//! Sentences are delimited by blank lines or document-boundary markers;
//! each remaining line is `word ... tag polarity`, separated by single
//! spaces.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::corpus::record::TaggedRecord;
use crate::error::{KanjouError, Result};

/// Marker that terminates a sentence in CoNLL-style corpora.
const DOC_BOUNDARY: &str = "-DOCSTART";

/// Read an ATEPC corpus file into tagged records.
///
/// Malformed lines (fewer than two fields, a non-integer polarity, or a
/// tag outside the label set) are fatal; nothing is skipped silently.
///
/// # Arguments
/// * `path` - Path to the corpus file
///
/// # Returns
/// The records in file order. Empty sentences are never emitted.
pub fn read_corpus<P: AsRef<Path>>(path: P) -> Result<Vec<TaggedRecord>> {
    let file = File::open(path.as_ref())?;
    let records = read_records(BufReader::new(file))?;
    debug!(count = records.len(), path = %path.as_ref().display(), "parsed corpus");
    Ok(records)
}

fn read_records<R: BufRead>(reader: R) -> Result<Vec<TaggedRecord>> {
    let mut records = Vec::new();
    let mut words: Vec<String> = Vec::new();
    let mut tags = Vec::new();
    let mut polarities = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;

        if line.is_empty() || line.starts_with(DOC_BOUNDARY) {
            if !words.is_empty() {
                records.push(TaggedRecord::new(
                    std::mem::take(&mut words),
                    std::mem::take(&mut tags),
                    std::mem::take(&mut polarities),
                ));
            }
            continue;
        }

        let fields: Vec<&str> = line.split(' ').collect();
        if fields.len() < 2 {
            return Err(KanjouError::MalformedLine {
                line: idx + 1,
                content: line,
            });
        }

        let polarity_field = fields[fields.len() - 1].trim_end();
        let polarity = polarity_field
            .parse::<i32>()
            .map_err(|_| KanjouError::InvalidPolarity {
                line: idx + 1,
                value: polarity_field.to_string(),
            })?;

        words.push(fields[0].to_string());
        tags.push(fields[fields.len() - 2].parse()?);
        polarities.push(polarity);
    }

    // Flush the final sentence when the file does not end with a blank line
    if !words.is_empty() {
        records.push(TaggedRecord::new(words, tags, polarities));
    }

    Ok(records)
}
