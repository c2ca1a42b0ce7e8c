//! # Dataset Catalog
//!
//! Maps dataset domains and corpus splits to the file names of the
//! benchmark ATEPC corpora, and loads examples from a data directory.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::corpus::reader::read_corpus;
use crate::encode::example::{InputExample, build_examples};
use crate::error::{KanjouError, Result};

/// The benchmark review domains with published ATEPC corpora.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Laptop,
    Restaurant,
    Twitter,
    Car,
    Phone,
    Camera,
    Notebook,
    Mixed,
}

impl Domain {
    /// Get all domains.
    pub fn all() -> &'static [Domain] {
        &[
            Domain::Laptop,
            Domain::Restaurant,
            Domain::Twitter,
            Domain::Car,
            Domain::Phone,
            Domain::Camera,
            Domain::Notebook,
            Domain::Mixed,
        ]
    }

    /// File-name stem of the domain's corpus files. The SemEval corpora
    /// ship with capitalized plural stems, the others lowercase.
    pub fn file_stem(&self) -> &'static str {
        match self {
            Domain::Laptop => "Laptops",
            Domain::Restaurant => "Restaurants",
            Domain::Twitter => "twitter",
            Domain::Car => "car",
            Domain::Phone => "phone",
            Domain::Camera => "camera",
            Domain::Notebook => "notebook",
            Domain::Mixed => "mixed",
        }
    }

    /// Corpus file name for a split, e.g. `Laptops.atepc.train.dat`.
    pub fn corpus_file(&self, split: Split) -> String {
        format!("{}.atepc.{}.dat", self.file_stem(), split)
    }

    /// Full path of the corpus file under a data directory.
    pub fn corpus_path(&self, data_dir: &Path, split: Split) -> PathBuf {
        data_dir.join(self.corpus_file(split))
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Domain::Laptop => "laptop",
            Domain::Restaurant => "restaurant",
            Domain::Twitter => "twitter",
            Domain::Car => "car",
            Domain::Phone => "phone",
            Domain::Camera => "camera",
            Domain::Notebook => "notebook",
            Domain::Mixed => "mixed",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Domain {
    type Err = KanjouError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "laptop" => Ok(Domain::Laptop),
            "restaurant" => Ok(Domain::Restaurant),
            "twitter" => Ok(Domain::Twitter),
            "car" => Ok(Domain::Car),
            "phone" => Ok(Domain::Phone),
            "camera" => Ok(Domain::Camera),
            "notebook" => Ok(Domain::Notebook),
            "mixed" => Ok(Domain::Mixed),
            other => Err(KanjouError::UnknownDomain(other.to_string())),
        }
    }
}

/// Corpus split. The split name is also the guid prefix of the examples
/// built from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Split {
    Train,
    Test,
    Valid,
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Split::Train => "train",
            Split::Test => "test",
            Split::Valid => "valid",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Split {
    type Err = KanjouError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "train" => Ok(Split::Train),
            "test" => Ok(Split::Test),
            "valid" => Ok(Split::Valid),
            other => Err(KanjouError::UnknownSplit(other.to_string())),
        }
    }
}

/// Read a domain's corpus for a split and build its examples.
pub fn load_examples(data_dir: &Path, domain: Domain, split: Split) -> Result<Vec<InputExample>> {
    let records = read_corpus(domain.corpus_path(data_dir, split))?;
    Ok(build_examples(&records, split))
}
