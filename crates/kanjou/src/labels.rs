//! # Aspect Label Set
//!
//! The fixed tag vocabulary for aspect term extraction. Sentence tokens
//! carry BIO tags; the `[CLS]` and `[SEP]` markers injected by the feature
//! encoder are themselves members of the set so they can be labeled like
//! any other position.

use std::fmt;
use std::str::FromStr;

use crate::error::KanjouError;

/// Classification-start marker token.
pub const CLS_TOKEN: &str = "[CLS]";

/// Sequence separator token. Also prefixes the aspect subsequence appended
/// to each sentence.
pub const SEP_TOKEN: &str = "[SEP]";

/// Tags for labeling tokens in an ATEPC corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AspectTag {
    /// Token outside any aspect term.
    Outside,
    /// First token of an aspect term.
    BeginAspect,
    /// Continuation token of an aspect term.
    InsideAspect,
    /// The `[CLS]` marker.
    Cls,
    /// The `[SEP]` marker.
    Sep,
}

impl AspectTag {
    /// Total number of distinct tags.
    pub const NUM_TAGS: usize = 5;

    /// Get all tags in enumeration order.
    pub fn all_tags() -> &'static [AspectTag] {
        &[
            AspectTag::Outside,
            AspectTag::BeginAspect,
            AspectTag::InsideAspect,
            AspectTag::Cls,
            AspectTag::Sep,
        ]
    }

    /// Label id for tensor operations. Ids start at 1; 0 is reserved for
    /// padding positions.
    pub fn label_id(&self) -> u32 {
        match self {
            AspectTag::Outside => 1,
            AspectTag::BeginAspect => 2,
            AspectTag::InsideAspect => 3,
            AspectTag::Cls => 4,
            AspectTag::Sep => 5,
        }
    }

    /// Get the tag for a label id.
    pub fn from_label_id(id: u32) -> Option<Self> {
        match id {
            1 => Some(AspectTag::Outside),
            2 => Some(AspectTag::BeginAspect),
            3 => Some(AspectTag::InsideAspect),
            4 => Some(AspectTag::Cls),
            5 => Some(AspectTag::Sep),
            _ => None,
        }
    }

    /// Check if this tag marks part of an aspect term.
    pub fn is_aspect(&self) -> bool {
        matches!(self, AspectTag::BeginAspect | AspectTag::InsideAspect)
    }
}

impl fmt::Display for AspectTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AspectTag::Outside => write!(f, "O"),
            AspectTag::BeginAspect => write!(f, "B-ASP"),
            AspectTag::InsideAspect => write!(f, "I-ASP"),
            AspectTag::Cls => write!(f, "{}", CLS_TOKEN),
            AspectTag::Sep => write!(f, "{}", SEP_TOKEN),
        }
    }
}

impl FromStr for AspectTag {
    type Err = KanjouError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "O" => Ok(AspectTag::Outside),
            "B-ASP" => Ok(AspectTag::BeginAspect),
            "I-ASP" => Ok(AspectTag::InsideAspect),
            CLS_TOKEN => Ok(AspectTag::Cls),
            SEP_TOKEN => Ok(AspectTag::Sep),
            other => Err(KanjouError::UnknownTag(other.to_string())),
        }
    }
}
