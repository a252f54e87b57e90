use std::fmt;

use crate::ngram::Ngram;

/// A pairing of a source n-gram with a target n-gram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    source: Ngram,
    target: Ngram,
}

impl Alignment {
    pub fn new(source: Ngram, target: Ngram) -> Self {
        Self { source, target }
    }

    pub fn source(&self) -> &Ngram {
        &self.source
    }

    pub fn target(&self) -> &Ngram {
        &self.target
    }

    /// Alignments with an empty target leave their source n-gram unaligned.
    pub fn is_unaligned(&self) -> bool {
        self.target.is_empty()
    }

    /// Identifies the alignment by the texts of both n-grams, ignoring positions.
    pub fn key(&self) -> String {
        alignment_key(&self.source.key(), &self.target.key())
    }
}

pub fn alignment_key(source_key: &str, target_key: &str) -> String {
    format!("{source_key}->{target_key}")
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unaligned() {
            write!(f, "{} -> ∅", self.source)
        } else {
            write!(f, "{} -> {}", self.source, self.target)
        }
    }
}
