use std::{collections::BTreeMap, fmt};

use crate::{alignment::Alignment, confidence::CONFIDENCE, ngram::Ngram};

/// An alignment candidate together with the named scores the algorithms have written onto it.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    alignment: Alignment,
    scores: BTreeMap<String, f64>,
}

impl Prediction {
    pub fn new(alignment: Alignment) -> Self {
        Self {
            alignment,
            scores: Default::default(),
        }
    }

    pub fn alignment(&self) -> &Alignment {
        &self.alignment
    }

    pub fn source(&self) -> &Ngram {
        self.alignment.source()
    }

    pub fn target(&self) -> &Ngram {
        self.alignment.target()
    }

    pub fn key(&self) -> String {
        self.alignment.key()
    }

    pub fn scores(&self) -> &BTreeMap<String, f64> {
        &self.scores
    }

    pub fn score(&self, name: &str) -> Option<f64> {
        self.scores.get(name).copied()
    }

    pub fn set_score(&mut self, name: impl Into<String>, value: f64) {
        self.scores.insert(name.into(), value);
    }

    pub fn set_scores<Name: Into<String>>(&mut self, scores: impl IntoIterator<Item = (Name, f64)>) {
        for (name, value) in scores {
            self.set_score(name, value);
        }
    }

    /// The composite confidence, or 0 if it has not been calculated yet.
    pub fn confidence(&self) -> f64 {
        self.score(CONFIDENCE).unwrap_or(0.0)
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.4})", self.alignment, self.confidence())
    }
}
