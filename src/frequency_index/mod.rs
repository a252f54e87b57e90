use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    alignment::{alignment_key, Alignment},
    candidates::generate_sentence_ngrams,
    error::{Error, Result},
    ngram::Ngram,
    token::Token,
};

mod snapshot;

pub use self::snapshot::{read_snapshot, write_snapshot};

/// Occurrence counters of alignment keys and n-gram keys.
///
/// The same structure backs both the bilingual corpus and the saved-alignment store.
/// Counts only ever grow, and lookups of unknown keys return 0.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyIndex {
    alignment_frequency: BTreeMap<String, u32>,
    source_ngram_frequency: BTreeMap<String, u32>,
    target_ngram_frequency: BTreeMap<String, u32>,
}

impl FrequencyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alignment_frequency(&self, alignment: &Alignment) -> u32 {
        read(&self.alignment_frequency, &alignment.key())
    }

    pub fn source_ngram_frequency(&self, ngram: &Ngram) -> u32 {
        read(&self.source_ngram_frequency, &ngram.key())
    }

    pub fn target_ngram_frequency(&self, ngram: &Ngram) -> u32 {
        read(&self.target_ngram_frequency, &ngram.key())
    }

    /// Number of distinct alignment keys.
    pub fn alignment_count(&self) -> usize {
        self.alignment_frequency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alignment_frequency.is_empty()
            && self.source_ngram_frequency.is_empty()
            && self.target_ngram_frequency.is_empty()
    }

    /// Counts explicit alignments, e.g. ones confirmed by a user.
    pub fn add_alignments<'alignment>(
        &mut self,
        alignments: impl IntoIterator<Item = &'alignment Alignment>,
    ) {
        for alignment in alignments {
            increment(&mut self.alignment_frequency, alignment.key());
            increment(&mut self.source_ngram_frequency, alignment.source().key());
            increment(&mut self.target_ngram_frequency, alignment.target().key());
        }
    }

    /// Counts the n-grams of each sentence pair and every source-target n-gram permutation
    /// within a pair.
    ///
    /// The source and target sentences must correspond one to one. Nothing is counted if the
    /// input is invalid.
    pub fn add_corpus(
        &mut self,
        source: &[Vec<Token>],
        target: &[Vec<Token>],
        max_ngram_length: isize,
    ) -> Result<()> {
        if source.len() != target.len() {
            return Err(Error::CorpusLengthMismatch {
                source_count: source.len(),
                target_count: target.len(),
            });
        }
        if max_ngram_length < 0 {
            return Err(Error::NegativeNgramSize(max_ngram_length));
        }

        for (source_tokens, target_tokens) in source.iter().zip(target) {
            let source_ngrams = generate_sentence_ngrams(source_tokens, max_ngram_length)?;
            let target_ngrams = generate_sentence_ngrams(target_tokens, max_ngram_length)?;
            self.add_sentence_pair(&source_ngrams, &target_ngrams);
        }

        debug!(
            "Corpus index now holds {} alignment keys after adding {} sentence pairs",
            self.alignment_count(),
            source.len()
        );
        Ok(())
    }

    fn add_sentence_pair(&mut self, source_ngrams: &[Ngram], target_ngrams: &[Ngram]) {
        let source_keys: Vec<String> = source_ngrams.iter().map(Ngram::key).collect();
        let target_keys: Vec<String> = target_ngrams.iter().map(Ngram::key).collect();

        for source_key in &source_keys {
            increment(&mut self.source_ngram_frequency, source_key.clone());
            for target_key in &target_keys {
                increment(
                    &mut self.alignment_frequency,
                    alignment_key(source_key, target_key),
                );
            }
        }
        for target_key in target_keys {
            increment(&mut self.target_ngram_frequency, target_key);
        }
    }
}

fn read(table: &BTreeMap<String, u32>, key: &str) -> u32 {
    table.get(key).copied().unwrap_or(0)
}

fn increment(table: &mut BTreeMap<String, u32>, key: String) {
    let count = table.entry(key).or_insert(0);
    *count = count.saturating_add(1);
}
