use log::debug;

use crate::{
    alignment::Alignment,
    error::{Error, Result},
    ngram::Ngram,
    prediction::Prediction,
    token::Token,
};

pub const DEFAULT_MAX_NGRAM_LENGTH: isize = 3;

/// Reads every contiguous window of exactly `size` tokens, left to right.
///
/// A size of 0 yields one empty n-gram per token.
pub fn read_sized_ngrams(tokens: &[Token], size: isize) -> Result<Vec<Ngram>> {
    let size = usize::try_from(size).map_err(|_| Error::NegativeNgramSize(size))?;

    if size == 0 {
        Ok(tokens.iter().map(|_| Ngram::empty()).collect())
    } else {
        Ok(tokens
            .windows(size)
            .map(|window| Ngram::new(window.to_vec()))
            .collect())
    }
}

/// Generates all n-grams of sizes `1..=max_length`, grouped by size and left to right within a size.
pub fn generate_sentence_ngrams(tokens: &[Token], max_length: isize) -> Result<Vec<Ngram>> {
    if max_length < 0 {
        return Err(Error::NegativeNgramSize(max_length));
    }

    let mut ngrams = Vec::new();
    for size in 1..=max_length {
        ngrams.extend(read_sized_ngrams(tokens, size)?);
    }

    Ok(ngrams)
}

/// Pairs every source n-gram with every target n-gram, followed by the unaligned option.
///
/// All candidates of one source n-gram are contiguous and end with its unaligned candidate.
pub fn generate_predictions(source_ngrams: &[Ngram], target_ngrams: &[Ngram]) -> Vec<Prediction> {
    let mut predictions = Vec::with_capacity(source_ngrams.len() * (target_ngrams.len() + 1));

    for source in source_ngrams {
        for target in target_ngrams {
            predictions.push(Prediction::new(Alignment::new(source.clone(), target.clone())));
        }
        predictions.push(Prediction::new(Alignment::new(source.clone(), Ngram::empty())));
    }

    debug!(
        "Generated {} candidates from {} source and {} target n-grams",
        predictions.len(),
        source_ngrams.len(),
        target_ngrams.len()
    );
    predictions
}
