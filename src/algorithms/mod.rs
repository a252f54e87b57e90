use crate::{frequency_index::FrequencyIndex, prediction::Prediction};

pub mod alignment_position;
pub mod ngram_frequency;

pub use alignment_position::AlignmentPosition;
pub use ngram_frequency::NgramFrequency;

/// A scoring algorithm of the prediction pipeline.
///
/// Algorithms annotate predictions with named scores. They never add, remove or reorder
/// predictions, and they only read the indexes. Scores written by algorithms registered
/// earlier are visible to later ones.
pub trait Algorithm {
    fn name(&self) -> &'static str;

    fn execute(
        &self,
        predictions: &mut [Prediction],
        corpus_index: &FrequencyIndex,
        saved_alignments_index: &FrequencyIndex,
    );
}

/// Division where a zero divisor yields 0.
pub fn divide_safe(dividend: f64, divisor: f64) -> f64 {
    if divisor == 0.0 {
        0.0
    } else {
        dividend / divisor
    }
}

#[cfg(test)]
mod tests {
    use super::divide_safe;

    #[test]
    fn division_by_zero_is_zero() {
        assert_eq!(divide_safe(3.0, 0.0), 0.0);
        assert_eq!(divide_safe(0.0, 0.0), 0.0);
        assert_eq!(divide_safe(3.0, 2.0), 1.5);
    }
}
