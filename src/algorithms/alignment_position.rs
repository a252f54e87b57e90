use crate::{frequency_index::FrequencyIndex, prediction::Prediction};

use super::Algorithm;

pub const ALIGNMENT_POSITION: &str = "alignmentPosition";

/// Scores how closely the relative positions of the source and target n-grams within their
/// sentences agree. Only suited to fairly literal translations.
pub struct AlignmentPosition;

impl Algorithm for AlignmentPosition {
    fn name(&self) -> &'static str {
        "alignment position"
    }

    fn execute(
        &self,
        predictions: &mut [Prediction],
        _corpus_index: &FrequencyIndex,
        _saved_alignments_index: &FrequencyIndex,
    ) {
        for prediction in predictions {
            let delta = (prediction.source().relative_token_position()
                - prediction.target().relative_token_position())
            .abs();
            prediction.set_score(ALIGNMENT_POSITION, 1.0 - delta);
        }
    }
}
