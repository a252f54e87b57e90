use clap::ValueEnum;

use crate::{
    algorithms::{
        alignment_position::ALIGNMENT_POSITION, ngram_frequency::ALIGNMENT_FREQUENCY_CORPUS,
    },
    config::Weights,
    frequency_index::FrequencyIndex,
    prediction::Prediction,
};

pub const CONFIDENCE: &str = "confidence";

/// Which scores make up the composite confidence, and how saved alignments affect it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ConfidenceProfile {
    /// The weighted mean of the alignment position and the corpus alignment frequency,
    /// plus 1 if the alignment key has been saved before.
    #[default]
    V1,
}

impl ConfidenceProfile {
    pub fn score_names(self) -> &'static [&'static str] {
        match self {
            ConfidenceProfile::V1 => &[ALIGNMENT_POSITION, ALIGNMENT_FREQUENCY_CORPUS],
        }
    }

    pub fn saved_alignment_boost(self) -> f64 {
        match self {
            ConfidenceProfile::V1 => 1.0,
        }
    }
}

/// The weighted arithmetic mean of the named scores.
///
/// Names without a configured weight have weight 1. Names the prediction has no score for
/// contribute 0 but still count towards the total weight.
pub fn calculate_weighted_confidence(
    prediction: &Prediction,
    score_names: &[&str],
    weights: &Weights,
) -> f64 {
    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;

    for name in score_names {
        let weight = weights.get(*name).copied().unwrap_or(1.0);
        weighted_sum += prediction.score(name).unwrap_or(0.0) * weight;
        total_weight += weight;
    }

    if total_weight == 0.0 {
        0.0
    } else {
        weighted_sum / total_weight
    }
}

/// Writes the composite confidence onto every prediction.
pub fn calculate_confidence(
    predictions: &mut [Prediction],
    saved_alignments_index: &FrequencyIndex,
    profile: ConfidenceProfile,
    weights: &Weights,
) {
    for prediction in predictions {
        let mut confidence =
            calculate_weighted_confidence(prediction, profile.score_names(), weights);
        if saved_alignments_index.alignment_frequency(prediction.alignment()) > 0 {
            confidence += profile.saved_alignment_boost();
        }
        prediction.set_score(CONFIDENCE, confidence);
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        config::Weights, frequency_index::FrequencyIndex, prediction::Prediction,
        test_util::mock_alignment,
    };

    use super::{calculate_confidence, calculate_weighted_confidence, ConfidenceProfile};

    #[test]
    fn weighted_scores() {
        let mut prediction = Prediction::new(mock_alignment("hello", "world"));
        prediction.set_scores([("score1", 3.0), ("score2", 5.0), ("score3", 6.0)]);

        let unweighted =
            calculate_weighted_confidence(&prediction, &["score1", "score3"], &Weights::new());
        assert_eq!(unweighted, 4.5);

        let weights = Weights::from([("score1".to_string(), 0.5), ("score2".to_string(), 100.0)]);
        let weighted = calculate_weighted_confidence(&prediction, &["score1", "score3"], &weights);
        assert_eq!(weighted, 5.0);
    }

    #[test]
    fn missing_scores_count_as_zero() {
        let mut prediction = Prediction::new(mock_alignment("hello", "world"));
        prediction.set_score("score1", 3.0);
        let confidence =
            calculate_weighted_confidence(&prediction, &["score1", "unknown"], &Weights::new());
        assert_eq!(confidence, 1.5);

        let weights = Weights::from([("score1".to_string(), 0.0)]);
        assert_eq!(
            calculate_weighted_confidence(&prediction, &["score1"], &weights),
            0.0
        );
    }

    #[test]
    fn prediction_confidence() {
        let mut predictions = [Prediction::new(mock_alignment("hello", "world"))];
        predictions[0].set_scores([("alignmentPosition", 3.0), ("alignmentFrequencyCorpus", 5.0)]);

        calculate_confidence(
            &mut predictions,
            &FrequencyIndex::new(),
            ConfidenceProfile::V1,
            &Weights::new(),
        );
        assert_eq!(predictions[0].confidence(), 4.0);
    }

    #[test]
    fn saved_alignments_boost_confidence() {
        let mut saved_alignments_index = FrequencyIndex::new();
        saved_alignments_index.add_alignments([&mock_alignment("hello", "world")]);

        let mut predictions = [
            Prediction::new(mock_alignment("hello", "world")),
            Prediction::new(mock_alignment("hello", "there")),
        ];
        for prediction in &mut predictions {
            prediction.set_scores([("alignmentPosition", 3.0), ("alignmentFrequencyCorpus", 5.0)]);
        }

        calculate_confidence(
            &mut predictions,
            &saved_alignments_index,
            ConfidenceProfile::V1,
            &Weights::new(),
        );
        assert_eq!(predictions[0].confidence(), 5.0);
        assert_eq!(predictions[1].confidence(), 4.0);
    }
}
