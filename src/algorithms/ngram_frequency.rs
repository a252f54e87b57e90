use std::collections::HashMap;

use crate::{frequency_index::FrequencyIndex, prediction::Prediction};

use super::{divide_safe, Algorithm};

pub const ALIGNMENT_FREQUENCY_CORPUS: &str = "alignmentFrequencyCorpus";
pub const ALIGNMENT_FREQUENCY_SAVED_ALIGNMENTS: &str = "alignmentFrequencySavedAlignments";
pub const NGRAM_FREQUENCY_CORPUS_SOURCE: &str = "ngramFrequencyCorpusSource";
pub const NGRAM_FREQUENCY_CORPUS_TARGET: &str = "ngramFrequencyCorpusTarget";
pub const NGRAM_FREQUENCY_SAVED_ALIGNMENTS_SOURCE: &str = "ngramFrequencySavedAlignmentsSource";
pub const NGRAM_FREQUENCY_SAVED_ALIGNMENTS_TARGET: &str = "ngramFrequencySavedAlignmentsTarget";
pub const FREQUENCY_RATIO_CORPUS_SOURCE: &str = "frequencyRatioCorpusSource";
pub const FREQUENCY_RATIO_CORPUS_TARGET: &str = "frequencyRatioCorpusTarget";
pub const FREQUENCY_RATIO_SAVED_ALIGNMENTS_SOURCE: &str = "frequencyRatioSavedAlignmentsSource";
pub const FREQUENCY_RATIO_SAVED_ALIGNMENTS_TARGET: &str = "frequencyRatioSavedAlignmentsTarget";
pub const ALIGNMENT_FREQUENCY_CORPUS_FILTERED: &str = "alignmentFrequencyCorpusFiltered";
pub const ALIGNMENT_FREQUENCY_SAVED_ALIGNMENTS_FILTERED: &str =
    "alignmentFrequencySavedAlignmentsFiltered";
pub const FREQUENCY_RATIO_CORPUS_SOURCE_FILTERED: &str = "frequencyRatioCorpusSourceFiltered";
pub const FREQUENCY_RATIO_SAVED_ALIGNMENTS_FILTERED: &str = "frequencyRatioSavedAlignmentsFiltered";

/// Scores predictions by how often their alignment and n-grams were observed in the corpus
/// and in the saved alignments.
///
/// The filtered ratios relate a prediction's alignment frequency to the summed frequency of
/// all predictions in the current set that share its alignment key, so they need the whole
/// set to be scored before they can be calculated.
pub struct NgramFrequency;

impl Algorithm for NgramFrequency {
    fn name(&self) -> &'static str {
        "n-gram frequency"
    }

    fn execute(
        &self,
        predictions: &mut [Prediction],
        corpus_index: &FrequencyIndex,
        saved_alignments_index: &FrequencyIndex,
    ) {
        let mut alignment_frequency_corpus_sums: HashMap<String, f64> = HashMap::new();
        let mut alignment_frequency_saved_alignments_sums: HashMap<String, f64> = HashMap::new();

        for prediction in predictions.iter_mut() {
            let alignment = prediction.alignment();
            let alignment_frequency_corpus = corpus_index.alignment_frequency(alignment) as f64;
            let alignment_frequency_saved_alignments =
                saved_alignments_index.alignment_frequency(alignment) as f64;

            let ngram_frequency_corpus_source =
                corpus_index.source_ngram_frequency(alignment.source()) as f64;
            let ngram_frequency_corpus_target =
                corpus_index.target_ngram_frequency(alignment.target()) as f64;
            let ngram_frequency_saved_alignments_source =
                saved_alignments_index.source_ngram_frequency(alignment.source()) as f64;
            let ngram_frequency_saved_alignments_target =
                saved_alignments_index.target_ngram_frequency(alignment.target()) as f64;

            prediction.set_scores([
                (ALIGNMENT_FREQUENCY_CORPUS, alignment_frequency_corpus),
                (
                    ALIGNMENT_FREQUENCY_SAVED_ALIGNMENTS,
                    alignment_frequency_saved_alignments,
                ),
                (NGRAM_FREQUENCY_CORPUS_SOURCE, ngram_frequency_corpus_source),
                (NGRAM_FREQUENCY_CORPUS_TARGET, ngram_frequency_corpus_target),
                (
                    NGRAM_FREQUENCY_SAVED_ALIGNMENTS_SOURCE,
                    ngram_frequency_saved_alignments_source,
                ),
                (
                    NGRAM_FREQUENCY_SAVED_ALIGNMENTS_TARGET,
                    ngram_frequency_saved_alignments_target,
                ),
                (
                    FREQUENCY_RATIO_CORPUS_SOURCE,
                    divide_safe(alignment_frequency_corpus, ngram_frequency_corpus_source),
                ),
                (
                    FREQUENCY_RATIO_CORPUS_TARGET,
                    divide_safe(alignment_frequency_corpus, ngram_frequency_corpus_target),
                ),
                (
                    FREQUENCY_RATIO_SAVED_ALIGNMENTS_SOURCE,
                    divide_safe(
                        alignment_frequency_saved_alignments,
                        ngram_frequency_saved_alignments_source,
                    ),
                ),
                (
                    FREQUENCY_RATIO_SAVED_ALIGNMENTS_TARGET,
                    divide_safe(
                        alignment_frequency_saved_alignments,
                        ngram_frequency_saved_alignments_target,
                    ),
                ),
            ]);

            let key = prediction.key();
            *alignment_frequency_corpus_sums
                .entry(key.clone())
                .or_insert(0.0) += alignment_frequency_corpus;
            *alignment_frequency_saved_alignments_sums
                .entry(key)
                .or_insert(0.0) += alignment_frequency_saved_alignments;
        }

        for prediction in predictions.iter_mut() {
            let key = prediction.key();
            let alignment_frequency_corpus =
                prediction.score(ALIGNMENT_FREQUENCY_CORPUS).unwrap_or(0.0);
            let alignment_frequency_saved_alignments = prediction
                .score(ALIGNMENT_FREQUENCY_SAVED_ALIGNMENTS)
                .unwrap_or(0.0);
            let alignment_frequency_corpus_filtered = alignment_frequency_corpus_sums
                .get(&key)
                .copied()
                .unwrap_or(0.0);
            let alignment_frequency_saved_alignments_filtered =
                alignment_frequency_saved_alignments_sums
                    .get(&key)
                    .copied()
                    .unwrap_or(0.0);

            prediction.set_scores([
                (
                    ALIGNMENT_FREQUENCY_CORPUS_FILTERED,
                    alignment_frequency_corpus_filtered,
                ),
                (
                    ALIGNMENT_FREQUENCY_SAVED_ALIGNMENTS_FILTERED,
                    alignment_frequency_saved_alignments_filtered,
                ),
                (
                    FREQUENCY_RATIO_CORPUS_SOURCE_FILTERED,
                    divide_safe(
                        alignment_frequency_corpus,
                        alignment_frequency_corpus_filtered,
                    ),
                ),
                (
                    FREQUENCY_RATIO_SAVED_ALIGNMENTS_FILTERED,
                    divide_safe(
                        alignment_frequency_saved_alignments,
                        alignment_frequency_saved_alignments_filtered,
                    ),
                ),
            ]);
        }
    }
}
