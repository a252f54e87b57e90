use std::collections::HashSet;

use log::debug;

use crate::{
    algorithms::{Algorithm, AlignmentPosition, NgramFrequency},
    alignment::Alignment,
    candidates::{generate_predictions, generate_sentence_ngrams},
    confidence::calculate_confidence,
    config::EngineConfig,
    error::Result,
    frequency_index::FrequencyIndex,
    prediction::Prediction,
    suggestion::{suggest, Suggestion},
    token::Token,
};

/// Predicts n-gram alignments between sentence pairs.
///
/// The engine owns the corpus index, the saved-alignment index and the ordered registry of
/// scoring algorithms. Appending to the indexes requires exclusive access, while any number of
/// predictions may run against a shared engine.
pub struct Engine {
    config: EngineConfig,
    algorithms: Vec<Box<dyn Algorithm + Send + Sync>>,
    corpus_index: FrequencyIndex,
    saved_alignments_index: FrequencyIndex,
}

impl Engine {
    /// Creates an engine with the n-gram frequency and alignment position algorithms.
    pub fn new(config: EngineConfig) -> Self {
        let mut engine = Self::without_algorithms(config);
        engine.register_algorithm(NgramFrequency);
        engine.register_algorithm(AlignmentPosition);
        engine
    }

    pub fn without_algorithms(config: EngineConfig) -> Self {
        Self {
            config,
            algorithms: Default::default(),
            corpus_index: Default::default(),
            saved_alignments_index: Default::default(),
        }
    }

    /// Replaces the corpus index, e.g. with one loaded from a snapshot.
    pub fn with_corpus_index(mut self, corpus_index: FrequencyIndex) -> Self {
        self.corpus_index = corpus_index;
        self
    }

    /// Appends an algorithm to the end of the pipeline.
    pub fn register_algorithm(&mut self, algorithm: impl Algorithm + Send + Sync + 'static) {
        self.algorithms.push(Box::new(algorithm));
    }

    pub fn algorithm_names(&self) -> Vec<&'static str> {
        self.algorithms
            .iter()
            .map(|algorithm| algorithm.name())
            .collect()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn corpus_index(&self) -> &FrequencyIndex {
        &self.corpus_index
    }

    pub fn saved_alignments_index(&self) -> &FrequencyIndex {
        &self.saved_alignments_index
    }

    /// Adds sentence pairs to the corpus index. The source and target sentences must
    /// correspond one to one.
    pub fn add_corpus(&mut self, source: &[Vec<Token>], target: &[Vec<Token>]) -> Result<()> {
        self.corpus_index
            .add_corpus(source, target, self.config.max_ngram_length)
    }

    pub fn add_saved_alignments(&mut self, alignments: &[Alignment]) {
        self.saved_alignments_index.add_alignments(alignments);
        debug!(
            "Saved alignment index now holds {} alignment keys",
            self.saved_alignments_index.alignment_count()
        );
    }

    /// Generates the candidate predictions of a sentence pair and runs every algorithm on them.
    pub fn run(&self, source: &[Token], target: &[Token]) -> Result<Vec<Prediction>> {
        let source_ngrams = generate_sentence_ngrams(source, self.config.max_ngram_length)?;
        let target_ngrams = generate_sentence_ngrams(target, self.config.max_ngram_length)?;
        let mut predictions = generate_predictions(&source_ngrams, &target_ngrams);

        for algorithm in &self.algorithms {
            debug!("Running algorithm {}", algorithm.name());
            algorithm.execute(
                &mut predictions,
                &self.corpus_index,
                &self.saved_alignments_index,
            );
        }

        Ok(predictions)
    }

    /// Writes the composite confidence onto the predictions.
    pub fn score(&self, predictions: &mut [Prediction]) {
        calculate_confidence(
            predictions,
            &self.saved_alignments_index,
            self.config.confidence_profile,
            &self.config.weights,
        );
    }

    /// Predicts up to `max_suggestions` ranked alignments of the sentence pair.
    pub fn predict(
        &self,
        source: &[Token],
        target: &[Token],
        max_suggestions: usize,
    ) -> Result<Vec<Suggestion>> {
        let mut predictions = self.run(source, target)?;
        self.score(&mut predictions);
        Ok(suggest(predictions, source, target, max_suggestions))
    }

    /// Like [`Engine::predict`], but only considers predictions whose key occurs in the benchmark.
    pub fn predict_with_benchmark(
        &self,
        source: &[Token],
        target: &[Token],
        benchmark: &[Alignment],
        max_suggestions: usize,
    ) -> Result<Vec<Suggestion>> {
        let benchmark_keys: HashSet<String> = benchmark.iter().map(Alignment::key).collect();
        let mut predictions = self.run(source, target)?;
        self.score(&mut predictions);
        predictions.retain(|prediction| benchmark_keys.contains(&prediction.key()));
        Ok(suggest(predictions, source, target, max_suggestions))
    }
}
