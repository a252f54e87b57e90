use std::{
    collections::{HashMap, HashSet},
    fmt,
    rc::Rc,
};

use log::{debug, trace};

use crate::{occurrence::ngram_occurrence, prediction::Prediction, token::Token};

/// A consistent alignment of a sentence pair, made of non-overlapping predictions.
#[derive(Debug, Clone)]
pub struct Suggestion {
    predictions: Vec<Rc<Prediction>>,
}

impl Suggestion {
    /// The predictions in the order they were selected.
    pub fn predictions(&self) -> &[Rc<Prediction>] {
        &self.predictions
    }

    /// The mean confidence of the predictions.
    pub fn compound_confidence(&self) -> f64 {
        if self.predictions.is_empty() {
            0.0
        } else {
            self.predictions
                .iter()
                .map(|prediction| prediction.confidence())
                .sum::<f64>()
                / self.predictions.len() as f64
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "confidence {:.4}", self.compound_confidence())?;
        for prediction in &self.predictions {
            writeln!(f, "  {prediction}")?;
        }
        Ok(())
    }
}

/// Resolves scored predictions of one sentence pair into at most `max_suggestions` ranked
/// suggestions.
///
/// Each suggestion is a greedy cover: predictions are taken by descending confidence, ties in
/// generation order, as long as none of their tokens is already taken. A prediction whose key
/// is taken binds to the lowest occurrence of that key that is still free, so repeated text is
/// consumed in sentence order. Alternative suggestions are built by withholding all predictions
/// of the `i` best aligned keys. Unaligned predictions are never withheld, so every suggestion covers
/// the whole source sentence.
pub fn suggest(
    predictions: Vec<Prediction>,
    source: &[Token],
    target: &[Token],
    max_suggestions: usize,
) -> Vec<Suggestion> {
    let predictions: Vec<Rc<Prediction>> = predictions.into_iter().map(Rc::new).collect();
    let ranking = rank(&predictions);

    let occurrences: Vec<(usize, usize)> = predictions
        .iter()
        .map(|prediction| {
            (
                ngram_occurrence(source, prediction.source()),
                ngram_occurrence(target, prediction.target()),
            )
        })
        .collect();
    let mut key_groups: HashMap<String, Vec<usize>> = HashMap::new();
    for (index, prediction) in predictions.iter().enumerate() {
        key_groups.entry(prediction.key()).or_default().push(index);
    }
    for group in key_groups.values_mut() {
        group.sort_by_key(|&index| occurrences[index]);
    }

    // Aligned keys in order of their best ranked prediction.
    let mut aligned_keys: Vec<String> = Vec::new();
    for &index in &ranking {
        let prediction = &predictions[index];
        if !prediction.alignment().is_unaligned() && !aligned_keys.contains(&prediction.key()) {
            aligned_keys.push(prediction.key());
        }
    }

    let mut selections: Vec<Vec<usize>> = Vec::new();
    let mut suggestions = Vec::new();
    for withheld in 0..max_suggestions {
        if withheld > 0 && withheld > aligned_keys.len() {
            break;
        }

        let excluded: HashSet<&str> = aligned_keys[..withheld]
            .iter()
            .map(String::as_str)
            .collect();
        let selection = cover(&predictions, &ranking, &key_groups, &excluded, source);

        let mut selection_set = selection.clone();
        selection_set.sort_unstable();
        if selections.contains(&selection_set) {
            trace!("Suggestion {withheld} duplicates an earlier one");
            continue;
        }
        selections.push(selection_set);

        suggestions.push(Suggestion {
            predictions: selection
                .into_iter()
                .map(|index| Rc::clone(&predictions[index]))
                .collect(),
        });
    }

    suggestions.sort_by(|a, b| b.compound_confidence().total_cmp(&a.compound_confidence()));
    debug!(
        "Selected {} suggestions from {} predictions",
        suggestions.len(),
        predictions.len()
    );
    suggestions
}

/// Indices of the predictions by descending confidence. The sort is stable, so ties keep
/// generation order.
fn rank(predictions: &[Rc<Prediction>]) -> Vec<usize> {
    let mut ranking: Vec<usize> = (0..predictions.len()).collect();
    ranking.sort_by(|&a, &b| {
        predictions[b]
            .confidence()
            .total_cmp(&predictions[a].confidence())
    });
    ranking
}

fn cover(
    predictions: &[Rc<Prediction>],
    ranking: &[usize],
    key_groups: &HashMap<String, Vec<usize>>,
    excluded: &HashSet<&str>,
    source: &[Token],
) -> Vec<usize> {
    let mut used_source: HashSet<usize> = HashSet::new();
    let mut used_target: HashSet<usize> = HashSet::new();
    let mut selection = Vec::new();

    let is_admissible = |index: usize, used_source: &HashSet<usize>, used_target: &HashSet<usize>| {
        let prediction = &predictions[index];
        !excluded.contains(prediction.key().as_str())
            && prediction
                .source()
                .positions()
                .all(|position| !used_source.contains(&position))
            && prediction
                .target()
                .positions()
                .all(|position| !used_target.contains(&position))
    };

    let mut cursor = 0;
    while let Some(&index) = ranking.get(cursor) {
        if !is_admissible(index, &used_source, &used_target) {
            cursor += 1;
            continue;
        }

        // The group contains `index` itself, so there always is an admissible member.
        let bound = key_groups
            .get(&predictions[index].key())
            .and_then(|group| {
                group
                    .iter()
                    .copied()
                    .find(|&candidate| is_admissible(candidate, &used_source, &used_target))
            })
            .unwrap_or(index);
        if bound == index {
            cursor += 1;
        } else {
            // `index` stays under consideration for the next free occurrence.
            trace!(
                "Binding {} to an earlier occurrence",
                predictions[index].alignment()
            );
        }

        let prediction = &predictions[bound];
        used_source.extend(prediction.source().positions());
        used_target.extend(prediction.target().positions());
        selection.push(bound);

        if source
            .iter()
            .all(|token| used_source.contains(&token.position()))
        {
            break;
        }
    }

    selection
}
