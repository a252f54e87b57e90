//! Occurrence numbering of repeated text within a sentence.
//!
//! Occurrences are derived from sentence positions and text equality whenever they are needed,
//! so they stay correct no matter how tokens are recombined into n-grams.

use crate::{ngram::Ngram, token::Token};

/// The 1-based ordinal of the n-gram's text among all windows of the sentence with the same
/// length and text, counted by start position. Empty n-grams have occurrence 0.
pub fn ngram_occurrence(sentence: &[Token], ngram: &Ngram) -> usize {
    let Some(start) = ngram.start() else {
        return 0;
    };

    sentence
        .windows(ngram.len())
        .filter(|window| {
            window[0].position() <= start
                && window
                    .iter()
                    .zip(ngram.tokens())
                    .all(|(a, b)| a.has_same_text(b))
        })
        .count()
}

#[cfg(test)]
mod tests {
    use crate::{ngram::Ngram, test_util::tokenize_mock_sentence};

    use super::ngram_occurrence;

    #[test]
    fn repeated_tokens_are_numbered_left_to_right() {
        let sentence = tokenize_mock_sentence("the God of Abraham and the God of Isaac");
        let occurrences: Vec<_> = sentence
            .iter()
            .map(|token| ngram_occurrence(&sentence, &Ngram::new(vec![token.clone()])))
            .collect();
        assert_eq!(occurrences, [1, 1, 1, 1, 1, 2, 2, 2, 1]);
    }

    #[test]
    fn repeated_ngrams() {
        let sentence = tokenize_mock_sentence("with the army with the men with");
        let second = Ngram::new(sentence[3..5].to_vec());
        assert_eq!(second.key(), "with the");
        assert_eq!(ngram_occurrence(&sentence, &second), 2);
        assert_eq!(
            ngram_occurrence(&sentence, &Ngram::new(sentence[6..7].to_vec())),
            3
        );
        assert_eq!(ngram_occurrence(&sentence, &Ngram::empty()), 0);
    }
}
