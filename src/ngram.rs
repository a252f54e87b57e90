use std::fmt;

use crate::token::Token;

/// A contiguous span of tokens from one sentence.
///
/// An empty n-gram denotes "no span" and is used as the target of unaligned predictions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ngram {
    tokens: Vec<Token>,
}

impl Ngram {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The text of all tokens joined by single spaces.
    /// N-grams with equal keys are the same alignment type regardless of where they were drawn from.
    pub fn key(&self) -> String {
        self.tokens
            .iter()
            .map(Token::text)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Sentence position of the first token.
    pub fn start(&self) -> Option<usize> {
        self.tokens.first().map(Token::position)
    }

    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.tokens.iter().map(Token::position)
    }

    /// The mean sentence position of the tokens, or 0 for an empty n-gram.
    pub fn token_position(&self) -> f64 {
        if self.tokens.is_empty() {
            return 0.0;
        }

        self.positions().sum::<usize>() as f64 / self.tokens.len() as f64
    }

    /// The token position as a fraction of the sentence, in `[0, 1]`.
    /// Sentences of a single token and empty n-grams are at 0.
    pub fn relative_token_position(&self) -> f64 {
        let last_position = self
            .tokens
            .first()
            .map(|token| token.sentence_token_length().saturating_sub(1))
            .unwrap_or(0);

        if last_position == 0 {
            0.0
        } else {
            self.token_position() / last_position as f64
        }
    }
}

impl fmt::Display for Ngram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
