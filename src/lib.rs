//! Statistical prediction of word and phrase alignments between parallel sentences.
//!
//! Tokens come from [`lexer`] or from any other lexer. An [`Engine`] counts n-grams of a
//! bilingual corpus and of saved alignments, scores all candidate alignments of a sentence pair
//! and resolves them into ranked [`Suggestion`]s.

pub mod algorithms;
pub mod alignment;
pub mod candidates;
pub mod confidence;
pub mod config;
pub mod engine;
pub mod error;
pub mod frequency_index;
pub mod lexer;
pub mod ngram;
pub mod occurrence;
pub mod prediction;
pub mod suggestion;
#[cfg(test)]
mod test_util;
pub mod token;

pub use alignment::Alignment;
pub use config::EngineConfig;
pub use engine::Engine;
pub use error::{Error, Result};
pub use ngram::Ngram;
pub use prediction::Prediction;
pub use suggestion::Suggestion;
pub use token::Token;
