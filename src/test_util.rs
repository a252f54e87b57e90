use crate::{alignment::Alignment, ngram::Ngram, token::Token};

/// Splits a sentence on whitespace into positioned tokens.
pub fn tokenize_mock_sentence(sentence: &str) -> Vec<Token> {
    let words: Vec<&str> = sentence.split_whitespace().collect();
    let sentence_character_length = sentence.chars().count();
    let mut character_position = 0;

    words
        .iter()
        .enumerate()
        .map(|(position, word)| {
            let token = Token::new(
                *word,
                position,
                character_position,
                words.len(),
                sentence_character_length,
            );
            character_position += word.chars().count() + 1;
            token
        })
        .collect()
}

pub fn mock_ngram(sentence: &str) -> Ngram {
    Ngram::new(tokenize_mock_sentence(sentence))
}

pub fn mock_alignment(source: &str, target: &str) -> Alignment {
    Alignment::new(mock_ngram(source), mock_ngram(target))
}

/// Reverses the characters of every word, producing a stand-in "translation".
pub fn reverse_sentence_words(sentence: &str) -> String {
    sentence
        .split_whitespace()
        .map(|word| word.chars().rev().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}
