use crate::{
    alignment::Alignment,
    error::{Error, Result},
    ngram::Ngram,
    token::Token,
};

/// Splits a sentence into word tokens, dropping whitespace and punctuation.
///
/// Combining marks and joiners stay attached to their word, so pointed scripts tokenize whole.
pub fn tokenize(sentence: &str) -> Vec<Token> {
    let mut words: Vec<(String, usize)> = Vec::new();
    let mut current = String::new();
    let mut current_start = 0;
    let mut sentence_character_length = 0;

    for (character_position, character) in sentence.chars().enumerate() {
        sentence_character_length += 1;
        if character.is_whitespace() || is_punctuation(character) {
            if !current.is_empty() {
                words.push((std::mem::take(&mut current), current_start));
            }
        } else {
            if current.is_empty() {
                current_start = character_position;
            }
            current.push(character);
        }
    }
    if !current.is_empty() {
        words.push((current, current_start));
    }

    let sentence_token_length = words.len();
    words
        .into_iter()
        .enumerate()
        .map(|(position, (text, character_position))| {
            Token::new(
                text,
                position,
                character_position,
                sentence_token_length,
                sentence_character_length,
            )
        })
        .collect()
}

fn is_punctuation(character: char) -> bool {
    (character.is_ascii_punctuation() && character != '\'' && character != '-')
        || matches!(
            character,
            '‘' | '’' | '“' | '”' | '«' | '»' | '…' | '—' | '–' | '¿' | '¡' | '·' | '\u{37e}' | '׃' | '׀'
        )
}

/// Tokenizes every line of a multi-line text as its own sentence.
pub fn tokenize_lines(text: &str) -> Vec<Vec<Token>> {
    text.lines().map(tokenize).collect()
}

/// Pairs the lines of two texts into alignments, one source phrase and one target phrase per line.
pub fn alignments_from_lines(source: &str, target: &str) -> Result<Vec<Alignment>> {
    let source_lines: Vec<&str> = source.lines().collect();
    let target_lines: Vec<&str> = target.lines().collect();
    if source_lines.len() != target_lines.len() {
        return Err(Error::SavedAlignmentLengthMismatch {
            source_count: source_lines.len(),
            target_count: target_lines.len(),
        });
    }

    Ok(source_lines
        .into_iter()
        .zip(target_lines)
        .map(|(source, target)| {
            Alignment::new(Ngram::new(tokenize(source)), Ngram::new(tokenize(target)))
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use crate::error::Error;

    use super::{alignments_from_lines, tokenize, tokenize_lines};

    #[test]
    fn positions_and_offsets() {
        let tokens = tokenize("Hello, world! It's here.");
        let texts: Vec<_> = tokens.iter().map(|token| token.text()).collect();
        assert_eq!(texts, ["Hello", "world", "It's", "here"]);
        assert_eq!(tokens[1].position(), 1);
        assert_eq!(tokens[1].character_position(), 7);
        assert_eq!(tokens[3].character_position(), 19);
        assert!(tokens
            .iter()
            .all(|token| token.sentence_token_length() == 4
                && token.sentence_character_length() == 24));
    }

    #[test]
    fn keeps_combining_marks_in_words() {
        let tokens = tokenize("וַ⁠יַּ֕עַשׂ כַּ⁠אֲשֶׁ֛ר׃");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text(), "וַ⁠יַּ֕עַשׂ");
        assert_eq!(tokens[1].text(), "כַּ⁠אֲשֶׁ֛ר");
    }

    #[test]
    fn lines_are_sentences() {
        let sentences = tokenize_lines("a b\nc");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].len(), 2);
        assert_eq!(sentences[1][0].position(), 0);
    }

    #[test]
    fn alignments_from_paired_lines() {
        let alignments = alignments_from_lines("Θεὸς\nλέγων", "the God\nsaying").unwrap();
        assert_eq!(alignments.len(), 2);
        assert_eq!(alignments[0].key(), "Θεὸς->the God");

        assert!(matches!(
            alignments_from_lines("a\nb", "x"),
            Err(Error::SavedAlignmentLengthMismatch {
                source_count: 2,
                target_count: 1
            })
        ));
    }
}
