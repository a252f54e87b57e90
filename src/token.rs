use std::{collections::BTreeMap, fmt};

/// A lexical unit of a sentence, as produced by a lexer.
///
/// Tokens are immutable once created. Two tokens are content-equal when their texts match,
/// which is what occurrence numbering is based on, but they are only the same physical token
/// if they also share a position in the same sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    text: String,
    position: usize,
    character_position: usize,
    sentence_token_length: usize,
    sentence_character_length: usize,
    metadata: BTreeMap<String, String>,
}

impl Token {
    pub fn new(
        text: impl Into<String>,
        position: usize,
        character_position: usize,
        sentence_token_length: usize,
        sentence_character_length: usize,
    ) -> Self {
        Self {
            text: text.into(),
            position,
            character_position,
            sentence_token_length,
            sentence_character_length,
            metadata: Default::default(),
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Zero-based index of this token within its sentence.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Offset of the first character of this token within its sentence, counted in characters.
    pub fn character_position(&self) -> usize {
        self.character_position
    }

    pub fn sentence_token_length(&self) -> usize {
        self.sentence_token_length
    }

    pub fn sentence_character_length(&self) -> usize {
        self.sentence_character_length
    }

    pub fn metadata(&self) -> &BTreeMap<String, String> {
        &self.metadata
    }

    pub fn has_same_text(&self, other: &Token) -> bool {
        self.text == other.text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::Token;

    #[test]
    fn empty_token() {
        let token = Token::new("", 0, 0, 0, 0);
        assert_eq!(token.to_string(), "");
    }

    #[test]
    fn passes_through_metadata() {
        let token = Token::new("hello", 0, 0, 1, 5).with_metadata("extra", "value");
        assert_eq!(token.to_string(), "hello");
        assert_eq!(token.metadata().get("extra").map(String::as_str), Some("value"));
    }

    #[test]
    fn content_equality_ignores_position() {
        let first = Token::new("God", 3, 17, 10, 40);
        let second = Token::new("God", 7, 31, 10, 40);
        assert!(first.has_same_text(&second));
        assert_ne!(first, second);
    }
}
