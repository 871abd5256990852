use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WORD_RUN: Regex = Regex::new(r"\p{Alphabetic}+").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Maximal run of alphabetic characters.
    Word,
    /// A single whitespace character.
    Whitespace,
    /// Any other single character: punctuation, digits, symbols.
    Punct,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    fn word(text: &str) -> Self {
        Self {
            kind: TokenKind::Word,
            text: text.to_string(),
        }
    }

    fn single(ch: char) -> Self {
        let kind = if ch.is_whitespace() {
            TokenKind::Whitespace
        } else {
            TokenKind::Punct
        };
        Self {
            kind,
            text: ch.to_string(),
        }
    }

    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }
}

/// Split `text` into a token sequence covering every character exactly once.
/// Word tokens are maximal alphabetic runs; everything else comes out as
/// single-character tokens. `rebuild` on the result reproduces `text` exactly.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut cursor = 0;

    for run in WORD_RUN.find_iter(text) {
        for ch in text[cursor..run.start()].chars() {
            tokens.push(Token::single(ch));
        }
        tokens.push(Token::word(run.as_str()));
        cursor = run.end();
    }
    for ch in text[cursor..].chars() {
        tokens.push(Token::single(ch));
    }

    tokens
}

/// Concatenate token texts in order.
pub fn rebuild(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_is_lossless() {
        let samples = [
            "Ths is a tset.",
            "  leading and trailing  ",
            "line one\nline two\r\n\ttabbed",
            "digits 123 mixed abc123def end",
            "naïve café — résumé! 🙂 ok",
            "punctuation: (a), [b]; {c}... \"quoted\"",
        ];
        for sample in samples {
            assert_eq!(rebuild(&tokenize(sample)), sample);
        }
    }

    #[test]
    fn test_word_runs_are_maximal() {
        let tokens = tokenize("hello world");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0], Token::word("hello"));
        assert_eq!(tokens[1].kind, TokenKind::Whitespace);
        assert_eq!(tokens[2], Token::word("world"));
    }

    #[test]
    fn test_digits_are_not_words() {
        let tokens = tokenize("abc123");
        assert_eq!(tokens[0], Token::word("abc"));
        for token in &tokens[1..] {
            assert_eq!(token.kind, TokenKind::Punct);
            assert_eq!(token.text.chars().count(), 1);
        }
    }

    #[test]
    fn test_non_word_tokens_are_single_chars() {
        for token in tokenize("a, b!\t?") {
            if !token.is_word() {
                assert_eq!(token.text.chars().count(), 1);
            }
        }
    }

    #[test]
    fn test_apostrophe_splits_contractions() {
        let tokens = tokenize("it's");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0], Token::word("it"));
        assert_eq!(tokens[1].kind, TokenKind::Punct);
        assert_eq!(tokens[2], Token::word("s"));
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
    }
}
