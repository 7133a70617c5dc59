//! Token stream: whitespace/comment skipping plus one-token lookahead on
//! top of the raw [`crate::tokenizer::Tokenizer`].

use crate::error::{ParseError, ParseResult};
use crate::token::{Token, TokenKind};
use crate::tokenizer::Tokenizer;

pub struct TokenStream {
    tokenizer: Tokenizer,
    peeked: Option<Token>,
}

impl TokenStream {
    pub fn new(source: &str) -> Self {
        Self {
            tokenizer: Tokenizer::new(source),
            peeked: None,
        }
    }

    fn fetch(&mut self) -> Token {
        loop {
            let tok = self.tokenizer.next();
            match tok.kind {
                TokenKind::WhiteSpace | TokenKind::Comment => continue,
                _ => return tok,
            }
        }
    }

    /// Look at the next significant token without consuming it.
    pub fn peek(&mut self) -> &Token {
        if self.peeked.is_none() {
            self.peeked = Some(self.fetch());
        }
        self.peeked.as_ref().expect("just filled")
    }

    /// A clone of the peeked token; handy when an error needs to own it.
    pub fn current_token(&mut self) -> Token {
        self.peek().clone()
    }

    /// Consume and return the next significant token.
    pub fn next(&mut self) -> Token {
        match self.peeked.take() {
            Some(tok) => tok,
            None => self.fetch(),
        }
    }

    pub fn sees(&mut self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    /// Case-insensitive match against a lowercase keyword.
    pub fn sees_word(&mut self, word: &str) -> bool {
        let tok = self.peek();
        tok.kind == TokenKind::Word && tok.text.eq_ignore_ascii_case(word)
    }

    pub fn sees_words(&mut self, words: &[&str]) -> bool {
        words.iter().any(|w| self.sees_word(w))
    }

    pub fn sees_and_eat(&mut self, kind: TokenKind) -> bool {
        if self.sees(kind) {
            self.next();
            true
        } else {
            false
        }
    }

    pub fn sees_word_and_eat(&mut self, word: &str) -> bool {
        if self.sees_word(word) {
            self.next();
            true
        } else {
            false
        }
    }

    /// Require `kind`, reporting `expected` (the kind's own description by
    /// default) if it isn't there.
    pub fn eat(&mut self, kind: TokenKind) -> ParseResult<Token> {
        if self.sees(kind) {
            Ok(self.next())
        } else {
            Err(self.unexpected(kind.generic_expected()))
        }
    }

    /// Like [`Self::eat`] but with a caller-supplied `expected` description,
    /// for the contextual messages (`"type name"`, `"field name"`, ...).
    pub fn take(&mut self, kind: TokenKind, expected: impl Into<String>) -> ParseResult<Token> {
        if self.sees(kind) {
            Ok(self.next())
        } else {
            Err(self.unexpected(expected))
        }
    }

    pub fn eat_word(&mut self, word: &str) -> ParseResult<Token> {
        if self.sees_word(word) {
            Ok(self.next())
        } else {
            Err(self.unexpected(format!("keyword \"{}\"", word.to_ascii_lowercase())))
        }
    }

    pub fn unexpected(&mut self, expected: impl Into<String>) -> ParseError {
        ParseError::unexpected(expected, self.current_token())
    }

    pub fn is_at_end(&mut self) -> bool {
        self.sees(TokenKind::EndOfInput)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_whitespace_and_comments_between_words() {
        let mut stream = TokenStream::new("A  { note } B");
        assert!(stream.sees_word("a"));
        stream.next();
        assert!(stream.sees_word("b"));
    }

    #[test]
    fn peek_is_idempotent() {
        let mut stream = TokenStream::new("Foo Bar");
        assert_eq!(stream.peek().text, "Foo");
        assert_eq!(stream.peek().text, "Foo");
        assert_eq!(stream.next().text, "Foo");
        assert_eq!(stream.next().text, "Bar");
    }

    #[test]
    fn eat_word_is_case_insensitive() {
        let mut stream = TokenStream::new("UNIT Foo");
        assert!(stream.eat_word("unit").is_ok());
    }

    #[test]
    fn eat_punct_reports_token_form() {
        let mut stream = TokenStream::new("System");
        let err = stream.eat(TokenKind::Punct(';')).unwrap_err();
        assert_eq!(
            err.to_string(),
            "token \";\" expected but was word \"System\" at 1:1"
        );
    }
}
