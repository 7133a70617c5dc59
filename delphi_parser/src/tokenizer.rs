//! Hand-rolled tokenizer.
//!
//! Operates on code points rather than bytes so that line/column tracking
//! stays correct in front of multi-byte UTF-8 identifiers and string
//! contents (the external contract reports 1-based code point columns).
//! This is also what makes the real/integer-range ambiguity
//! (`1..20` vs `1.2`) tractable: the one-code-point lookahead past a `.`
//! decides it on the spot.

use crate::token::{Token, TokenKind};

/// Converts source text into a flat stream of tokens, one code point cursor
/// at a time. Carries no knowledge of grammar; see [`crate::stream::TokenStream`]
/// for the layer that skips whitespace/comments and adds lookahead.
pub struct Tokenizer {
    chars: Vec<char>,
    cursor: usize,
    line: usize,
    column: usize,
}

impl Tokenizer {
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            cursor: 0,
            line: 1,
            column: 1,
        }
    }

    fn current(&self) -> Option<char> {
        self.chars.get(self.cursor).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.cursor + offset).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.current();
        if let Some(c) = c {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            self.cursor += 1;
        }
        c
    }

    /// Produce the next token. Total: once the input is exhausted this
    /// keeps returning `EndOfInput` tokens at the same position forever.
    pub fn next(&mut self) -> Token {
        let start_line = self.line;
        let start_column = self.column;
        let start = self.cursor;

        let Some(c) = self.current() else {
            return Token::new(TokenKind::EndOfInput, "", start_line, start_column);
        };

        let kind = match c {
            ';' | ':' | '.' | ',' | '=' | '(' | ')' | '[' | ']' => {
                self.advance();
                TokenKind::Punct(c)
            }

            '{' => {
                self.advance();
                loop {
                    match self.current() {
                        None => break,
                        Some('}') => {
                            self.advance();
                            break;
                        }
                        Some(_) => {
                            self.advance();
                        }
                    }
                }
                TokenKind::Comment
            }

            '/' if self.peek_at(1) == Some('/') => {
                self.advance();
                self.advance();
                loop {
                    match self.current() {
                        None | Some('\n') => break,
                        Some(_) => {
                            self.advance();
                        }
                    }
                }
                TokenKind::Comment
            }

            '\'' => {
                self.advance();
                loop {
                    match self.current() {
                        None => break,
                        Some('\\') => {
                            self.advance();
                            self.advance();
                        }
                        Some('\'') => {
                            self.advance();
                            break;
                        }
                        Some(_) => {
                            self.advance();
                        }
                    }
                }
                TokenKind::String
            }

            c if c.is_whitespace() => {
                while self.current().is_some_and(|c| c.is_whitespace()) {
                    self.advance();
                }
                TokenKind::WhiteSpace
            }

            c if is_word_start(c) => {
                while self.current().is_some_and(is_word_continue) {
                    self.advance();
                }
                TokenKind::Word
            }

            c if c.is_ascii_digit()
                || (c == '-' && self.peek_at(1).is_some_and(|d| d.is_ascii_digit())) =>
            {
                self.advance();
                let mut is_real = false;
                loop {
                    match self.current() {
                        Some(d) if d.is_ascii_digit() => {
                            self.advance();
                        }
                        Some('.') if self.peek_at(1) == Some('.') => break,
                        Some('.') if !is_real => {
                            is_real = true;
                            self.advance();
                        }
                        _ => break,
                    }
                }
                if is_real {
                    TokenKind::Real
                } else {
                    TokenKind::Integer
                }
            }

            _ => {
                self.advance();
                TokenKind::Illegal
            }
        };

        let text: String = self.chars[start..self.cursor].iter().collect();
        Token::new(kind, text, start_line, start_column)
    }
}

fn is_word_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

fn is_word_continue(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

/// Tokenize a whole source string, including the trailing `EndOfInput`.
/// Handy for tests and debugging; the parser drives a [`Tokenizer`] directly
/// through a [`crate::stream::TokenStream`].
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokenizer = Tokenizer::new(source);
    let mut tokens = Vec::new();
    loop {
        let tok = tokenizer.next();
        let is_eoi = tok.kind == TokenKind::EndOfInput;
        tokens.push(tok);
        if is_eoi {
            break;
        }
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn punctuation_and_words() {
        assert_eq!(
            kinds("type X = Integer;"),
            vec![
                TokenKind::Word,
                TokenKind::WhiteSpace,
                TokenKind::Word,
                TokenKind::WhiteSpace,
                TokenKind::Punct('='),
                TokenKind::WhiteSpace,
                TokenKind::Word,
                TokenKind::Punct(';'),
                TokenKind::EndOfInput,
            ]
        );
    }

    #[test]
    fn real_vs_range() {
        let toks = tokenize("1.2");
        assert_eq!(toks[0].kind, TokenKind::Real);
        assert_eq!(toks[0].text, "1.2");

        let toks = tokenize("1..20");
        assert_eq!(toks[0].kind, TokenKind::Integer);
        assert_eq!(toks[0].text, "1");
        assert_eq!(toks[1].kind, TokenKind::Punct('.'));
        assert_eq!(toks[2].kind, TokenKind::Punct('.'));
        assert_eq!(toks[3].kind, TokenKind::Integer);
        assert_eq!(toks[3].text, "20");
    }

    #[test]
    fn negative_integer_literal() {
        let toks = tokenize("-5");
        assert_eq!(toks[0].kind, TokenKind::Integer);
        assert_eq!(toks[0].text, "-5");
    }

    #[test]
    fn line_comment_stops_at_newline() {
        let toks = tokenize("// hello\nX");
        assert_eq!(toks[0].kind, TokenKind::Comment);
        assert_eq!(toks[0].text, "// hello");
    }

    #[test]
    fn brace_comment_can_span_lines() {
        let toks = tokenize("{ spans\nlines }X");
        assert_eq!(toks[0].kind, TokenKind::Comment);
        assert_eq!(toks[0].text, "{ spans\nlines }");
        assert_eq!(toks[1].kind, TokenKind::Word);
    }

    #[test]
    fn string_literal_with_escaped_quote() {
        let toks = tokenize(r"'it\'s fine'");
        assert_eq!(toks[0].kind, TokenKind::String);
        assert_eq!(toks[0].text, r"'it\'s fine'");
    }

    #[test]
    fn illegal_token_is_reported_and_recovered_past() {
        let toks = tokenize("@X");
        assert_eq!(toks[0].kind, TokenKind::Illegal);
        assert_eq!(toks[0].text, "@");
        assert_eq!(toks[1].kind, TokenKind::Word);
    }

    #[test]
    fn tracks_line_and_column_across_newlines() {
        let toks = tokenize("ab\ncd");
        let word_cd = toks
            .iter()
            .find(|t| t.kind == TokenKind::Word && t.text == "cd")
            .unwrap();
        assert_eq!(word_cd.line, 2);
        assert_eq!(word_cd.column, 1);
    }

    #[test]
    fn past_end_of_input_repeats_end_of_input() {
        let mut tokenizer = Tokenizer::new("X");
        let _ = tokenizer.next();
        let eoi_one = tokenizer.next();
        let eoi_two = tokenizer.next();
        assert_eq!(eoi_one.kind, TokenKind::EndOfInput);
        assert_eq!(eoi_two.kind, TokenKind::EndOfInput);
        assert_eq!(eoi_one.line, eoi_two.line);
        assert_eq!(eoi_one.column, eoi_two.column);
    }
}
