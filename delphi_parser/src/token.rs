//! Token definitions for the Delphi tokenizer
//!
//! A `Token` is the unit the tokenizer hands to the token stream: a kind, the
//! exact source slice it covers, and the 1-based line/column of its first
//! code point.

use std::fmt;

/// The kind of a token.
///
/// Single-character punctuation (`;:.,=()[]`) is folded into one variant,
/// `Punct`, carrying the character itself rather than one variant per
/// character. The set is fixed and small, so a payload is simpler than nine
/// near-identical unit variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Illegal,
    EndOfInput,
    Word,
    WhiteSpace,
    Comment,
    Integer,
    Real,
    String,
    Punct(char),
}

impl TokenKind {
    /// The `expected` description used when a caller asks for this kind
    /// generically (no more specific context is available). Punctuation
    /// always yields the exact `token "<char>"` form from the external
    /// contract; the rest are reasonable fallbacks for paths the documented
    /// `expected` strings don't cover.
    pub fn generic_expected(self) -> String {
        match self {
            TokenKind::Punct(c) => format!("token \"{c}\""),
            TokenKind::Word => "word".to_string(),
            TokenKind::Integer => "integer literal".to_string(),
            TokenKind::Real => "real literal".to_string(),
            TokenKind::String => "string literal".to_string(),
            TokenKind::Comment => "comment".to_string(),
            TokenKind::WhiteSpace => "white space".to_string(),
            TokenKind::Illegal => "valid token".to_string(),
            TokenKind::EndOfInput => "more input".to_string(),
        }
    }
}

/// A token together with its exact source text and position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    /// 1-based.
    pub line: usize,
    /// 1-based, counts code points.
    pub column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            column,
        }
    }

    /// Human-readable description of this token for diagnostics, per the
    /// `token-describe` rules of the external error contract.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::EndOfInput => "end of file".to_string(),
            TokenKind::Punct(c) => format!("token \"{c}\""),
            TokenKind::Word => format!("word \"{}\"", self.text),
            TokenKind::Integer => format!("integer \"{}\"", self.text),
            TokenKind::Real => format!("real \"{}\"", self.text),
            TokenKind::String => format!("string \"{}\"", self.text),
            TokenKind::Comment => format!("comment \"{}\"", ellipsise(&self.text, 20)),
            TokenKind::Illegal => format!("illegal token \"{}\"", self.text),
            TokenKind::WhiteSpace => format!("white space \"{}\"", self.text),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}:{}", self.describe(), self.line, self.column)
    }
}

/// Truncate `s` to at most `max` code points, appending `...` if anything
/// was cut. Mirrors the comment-shortening rule used by diagnostics.
fn ellipsise(s: &str, max: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= max {
        s.to_string()
    } else {
        let mut truncated: String = chars[..max].iter().collect();
        truncated.push_str("...");
        truncated
    }
}
