//! Recursive-descent parser: the `unit`-file skeleton, identifiers, and the
//! shared plumbing every per-construct routine below builds on.

mod array;
mod class;
mod enums;
mod function;
mod property;
mod record;
mod selector;
mod types;
mod variable;

use crate::ast::{File, FileKind, Section, SectionKind};
use crate::error::{ParseError, ParseResult};
use crate::stream::TokenStream;
use crate::token::TokenKind;

/// Block-introducing keywords and `end`. Anything else that isn't a
/// section/block starter ends the current block sequence.
const BLOCK_TERMINATORS: &[&str] = &[
    "implementation",
    "var",
    "type",
    "const",
    "threadvar",
    "initialization",
    "finalization",
    "end",
];

const DEFAULT_MAX_DEPTH: usize = 128;

/// Owns the token stream for one `parse` call; no state survives past it.
pub struct Parser {
    stream: TokenStream,
    depth: usize,
    max_depth: usize,
}

impl Parser {
    pub fn new(source: &str) -> Self {
        Self {
            stream: TokenStream::new(source),
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(source: &str, max_depth: usize) -> Self {
        Self {
            stream: TokenStream::new(source),
            depth: 0,
            max_depth,
        }
    }

    /// Run `f` one nesting level deeper, failing with `TooDeeplyNested`
    /// instead of recursing without bound. Wraps every entry point into the
    /// mutually recursive type grammar (type expressions and the inline
    /// var-declaration types that can themselves contain records/arrays).
    pub(crate) fn recurse<T>(&mut self, f: impl FnOnce(&mut Self) -> ParseResult<T>) -> ParseResult<T> {
        self.depth += 1;
        if self.depth > self.max_depth {
            let token = self.stream.current_token();
            self.depth -= 1;
            return Err(ParseError::TooDeeplyNested { token });
        }
        let result = f(self);
        self.depth -= 1;
        result
    }

    pub(crate) fn identifier(&mut self, description: &str) -> ParseResult<String> {
        let token = self.stream.take(TokenKind::Word, description)?;
        Ok(token.text)
    }

    /// Reads `ident(.ident)*`, discarding any white space/comments the
    /// stream already skips between segments and around the dots.
    pub(crate) fn qualified_identifier(&mut self, description: &str) -> ParseResult<String> {
        let mut name = self.identifier(description)?;
        while self.stream.sees(TokenKind::Punct('.')) {
            self.stream.next();
            let segment = self.identifier(description)?;
            name.push('.');
            name.push_str(&segment);
        }
        Ok(name)
    }

    /// A word/integer/real/string token's exact text, for default values
    /// and other literal positions the grammar accepts any literal kind.
    pub(crate) fn literal(&mut self, description: &str) -> ParseResult<String> {
        let token = self.stream.current_token();
        match token.kind {
            TokenKind::Word | TokenKind::Integer | TokenKind::Real | TokenKind::String => {
                self.stream.next();
                Ok(token.text)
            }
            _ => Err(self.stream.unexpected(description.to_string())),
        }
    }

    pub(crate) fn integer_literal(&mut self, description: &str) -> ParseResult<i64> {
        let token = self.stream.take(TokenKind::Integer, description)?;
        token
            .text
            .parse::<i64>()
            .map_err(|_| ParseError::unexpected(description.to_string(), token))
    }

    pub(crate) fn at_block_terminator(&mut self) -> bool {
        self.stream.is_at_end() || self.stream.sees_words(BLOCK_TERMINATORS)
    }

    pub fn parse_file(&mut self) -> ParseResult<File> {
        self.stream.eat_word("unit")?;
        let name = self.qualified_identifier("unit name")?;
        self.stream.eat(TokenKind::Punct(';'))?;

        let interface = self.parse_section("interface", SectionKind::Interface)?;
        let implementation = self.parse_section("implementation", SectionKind::Implementation)?;

        self.stream.eat_word("end")?;
        self.stream.eat(TokenKind::Punct('.'))?;

        Ok(File {
            kind: FileKind::Unit,
            name,
            sections: vec![interface, implementation],
        })
    }

    fn parse_section(&mut self, keyword: &str, kind: SectionKind) -> ParseResult<Section> {
        self.stream.eat_word(keyword)?;
        let uses = self.parse_uses()?;

        let mut blocks = Vec::new();
        loop {
            if self.stream.sees_word("type") {
                blocks.push(crate::ast::Block::TypeBlock(self.parse_type_block()?));
            } else if self.stream.sees_word("var") {
                blocks.push(crate::ast::Block::VarBlock(self.parse_var_block(false)?));
            } else if self.stream.sees_word("threadvar") {
                blocks.push(crate::ast::Block::ThreadVarBlock(self.parse_var_block(true)?));
            } else if self.stream.sees_word_and_eat("function") {
                blocks.push(crate::ast::Block::Function(self.parse_function_decl()?));
            } else if self.stream.sees_word_and_eat("procedure") {
                blocks.push(crate::ast::Block::Procedure(self.parse_function_decl()?));
            } else {
                break;
            }
        }

        Ok(Section { kind, uses, blocks })
    }

    fn parse_uses(&mut self) -> ParseResult<Vec<String>> {
        if !self.stream.sees_word_and_eat("uses") {
            return Ok(Vec::new());
        }
        let mut uses = vec![self.qualified_identifier("uses clause")?];
        while self.stream.sees_and_eat(TokenKind::Punct(',')) {
            uses.push(self.qualified_identifier("uses clause")?);
        }
        self.stream.eat(TokenKind::Punct(';'))?;
        Ok(uses)
    }
}

/// Drive a parser over `source` to completion.
pub fn parse(source: &str) -> ParseResult<File> {
    Parser::new(source).parse_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::SectionKind;

    #[test]
    fn minimal_unit_skeleton() {
        let file = parse("unit U;interface implementation end.").unwrap();
        assert_eq!(file.name, "U");
        assert_eq!(file.sections.len(), 2);
        assert_eq!(file.sections[0].kind, SectionKind::Interface);
        assert_eq!(file.sections[1].kind, SectionKind::Implementation);
    }

    #[test]
    fn uses_clause_with_dotted_identifier() {
        let file = parse("unit U; interface uses A, B.C; implementation end.").unwrap();
        assert_eq!(file.sections[0].uses, vec!["A".to_string(), "B.C".to_string()]);
        assert!(file.sections[0].blocks.is_empty());
    }

    #[test]
    fn missing_semicolon_after_uses_clause() {
        let err = parse("unit U;interface uses GR32 System.StrUtils; implementation end.").unwrap_err();
        assert_eq!(
            err.to_string(),
            "token \";\" expected but was word \"System\" at 1:28"
        );
    }

    #[test]
    fn keyword_case_is_insensitive() {
        let file = parse("UNIT U;InterFace implementation END.").unwrap();
        assert_eq!(file.name, "U");
    }

    #[test]
    fn whitespace_and_comments_are_transparent() {
        let a = parse("unit U;interface implementation end.").unwrap();
        let b = parse("unit  U ; { note }\ninterface\n// line\nimplementation end.").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn crlf_line_endings_are_accepted() {
        let file = parse("unit U;\r\ninterface\r\nimplementation\r\nend.").unwrap();
        assert_eq!(file.name, "U");
    }
}
