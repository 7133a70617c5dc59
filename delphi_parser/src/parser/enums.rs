//! Enum expressions: `(A, B, C = 5)` (§4.8).

use crate::ast::{EnumExpr, EnumMember};
use crate::error::ParseResult;
use crate::token::TokenKind;

use super::Parser;

impl Parser {
    pub(crate) fn parse_enum_expr(&mut self) -> ParseResult<EnumExpr> {
        self.stream.eat(TokenKind::Punct('('))?;
        let mut members = Vec::new();
        loop {
            let name = self.identifier("enum member name")?;
            let value = if self.stream.sees_and_eat(TokenKind::Punct('=')) {
                Some(self.integer_literal("enum member value")?.to_string())
            } else {
                None
            };
            members.push(EnumMember { name, value });
            if self.stream.sees_and_eat(TokenKind::Punct(',')) {
                continue;
            }
            break;
        }
        self.stream.eat(TokenKind::Punct(')'))?;
        Ok(EnumExpr { members })
    }
}
