//! Array expressions, including the nested/comma-separated flattening
//! algorithm (§4.7).

use crate::ast::{ArrayExpr, IndexType};
use crate::error::ParseResult;
use crate::token::TokenKind;

use super::Parser;

impl Parser {
    /// Entry point for a `type` block's `T = array ...;`. Also consumes
    /// the declaration's trailing `;`.
    pub(crate) fn parse_array_expr(&mut self) -> ParseResult<ArrayExpr> {
        let expr = self.parse_array_expr_no_trailing_semicolon()?;
        self.stream.eat(TokenKind::Punct(';'))?;
        Ok(expr)
    }

    /// Entry point for an inline array type (e.g. inside a variable
    /// declaration), where the caller owns the trailing `;`.
    pub(crate) fn parse_array_expr_no_trailing_semicolon(&mut self) -> ParseResult<ArrayExpr> {
        let mut index_types = Vec::new();
        let mut any_indexed = false;

        loop {
            let packed = self.stream.sees_word_and_eat("packed");
            self.stream.eat_word("array")?;

            if self.stream.sees_and_eat(TokenKind::Punct('[')) {
                any_indexed = true;
                loop {
                    index_types.push(self.parse_index_type(packed)?);
                    if self.stream.sees_and_eat(TokenKind::Punct(',')) {
                        continue;
                    }
                    break;
                }
                self.stream.eat(TokenKind::Punct(']'))?;
            }

            self.stream.eat_word("of")?;

            if self.stream.sees_word("array") || self.stream.sees_word("packed") {
                continue;
            }
            break;
        }

        let element_type = self.qualified_identifier("array type name")?;

        Ok(ArrayExpr {
            dynamic: !any_indexed,
            index_types,
            element_type,
        })
    }

    fn parse_index_type(&mut self, packed: bool) -> ParseResult<IndexType> {
        if self.stream.sees(TokenKind::Integer) {
            let low = self.integer_literal("array bound")?;
            self.stream.eat(TokenKind::Punct('.'))?;
            self.stream.eat(TokenKind::Punct('.'))?;
            let high = self.integer_literal("array bound")?;
            Ok(IndexType::NumRange { packed, low, high })
        } else {
            let name = self.qualified_identifier("array type name")?;
            Ok(IndexType::NamedIndex { packed, name })
        }
    }
}
