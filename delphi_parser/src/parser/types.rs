//! `type` block and the type-expression dispatch table (§4.4).

use crate::ast::{TypeDecl, TypeExpr};
use crate::error::ParseResult;
use crate::token::TokenKind;

use super::Parser;

impl Parser {
    pub(crate) fn parse_type_block(&mut self) -> ParseResult<Vec<TypeDecl>> {
        self.stream.eat_word("type")?;
        let mut decls = Vec::new();
        while !self.at_block_terminator() {
            let name = self.identifier("type name")?;
            self.stream.eat(TokenKind::Punct('='))?;
            let expr = self.parse_type_expr()?;
            decls.push(TypeDecl { name, expr });
        }
        Ok(decls)
    }

    pub(crate) fn parse_type_expr(&mut self) -> ParseResult<TypeExpr> {
        self.recurse(|p| {
            if p.stream.sees_word("class") {
                Ok(TypeExpr::Class(p.parse_class_expr()?))
            } else if p.stream.sees_word("record") {
                Ok(TypeExpr::Record(p.parse_record_expr()?))
            } else if p.stream.sees_word("array") || p.stream.sees_word("packed") {
                Ok(TypeExpr::Array(p.parse_array_expr()?))
            } else if p.stream.sees(TokenKind::Punct('(')) {
                let expr = TypeExpr::Enum(p.parse_enum_expr()?);
                p.stream.eat(TokenKind::Punct(';'))?;
                Ok(expr)
            } else if p.stream.sees(TokenKind::Word) {
                let name = p.qualified_identifier("type name")?;
                p.stream.eat(TokenKind::Punct(';'))?;
                Ok(TypeExpr::TypeName(name))
            } else {
                Err(p.stream.unexpected("type expression"))
            }
        })
    }
}
