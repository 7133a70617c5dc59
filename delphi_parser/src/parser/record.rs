//! Record expressions (§4.6): a flat field/method list, with no visibility
//! sections, `class`-prefixed members, or properties (those are class-only).

use crate::ast::{ClassMember, Field, MethodKind, RecordExpr};
use crate::error::ParseResult;
use crate::token::TokenKind;

use super::selector::Selector;
use super::Parser;

impl Parser {
    /// Entry point for a `type` block's `T = record ...;`. Also consumes
    /// the declaration's trailing `;`.
    pub(crate) fn parse_record_expr(&mut self) -> ParseResult<RecordExpr> {
        let expr = self.parse_record_expr_no_trailing_semicolon()?;
        self.stream.eat(TokenKind::Punct(';'))?;
        Ok(expr)
    }

    /// Entry point for an inline record type (e.g. a nested `var`/field
    /// declaration), where the caller owns the trailing `;`.
    pub(crate) fn parse_record_expr_no_trailing_semicolon(&mut self) -> ParseResult<RecordExpr> {
        self.stream.eat_word("record")?;
        let mut members = Vec::new();
        while !self.stream.sees_word("end") && !self.stream.is_at_end() {
            members.push(self.parse_record_member()?);
        }
        self.stream.eat_word("end")?;
        Ok(RecordExpr { members })
    }

    /// A record's member list (§4.6): `procedure`/`function` methods,
    /// anything else a field. Deliberately its own routine rather than
    /// `parse_class_body` (a record has no visibility sections, `strict`,
    /// `class`-prefixed members, or properties).
    fn parse_record_member(&mut self) -> ParseResult<ClassMember> {
        Selector::new()
            .on("procedure", |p| p.parse_method(false, MethodKind::Normal))
            .on("function", |p| p.parse_method(false, MethodKind::Normal))
            .dispatch(self, |p| {
                let variable = p.parse_variable_declaration()?;
                Ok(ClassMember::Field(Field { variable, is_class: false }))
            })
    }
}
