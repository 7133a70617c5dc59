//! `var`/`threadvar` blocks and the variable-declaration grammar shared by
//! them, class/record fields, and property heads (§4.9).

use crate::ast::{VarType, Variable};
use crate::error::ParseResult;
use crate::token::TokenKind;

use super::Parser;

impl Parser {
    pub(crate) fn parse_var_block(&mut self, threadvar: bool) -> ParseResult<Vec<Variable>> {
        self.stream.eat_word(if threadvar { "threadvar" } else { "var" })?;
        let mut vars = Vec::new();
        while !self.at_block_terminator() {
            vars.push(self.parse_variable_declaration()?);
        }
        Ok(vars)
    }

    /// One `Name1, Name2: Type [= Default] [absolute Ref];` declaration.
    pub(crate) fn parse_variable_declaration(&mut self) -> ParseResult<Variable> {
        let mut names = vec![self.identifier("field name")?];
        while self.stream.sees_and_eat(TokenKind::Punct(',')) {
            names.push(self.identifier("field name")?);
        }
        self.stream.eat(TokenKind::Punct(':'))?;

        let (var_type, length) = self.parse_var_type()?;

        let absolute = if self.stream.sees_word_and_eat("absolute") {
            Some(self.identifier("absolute reference name")?)
        } else {
            None
        };

        let default = if self.stream.sees_and_eat(TokenKind::Punct('=')) {
            Some(self.literal("default value")?)
        } else {
            None
        };

        self.stream.eat(TokenKind::Punct(';'))?;

        Ok(Variable {
            names,
            r#type: var_type,
            default,
            length,
            absolute,
        })
    }

    /// Reads the type portion of a variable declaration. Returns the type
    /// together with an optional `string[N]` length, only possible when
    /// the type was a bare identifier immediately followed by `[`, per the
    /// resolved `Variable.length` open question.
    pub(crate) fn parse_var_type(&mut self) -> ParseResult<(VarType, Option<i64>)> {
        self.recurse(|p| {
            if p.stream.sees_word("array") || p.stream.sees_word("packed") {
                Ok((VarType::Array(p.parse_array_expr_no_trailing_semicolon()?), None))
            } else if p.stream.sees_word("record") {
                Ok((VarType::Record(p.parse_record_expr_no_trailing_semicolon()?), None))
            } else if p.stream.sees(TokenKind::Punct('(')) {
                Ok((VarType::Enum(p.parse_enum_expr()?), None))
            } else {
                let name = p.qualified_identifier("type name")?;
                let length = if p.stream.sees_and_eat(TokenKind::Punct('[')) {
                    let len = p.integer_literal("string length")?;
                    p.stream.eat(TokenKind::Punct(']'))?;
                    Some(len)
                } else {
                    None
                };
                Ok((VarType::TypeName(name), length))
            }
        })
    }
}
