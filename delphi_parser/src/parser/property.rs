//! Property declarations: an optional index parameter list followed by an
//! unordered set of suffix clauses (§4.12).

use crate::ast::{Property, VarType, Variable};
use crate::error::ParseResult;
use crate::token::TokenKind;

use super::Parser;

impl Parser {
    /// `property` itself has already been identified by the caller's
    /// dispatch but not consumed; this reads it along with everything
    /// through the terminating `;`.
    pub(crate) fn parse_property(&mut self, is_class: bool) -> ParseResult<Property> {
        self.stream.eat_word("property")?;
        let name = self.identifier("property name")?;

        let indexes = if self.stream.sees_and_eat(TokenKind::Punct('[')) {
            self.parse_parameter_list(TokenKind::Punct(']'))?
        } else {
            Vec::new()
        };

        self.stream.eat(TokenKind::Punct(':'))?;
        let type_name = self.identifier("property type name")?;

        let mut index = None;
        let mut reader = None;
        let mut writer = None;
        let mut stored = None;
        let mut default = None;
        let mut nodefault = false;

        while !self.stream.sees(TokenKind::Punct(';')) {
            if self.stream.sees_word_and_eat("index") {
                index = Some(self.integer_literal("property index")?);
            } else if self.stream.sees_word_and_eat("read") {
                reader = Some(self.identifier("property reader name")?);
            } else if self.stream.sees_word_and_eat("write") {
                writer = Some(self.identifier("property writer name")?);
            } else if self.stream.sees_word_and_eat("stored") {
                stored = Some(self.identifier("property stored value")?);
            } else if self.stream.sees_word_and_eat("default") {
                default = Some(self.literal("property default value")?);
            } else if self.stream.sees_word_and_eat("nodefault") {
                nodefault = true;
            } else {
                return Err(self.stream.unexpected("property modifier"));
            }
        }

        self.stream.eat(TokenKind::Punct(';'))?;

        Ok(Property {
            variable: Variable {
                names: vec![name],
                r#type: VarType::TypeName(type_name),
                default: None,
                length: None,
                absolute: None,
            },
            is_class,
            indexes,
            index,
            reader,
            writer,
            stored,
            default,
            nodefault,
        })
    }
}
