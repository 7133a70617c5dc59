//! Function/procedure declarations and the parameter-list grammar shared
//! by top-level routines, methods, and properties (§4.10, §4.11).

use crate::ast::{Function, MethodModifiers, Parameter, Qualifier};
use crate::error::ParseResult;
use crate::token::TokenKind;

use super::class::{apply_modifier, METHOD_MODIFIER_WORDS};
use super::Parser;

impl Parser {
    fn parse_function_signature(&mut self) -> ParseResult<(String, Vec<Parameter>, Option<String>)> {
        let name = self.identifier("function name")?;

        let parameters = if self.stream.sees_and_eat(TokenKind::Punct('(')) {
            self.parse_parameter_list(TokenKind::Punct(')'))?
        } else {
            Vec::new()
        };

        let returns = if self.stream.sees_and_eat(TokenKind::Punct(':')) {
            Some(self.qualified_identifier("return type")?)
        } else {
            None
        };

        Ok((name, parameters, returns))
    }

    /// Top-level `function`/`procedure` block entry (no method modifiers).
    pub(crate) fn parse_function_decl(&mut self) -> ParseResult<Function> {
        let (name, parameters, returns) = self.parse_function_signature()?;
        self.stream.eat(TokenKind::Punct(';'))?;
        Ok(Function {
            name,
            parameters,
            returns,
        })
    }

    /// Class/record method entry: same signature grammar, followed by any
    /// number of `; modifier` suffixes.
    pub(crate) fn parse_function_decl_with_modifiers(
        &mut self,
    ) -> ParseResult<(Function, MethodModifiers)> {
        let (name, parameters, returns) = self.parse_function_signature()?;
        self.stream.eat(TokenKind::Punct(';'))?;

        let mut modifiers = MethodModifiers::default();
        while let Some(word) = self.peek_modifier_word() {
            self.stream.next();
            apply_modifier(&mut modifiers, &word);
            self.stream.eat(TokenKind::Punct(';'))?;
        }

        Ok((
            Function {
                name,
                parameters,
                returns,
            },
            modifiers,
        ))
    }

    fn peek_modifier_word(&mut self) -> Option<&'static str> {
        METHOD_MODIFIER_WORDS
            .iter()
            .copied()
            .find(|word| self.stream.sees_word(word))
    }

    /// Parses parameter groups until `closer`, which is consumed.
    pub(crate) fn parse_parameter_list(&mut self, closer: TokenKind) -> ParseResult<Vec<Parameter>> {
        let mut parameters = Vec::new();

        while !self.stream.sees(closer) {
            let qualifier = self.parse_parameter_qualifier()?;

            let mut names = vec![self.identifier("parameter name")?];
            while self.stream.sees_and_eat(TokenKind::Punct(',')) {
                names.push(self.identifier("parameter name")?);
            }

            let (r#type, open_array) = if self.stream.sees_and_eat(TokenKind::Punct(':')) {
                if self.stream.sees_word_and_eat("array") {
                    self.stream.eat_word("of")?;
                    let element = if self.stream.sees_word_and_eat("const") {
                        "const".to_string()
                    } else {
                        self.qualified_identifier("open array parameter type")?
                    };
                    (element, true)
                } else {
                    (self.qualified_identifier("parameter type")?, false)
                }
            } else {
                (String::new(), false)
            };

            let default_value = if self.stream.sees_and_eat(TokenKind::Punct('=')) {
                Some(self.literal("default value")?)
            } else {
                None
            };

            parameters.push(Parameter {
                names,
                r#type,
                qualifier,
                open_array,
                default_value,
            });

            if self.stream.sees_and_eat(TokenKind::Punct(';')) {
                continue;
            }
            if self.stream.sees(closer) {
                break;
            }
            if self.stream.sees_and_eat(TokenKind::Punct(',')) {
                break;
            }
            break;
        }

        self.stream.eat(closer)?;
        Ok(parameters)
    }

    fn parse_parameter_qualifier(&mut self) -> ParseResult<Qualifier> {
        if self.stream.sees_word_and_eat("var") {
            return Ok(Qualifier::Var);
        }
        if self.stream.sees_word_and_eat("const") {
            if self.stream.sees_and_eat(TokenKind::Punct('[')) {
                self.stream.eat_word("ref")?;
                self.stream.eat(TokenKind::Punct(']'))?;
                return Ok(Qualifier::ConstRef);
            }
            return Ok(Qualifier::Const);
        }
        if self.stream.sees_word_and_eat("out") {
            return Ok(Qualifier::Out);
        }
        if self.stream.sees_and_eat(TokenKind::Punct('[')) {
            self.stream.eat_word("ref")?;
            self.stream.eat(TokenKind::Punct(']'))?;
            self.stream.eat_word("const")?;
            return Ok(Qualifier::RefConst);
        }
        Ok(Qualifier::None)
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{Block, Qualifier};
    use crate::parse;

    fn function_decl(source: &str) -> crate::ast::Function {
        let file = parse(source).unwrap();
        match &file.sections[0].blocks[0] {
            Block::Function(f) => f.clone(),
            Block::Procedure(f) => f.clone(),
            other => panic!("expected a function/procedure block, got {other:?}"),
        }
    }

    #[test]
    fn procedure_with_no_parameters() {
        let f = function_decl("unit U; interface procedure Reset; implementation end.");
        assert_eq!(f.name, "Reset");
        assert!(f.parameters.is_empty());
        assert_eq!(f.returns, None);
    }

    #[test]
    fn function_with_return_type_and_parameters() {
        let f = function_decl(
            "unit U; interface function Add(A, B: Integer): Integer; implementation end.",
        );
        assert_eq!(f.name, "Add");
        assert_eq!(f.returns, Some("Integer".to_string()));
        assert_eq!(f.parameters[0].names, vec!["A".to_string(), "B".to_string()]);
        assert_eq!(f.parameters[0].r#type, "Integer");
    }

    #[test]
    fn parameter_qualifiers() {
        let f = function_decl(
            "unit U; interface procedure P(var A: Integer; const B: Integer; \
             const [ref] C: Integer; out D: Integer; [ref] const E: Integer); \
             implementation end.",
        );
        assert_eq!(f.parameters[0].qualifier, Qualifier::Var);
        assert_eq!(f.parameters[1].qualifier, Qualifier::Const);
        assert_eq!(f.parameters[2].qualifier, Qualifier::ConstRef);
        assert_eq!(f.parameters[3].qualifier, Qualifier::Out);
        assert_eq!(f.parameters[4].qualifier, Qualifier::RefConst);
    }

    #[test]
    fn open_array_parameter() {
        let f = function_decl(
            "unit U; interface procedure P(A: array of Integer); implementation end.",
        );
        assert!(f.parameters[0].open_array);
        assert_eq!(f.parameters[0].r#type, "Integer");
    }

    #[test]
    fn untyped_parameter_has_empty_type() {
        let f = function_decl("unit U; interface procedure P(A); implementation end.");
        assert_eq!(f.parameters[0].r#type, "");
    }

    #[test]
    fn trailing_comma_before_closing_paren_is_tolerated() {
        let f = function_decl("unit U; interface procedure P(A: Integer,); implementation end.");
        assert_eq!(f.parameters.len(), 1);
    }

    #[test]
    fn default_value_on_parameter() {
        let f = function_decl(
            "unit U; interface procedure P(A: Integer = 42); implementation end.",
        );
        assert_eq!(f.parameters[0].default_value, Some("42".to_string()));
    }
}
