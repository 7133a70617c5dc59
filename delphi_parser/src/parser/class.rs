//! Class expressions and the class-member dispatch table (§4.5).

use crate::ast::{
    ClassExpr, ClassMember, ClassSection, Field, Method, MethodKind, MethodModifiers, Visibility,
};
use crate::error::ParseResult;
use crate::token::TokenKind;

use super::selector::Selector;
use super::Parser;

impl Parser {
    pub(crate) fn parse_class_expr(&mut self) -> ParseResult<ClassExpr> {
        self.stream.eat_word("class")?;

        let mut super_classes = Vec::new();
        if self.stream.sees_and_eat(TokenKind::Punct('(')) {
            super_classes.push(self.qualified_identifier("parent class name")?);
            while self.stream.sees_and_eat(TokenKind::Punct(',')) {
                super_classes.push(self.qualified_identifier("parent interface name")?);
            }
            self.stream.eat(TokenKind::Punct(')'))?;
        }

        let sections = self.parse_class_body()?;

        self.stream.eat_word("end")?;
        self.stream.eat(TokenKind::Punct(';'))?;

        Ok(ClassExpr {
            super_classes,
            sections,
        })
    }

    /// Parses a class body's member list (everything between the header
    /// and `end`) into visibility-scoped sections. A record's flat member
    /// list has its own, simpler routine in `parser/record.rs`.
    pub(crate) fn parse_class_body(&mut self) -> ParseResult<Vec<ClassSection>> {
        let mut sections: Vec<ClassSection> = Vec::new();
        let mut current_visibility = Visibility::DefaultPublished;
        let mut strict = false;

        while !self.stream.sees_word("end") && !self.stream.is_at_end() {
            if self.stream.sees_word("strict") {
                self.stream.next();
                strict = true;
                continue;
            }

            if self.stream.sees_words(&["published", "public", "protected", "private"]) {
                let word = self.stream.next().text.to_ascii_lowercase();
                current_visibility = match (word.as_str(), strict) {
                    ("published", _) => Visibility::Published,
                    ("public", _) => Visibility::Public,
                    ("protected", _) => Visibility::Protected,
                    ("private", _) => Visibility::Private,
                    _ => unreachable!("matched against the same word set"),
                };
                strict = false;
                open_section(&mut sections, current_visibility);
                continue;
            }

            if self.stream.sees_word_and_eat("var") {
                // Explicit field-group marker; members following are
                // fields, already the default for an unrecognised word.
                continue;
            }

            let member = if self.stream.sees_word_and_eat("class") {
                // A nested selector, exactly one static member consumed
                // right here: `var` marks a class field, a method/property
                // keyword marks a class member, anything else is a class
                // field by default. Never deferred to a later iteration.
                self.parse_class_member_after_class_keyword()?
            } else {
                self.parse_class_member(false)?
            };
            open_section(&mut sections, current_visibility)
                .members
                .push(member);
        }

        Ok(sections)
    }

    /// Dispatches the single member following a `class` keyword in a class
    /// body. Mirrors the original's nested `classSelector`.
    fn parse_class_member_after_class_keyword(&mut self) -> ParseResult<ClassMember> {
        if self.stream.sees_word_and_eat("var") {
            let variable = self.parse_variable_declaration()?;
            return Ok(ClassMember::Field(Field { variable, is_class: true }));
        }
        self.parse_class_member(true)
    }

    fn parse_class_member(&mut self, is_class: bool) -> ParseResult<ClassMember> {
        Selector::new()
            .on("procedure", move |p| p.parse_method(is_class, MethodKind::Normal))
            .on("function", move |p| p.parse_method(is_class, MethodKind::Normal))
            .on("constructor", move |p| p.parse_method(is_class, MethodKind::Constructor))
            .on("destructor", move |p| p.parse_method(is_class, MethodKind::Destructor))
            .on("property", move |p| Ok(ClassMember::Property(p.parse_property(is_class)?)))
            .dispatch(self, move |p| {
                let variable = p.parse_variable_declaration()?;
                Ok(ClassMember::Field(Field { variable, is_class }))
            })
    }

    pub(crate) fn parse_method(&mut self, is_class: bool, kind: MethodKind) -> ParseResult<ClassMember> {
        self.stream.next(); // the procedure/function/constructor/destructor keyword
        let (function, modifiers) = self.parse_function_decl_with_modifiers()?;
        Ok(ClassMember::Method(Method {
            function,
            is_class,
            kind,
            modifiers,
        }))
    }
}

/// Returns the current trailing section for `visibility`, opening a fresh
/// one first if the last section (if any) has a different visibility.
fn open_section(sections: &mut Vec<ClassSection>, visibility: Visibility) -> &mut ClassSection {
    let needs_new = match sections.last() {
        Some(s) => s.visibility != visibility,
        None => true,
    };
    if needs_new {
        sections.push(ClassSection {
            visibility,
            members: Vec::new(),
        });
    }
    sections.last_mut().expect("just pushed")
}

/// `procedure`/`function` modifier keywords recognised after the
/// signature, before the declaration's terminating `;` (§4.5).
pub(crate) const METHOD_MODIFIER_WORDS: &[&str] = &[
    "virtual",
    "dynamic",
    "override",
    "overload",
    "reintroduce",
    "final",
];

pub(crate) fn apply_modifier(modifiers: &mut MethodModifiers, word: &str) {
    match word {
        "virtual" => modifiers.r#virtual = true,
        "dynamic" => modifiers.dynamic = true,
        "override" => modifiers.r#override = true,
        "overload" => modifiers.overload = true,
        "reintroduce" => modifiers.reintroduce = true,
        "final" => modifiers.r#final = true,
        _ => unreachable!("caller already matched against METHOD_MODIFIER_WORDS"),
    }
}
