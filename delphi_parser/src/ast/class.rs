//! `ClassExpr` and its member shapes.

use serde::Serialize;

use super::property::Property;
use super::function::Function;
use super::variable::Variable;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassExpr {
    /// Parent class followed by any implemented interfaces, in source
    /// order. Empty for a class with no `(...)` clause.
    pub super_classes: Vec<String>,
    pub sections: Vec<ClassSection>,
}

/// A visibility-delimited run of members. A class body with no explicit
/// visibility keyword before its first member gets one implicit
/// `DefaultPublished` section (see [`Visibility::DefaultPublished`]).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassSection {
    pub visibility: Visibility,
    pub members: Vec<ClassMember>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Members appearing before any visibility keyword.
    DefaultPublished,
    Published,
    Public,
    Protected,
    Private,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value")]
pub enum ClassMember {
    Field(Field),
    Method(Method),
    Property(Property),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub variable: Variable,
    pub is_class: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodKind {
    Normal,
    Constructor,
    Destructor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MethodModifiers {
    pub r#virtual: bool,
    pub dynamic: bool,
    pub r#override: bool,
    pub overload: bool,
    pub reintroduce: bool,
    pub r#final: bool,
    /// `strict private`/`strict protected`.
    pub strict: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Method {
    pub function: Function,
    pub is_class: bool,
    pub kind: MethodKind,
    pub modifiers: MethodModifiers,
}
