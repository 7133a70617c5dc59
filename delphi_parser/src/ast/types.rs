//! `TypeDecl`/`TypeExpr`: one `type` block entry and the shape it names.

use serde::Serialize;

use super::array::ArrayExpr;
use super::class::ClassExpr;
use super::enums::EnumExpr;
use super::record::RecordExpr;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeDecl {
    pub name: String,
    pub expr: TypeExpr,
}

/// The right-hand side of a `type` declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value")]
pub enum TypeExpr {
    Class(ClassExpr),
    Record(RecordExpr),
    Array(ArrayExpr),
    Enum(EnumExpr),
    /// A reference to another (possibly qualified) type name.
    TypeName(String),
}
