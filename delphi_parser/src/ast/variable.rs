//! `Variable`/`VarType`: one name-list declaration shared by `var`,
//! `threadvar`, class/record fields, and (name+type only) property heads.

use serde::Serialize;

use super::array::ArrayExpr;
use super::enums::EnumExpr;
use super::record::RecordExpr;

/// One `Name1, Name2: Type [= Default] [absolute Ref];` declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Variable {
    /// At least one entry; comma-separated names sharing a single type.
    pub names: Vec<String>,
    pub r#type: VarType,
    pub default: Option<String>,
    /// `string[N]` length, populated only when the type was read as a bare
    /// identifier immediately followed by a bracketed integer.
    pub length: Option<i64>,
    pub absolute: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value")]
pub enum VarType {
    TypeName(String),
    Array(ArrayExpr),
    Enum(EnumExpr),
    Record(RecordExpr),
}
