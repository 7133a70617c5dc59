//! `EnumExpr`: `(A, B, C = 5, D)` style enumerations.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumExpr {
    pub members: Vec<EnumMember>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumMember {
    pub name: String,
    /// The literal integer text after `=`, if given.
    pub value: Option<String>,
}
