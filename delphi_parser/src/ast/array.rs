//! `ArrayExpr`: fixed, dynamic, nested, and packed array types.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArrayExpr {
    /// `array of T` with no index clauses at all.
    pub dynamic: bool,
    /// One entry per dimension, flattened out of any `array [...] of array
    /// [...] of T` nesting so a reader never needs to walk element types
    /// to find the full shape.
    pub index_types: Vec<IndexType>,
    pub element_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value")]
pub enum IndexType {
    NumRange { packed: bool, low: i64, high: i64 },
    NamedIndex { packed: bool, name: String },
}
