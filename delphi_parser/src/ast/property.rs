//! `Property`: a class property declaration with its optional index
//! parameter list and unordered suffix clauses.

use serde::Serialize;

use super::function::Parameter;
use super::variable::Variable;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
    /// Carries the property's name and declared type; the other `Variable`
    /// fields (`default`, `length`, `absolute`) are always unused here.
    pub variable: Variable,
    pub is_class: bool,
    /// `[...]` index parameter list, e.g. `property Items[Index: Integer]`.
    pub indexes: Vec<Parameter>,
    pub index: Option<i64>,
    pub reader: Option<String>,
    pub writer: Option<String>,
    pub stored: Option<String>,
    pub default: Option<String>,
    pub nodefault: bool,
}
