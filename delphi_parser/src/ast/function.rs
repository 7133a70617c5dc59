//! `Function`/`Parameter`: procedure and function declarations, shared
//! between top-level blocks and class/record methods.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Function {
    pub name: String,
    pub parameters: Vec<Parameter>,
    /// `None` for a procedure; `Some(type name)` for a function.
    pub returns: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Qualifier {
    #[default]
    None,
    Var,
    Const,
    ConstRef,
    RefConst,
    Out,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parameter {
    /// Comma-separated names sharing one type/qualifier.
    pub names: Vec<String>,
    /// Empty string for an untyped parameter.
    pub r#type: String,
    pub qualifier: Qualifier,
    /// `array of T` open-array form.
    pub open_array: bool,
    pub default_value: Option<String>,
}
