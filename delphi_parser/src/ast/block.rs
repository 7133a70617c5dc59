//! `Block`: the tagged union of the declarations a section body is made of.

use serde::Serialize;

use super::function::Function;
use super::types::TypeDecl;
use super::variable::Variable;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value")]
pub enum Block {
    TypeBlock(Vec<TypeDecl>),
    VarBlock(Vec<Variable>),
    ThreadVarBlock(Vec<Variable>),
    Function(Function),
    Procedure(Function),
}
