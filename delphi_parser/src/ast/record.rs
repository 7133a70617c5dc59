//! `RecordExpr`: a record body, which shares its member grammar with class
//! bodies but has no visibility sections.

use serde::Serialize;

use super::class::ClassMember;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordExpr {
    pub members: Vec<ClassMember>,
}
