//! The top-level `File` node and its sections.

use serde::Serialize;

use super::block::Block;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Program,
    Unit,
    Library,
    Package,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Interface,
    Implementation,
    Initialization,
    Finalization,
}

/// The parsed result of a whole unit/program/library/package file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct File {
    pub kind: FileKind,
    pub name: String,
    pub sections: Vec<Section>,
}

/// One `interface`/`implementation`/`initialization`/`finalization` section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub kind: SectionKind,
    /// Qualified unit names named in this section's `uses` clause, in
    /// source order. Empty if the section has none.
    pub uses: Vec<String>,
    pub blocks: Vec<Block>,
}
