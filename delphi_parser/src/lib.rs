//! delphi_parser
//!
//! Recursive-descent parser for the declarative surface of Delphi/Object
//! Pascal compilation units: unit name, `uses` clauses, and the classes,
//! records, arrays, enumerations, variables, and routines declared in the
//! interface/implementation sections. Statement bodies inside routine
//! implementations are not parsed; see [`parser`] for the grammar this
//! crate does cover.
//!
//! # Example
//!
//! ```
//! use delphi_parser::parse;
//!
//! let file = parse("unit Geometry;\ninterface\ntype\n  TPoint = record\n    X, Y: Integer;\n  end;\nimplementation\nend.").unwrap();
//! assert_eq!(file.name, "Geometry");
//! ```

pub mod ast;
pub mod error;
pub mod parser;
pub mod stream;
pub mod token;
pub mod tokenizer;

pub use ast::File;
pub use error::{ParseError, ParseResult};
pub use parser::{parse, Parser};
pub use token::{Token, TokenKind};

/// Get version information.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
