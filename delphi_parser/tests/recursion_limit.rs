//! The configurable nesting cap (§9 Design Notes: an addition on top of
//! the external contract, not a change to it) turns unbounded recursion
//! into a reported error instead of a stack overflow.

use delphi_parser::error::ParseError;
use delphi_parser::parser::Parser;

fn nested_record_var_decl(depth: usize) -> String {
    let open = "record F: ".repeat(depth);
    let close = "; end".repeat(depth);
    format!("unit U; interface var X: {open}Integer{close}; implementation end.")
}

#[test]
fn deeply_nested_record_types_trip_the_configurable_depth_cap() {
    let source = nested_record_var_decl(50);
    let mut parser = Parser::with_max_depth(&source, 10);
    let err = parser.parse_file().unwrap_err();
    assert!(matches!(err, ParseError::TooDeeplyNested { .. }));
}

#[test]
fn the_default_depth_cap_accepts_realistic_nesting() {
    let source = nested_record_var_decl(3);
    assert!(delphi_parser::parse(&source).is_ok());
}
