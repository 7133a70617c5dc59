//! The AST derives `serde::Serialize` so the CLI can hand callers JSON
//! without a hand-written encoder; this checks the externally visible
//! shape of that encoding for a representative file.

use delphi_parser::parse;
use serde_json::Value;

#[test]
fn file_kind_and_name_survive_json_round_trip() {
    let file = parse(
        "unit Geometry; interface type TPoint = record X, Y: Integer; end; implementation end.",
    )
    .unwrap();

    let json = serde_json::to_value(&file).unwrap();
    assert_eq!(json["kind"], Value::String("unit".to_string()));
    assert_eq!(json["name"], Value::String("Geometry".to_string()));
    assert_eq!(json["sections"][0]["kind"], Value::String("interface".to_string()));
}

#[test]
fn tagged_union_variants_serialize_with_kind_and_value() {
    let file = parse(
        "unit U; interface type Color = (Red, Green, Blue); implementation end.",
    )
    .unwrap();
    let json = serde_json::to_value(&file).unwrap();
    let block = &json["sections"][0]["blocks"][0];
    assert_eq!(block["kind"], Value::String("TypeBlock".to_string()));
    let decl = &block["value"][0];
    assert_eq!(decl["expr"]["kind"], Value::String("Enum".to_string()));
    assert_eq!(decl["expr"]["value"]["members"][0]["name"], Value::String("Red".to_string()));
}
