//! End-to-end tests for well-formed media query lists.
//!
//! Each test goes through the public `parse` entry point only.

use css_mediaquery::{parse, Expression, Modifier, Query};
use pretty_assertions::assert_eq;

fn expr(modifier: Option<Modifier>, feature: &str, value: Option<&str>) -> Expression {
    Expression {
        modifier,
        feature: feature.to_string(),
        value: value.map(str::to_string),
    }
}

// ============================================================================
// 1. Media types without expressions
// ============================================================================

#[test]
fn test_media_type_without_expressions() {
    let list = parse("screen").unwrap();
    assert_eq!(list.into_vec(), vec![Query {
        inverse: false,
        pre_type_hack: String::new(),
        media_type: "screen".into(),
        post_type_hack: String::new(),
        expressions: vec![],
    }]);

    let list = parse("not screen").unwrap();
    assert_eq!(list.into_vec(), vec![Query {
        inverse: true,
        pre_type_hack: String::new(),
        media_type: "screen".into(),
        post_type_hack: String::new(),
        expressions: vec![],
    }]);
}

#[test]
fn test_media_type_case_preserved() {
    let list = parse("NOT Screen").unwrap();
    assert!(list[0].inverse);
    assert_eq!(list[0].media_type, "Screen");
}

// ============================================================================
// 2. The common retina query list
// ============================================================================

#[test]
fn test_retina_query_list() {
    let list = parse(
        "only screen and (-webkit-min-device-pixel-ratio: 2),\n\
         only screen and (   min--moz-device-pixel-ratio: 2),\n\
         only screen and (     -o-min-device-pixel-ratio: 2/1),\n\
         only screen and (        min-device-pixel-ratio: 2),\n\
         only screen and (                min-resolution: 192dpi),\n\
         only screen and (                min-resolution: 2dppx)",
    )
    .unwrap();

    assert_eq!(list.len(), 6);
    assert!(list.iter().all(|q| q.media_type == "screen" && !q.inverse));

    let first: Vec<Expression> = list.iter().map(|q| q.expressions[0].clone()).collect();
    assert_eq!(first, vec![
        expr(Some(Modifier::Min), "-webkit-min-device-pixel-ratio", Some("2")),
        expr(Some(Modifier::Min), "-moz-device-pixel-ratio", Some("2")),
        expr(Some(Modifier::Min), "-o-min-device-pixel-ratio", Some("2/1")),
        expr(Some(Modifier::Min), "device-pixel-ratio", Some("2")),
        expr(Some(Modifier::Min), "resolution", Some("192dpi")),
        expr(Some(Modifier::Min), "resolution", Some("2dppx")),
    ]);
}

// ============================================================================
// 3. Expressions
// ============================================================================

#[test]
fn test_multiple_expressions_in_order() {
    let list = parse("screen and (min-width: 40em) and (max-width: 64em) and (color)").unwrap();
    assert_eq!(list[0].expressions, vec![
        expr(Some(Modifier::Min), "width", Some("40em")),
        expr(Some(Modifier::Max), "width", Some("64em")),
        expr(None, "color", None),
    ]);
}

#[test]
fn test_typeless_clause() {
    let list = parse("(orientation: portrait)").unwrap();
    assert_eq!(list[0].media_type, "all");
    assert_eq!(list[0].expressions, vec![expr(None, "orientation", Some("portrait"))]);
}

#[test]
fn test_scientific_notation_value() {
    let list = parse("print and (min-resolution: 3e1dpcm)").unwrap();
    assert_eq!(list[0].expressions[0], expr(Some(Modifier::Min), "resolution", Some("3e1dpcm")));
}

#[test]
fn test_minimum_is_not_a_modifier() {
    let list = parse("(minimum-foo: 1) and (min: 2)").unwrap();
    assert_eq!(list[0].expressions, vec![
        expr(None, "minimum-foo", Some("1")),
        expr(None, "min", Some("2")),
    ]);
}

#[test]
fn test_whitespace_is_insignificant() {
    let tight = parse("screen and (min-width:48em)").unwrap();
    let loose = parse("  screen\tand\n(  min-width :  48em  )  ").unwrap();
    assert_eq!(tight, loose);
}

// ============================================================================
// 4. Browser hacks
// ============================================================================

#[test]
fn test_pre_type_hack() {
    let list = parse("\\0screen").unwrap();
    assert_eq!(list[0].pre_type_hack, "\\0");
    assert_eq!(list[0].media_type, "screen");
    assert_eq!(list[0].post_type_hack, "");
}

#[test]
fn test_post_type_hack() {
    let list = parse("screen\\9").unwrap();
    assert_eq!(list[0].pre_type_hack, "");
    assert_eq!(list[0].media_type, "screen");
    assert_eq!(list[0].post_type_hack, "\\9");
}

#[test]
fn test_double_backslash_hack_with_whitespace() {
    let list = parse("\\\\0 screen and (min-width: 0)").unwrap();
    assert_eq!(list[0].pre_type_hack, "\\\\0 ");
    assert_eq!(list[0].media_type, "screen");
    assert_eq!(list[0].expressions.len(), 1);
}

#[test]
fn test_post_type_hack_keeps_interior_whitespace() {
    let list = parse("screen \\9, print").unwrap();
    assert_eq!(list[0].post_type_hack, " \\9");
    assert_eq!(list[1].media_type, "print");
}

// ============================================================================
// 5. Lists
// ============================================================================

#[test]
fn test_list_preserves_source_order() {
    let list = parse("print, not screen, (color), tv and (scan: progressive)").unwrap();
    let types: Vec<&str> = list.iter().map(|q| q.media_type.as_str()).collect();
    assert_eq!(types, vec!["print", "screen", "all", "tv"]);
    assert!(list[1].inverse);
}
