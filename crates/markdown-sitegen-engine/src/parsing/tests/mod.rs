//! Integration tests for the parsing module.
//!
//! Fixtures (.md) and snapshots (.snap) of the rendered HTML are co-located
//! in `fixtures/`.


use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::{
    convert::convert_document,
    parsing::{blocks::BlockType, parse_document, preview},
};

// Fixture-based snapshot tests

#[test]
fn fixture_full_document() {
    assert_fixture("full_document");
}

#[test]
fn fixture_code_raw_zone() {
    assert_fixture("code_raw_zone");
}

#[test]
fn fixture_near_miss_blocks() {
    assert_fixture("near_miss_blocks");
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();

    let doc = parse_document(&md);
    invariants::check(&md, &doc.blocks);

    let html = convert_document(&md).unwrap().render().unwrap();
    insta::with_settings!({
        snapshot_path => fixtures_dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_snapshot!(name, html);
    });
}

// Invariant tests

#[test]
fn block_types_in_document_order() {
    let md = "# Title\n\npara\n\n```\ncode\n```\n\n> q\n\n- a\n\n1. b";
    let doc = parse_document(md);
    invariants::check(md, &doc.blocks);

    let types: Vec<_> = doc.blocks.iter().map(|b| b.block_type).collect();
    assert_eq!(
        types,
        vec![
            BlockType::Heading,
            BlockType::Paragraph,
            BlockType::Code,
            BlockType::Quote,
            BlockType::UnorderedList,
            BlockType::OrderedList,
        ]
    );
}

#[test]
fn block_types_yaml_snapshot() {
    let md = "# Title\n\n1. one\n3. three\n\n> q\n>\n> more\n\n* a\n- b\n\n```\ncode\n```";
    let types: Vec<BlockType> = parse_document(md)
        .blocks
        .iter()
        .map(|b| b.block_type)
        .collect();

    insta::assert_yaml_snapshot!(types, @r"
    - Heading
    - Paragraph
    - Quote
    - UnorderedList
    - Code
    ");
}

/// Rejoining blocks with a blank line and segmenting again is stable.
#[rstest]
#[case("")]
#[case("\n\n\n")]
#[case("single line")]
#[case("  # Title  \n\n\n\npara one\nline two\n\n   \n\n- a\n- b\n")]
#[case("```\nfn f() {}\n```\n\n\n> quote\n>\n> more")]
fn segmentation_is_idempotent(#[case] md: &str) {
    let first = parse_document(md);
    invariants::check(md, &first.blocks);

    let rejoined = first
        .blocks
        .iter()
        .map(|b| b.text)
        .collect::<Vec<_>>()
        .join("\n\n");
    let second = parse_document(&rejoined);

    assert_eq!(first.blocks, second.blocks);
}

#[test]
fn empty_document() {
    assert!(parse_document("").blocks.is_empty());
}

#[test]
fn blank_lines_only() {
    assert!(parse_document("\n\n\n").blocks.is_empty());
}

#[test]
fn preview_short_text_unchanged() {
    assert_eq!(preview("hello", 10), "hello");
    assert_eq!(preview("hello", 5), "hello");
}

#[test]
fn preview_truncates_on_char_boundary() {
    assert_eq!(preview("héllo world", 5), "héllo...");
    assert_eq!(preview("hello", 0), "...");
}
