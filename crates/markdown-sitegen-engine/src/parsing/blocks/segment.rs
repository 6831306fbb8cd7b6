use std::sync::OnceLock;

use regex::Regex;

/// Splits a document into trimmed block strings.
///
/// Blocks are separated by runs of two or more newlines. Pieces that are empty
/// after trimming are dropped, so the result never holds blank entries. Order
/// is preserved.
pub fn segment(document: &str) -> Vec<&str> {
    static SEPARATOR: OnceLock<Regex> = OnceLock::new();
    let separator =
        SEPARATOR.get_or_init(|| Regex::new(r"\n{2,}").expect("Invalid separator regex"));

    separator
        .split(document)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}
