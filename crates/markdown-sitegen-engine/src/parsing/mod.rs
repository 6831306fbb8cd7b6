pub mod blocks;
pub mod inline;

#[cfg(test)]
mod tests;

use blocks::{Block, classify, segment};

#[derive(Debug)]
pub struct ParsedDoc<'a> {
    pub blocks: Vec<Block<'a>>,
}

/// Segments a document and classifies every block, in document order.
pub fn parse_document(markdown: &str) -> ParsedDoc<'_> {
    let blocks = segment(markdown)
        .into_iter()
        .map(|text| {
            let block_type = classify(text);
            log::debug!("classified block as {block_type:?}: {:?}", preview(text, 40));
            Block { text, block_type }
        })
        .collect();

    ParsedDoc { blocks }
}

/// Truncates to `max_chars` characters with a "..." suffix if needed.
///
/// Used for human-readable log output.
pub fn preview(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((i, _)) => format!("{}...", &s[..i]),
        None => s.to_string(),
    }
}
