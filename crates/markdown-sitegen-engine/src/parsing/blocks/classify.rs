use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockType,
};

/// Classifies a trimmed block by its line-level grammar.
///
/// Evaluated as an ordered decision list, first match wins:
/// heading, code, quote, unordered list, ordered list, paragraph.
/// Total and deterministic; unrecognised shapes are paragraphs.
pub fn classify(block: &str) -> BlockType {
    let first_line = block.split('\n').next().unwrap_or_default();

    if Heading::level(first_line).is_some() {
        return BlockType::Heading;
    }
    if CodeFence::is_fenced(block) {
        return BlockType::Code;
    }
    if block.split('\n').all(BlockQuote::is_quote_line) {
        return BlockType::Quote;
    }
    if block.split('\n').all(UnorderedList::is_item_line) {
        return BlockType::UnorderedList;
    }
    if OrderedList::is_sequence(block.split('\n')) {
        return BlockType::OrderedList;
    }
    BlockType::Paragraph
}
