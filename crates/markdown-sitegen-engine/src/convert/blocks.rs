use crate::{
    error::{MarkdownError, Result},
    html::HtmlNode,
    parsing::blocks::{
        Block, BlockType,
        kinds::{BlockQuote, CodeFence, Heading, OrderedList, Paragraph, UnorderedList},
    },
};

use super::spans::text_to_children;

/// Converts a classified block into exactly one root node.
///
/// # Errors
/// - [`MarkdownError::MalformedInline`] from tokenizing inline content
/// - [`MarkdownError::UnknownBlockType`] when the block's text does not fit
///   its type (a heading without a level, a code block without fences)
pub fn block_to_node(block: &Block<'_>) -> Result<HtmlNode> {
    match block.block_type {
        BlockType::Paragraph => paragraph_to_node(block),
        BlockType::Heading => heading_to_node(block),
        BlockType::Code => code_to_node(block),
        BlockType::Quote => quote_to_node(block),
        BlockType::UnorderedList => unordered_list_to_node(block),
        BlockType::OrderedList => ordered_list_to_node(block),
    }
}

fn mismatch(block: &Block<'_>) -> MarkdownError {
    MarkdownError::UnknownBlockType {
        block_type: block.block_type,
        block: block.text.to_string(),
    }
}

fn paragraph_to_node(block: &Block<'_>) -> Result<HtmlNode> {
    let text = Paragraph::inline_text(block.text);
    Ok(HtmlNode::parent("p", text_to_children(&text)?))
}

/// Only the first line is rendered; later lines of a heading block are dropped.
fn heading_to_node(block: &Block<'_>) -> Result<HtmlNode> {
    let first_line = block.lines().next().unwrap_or_default();
    let (level, content) = Heading::parse(first_line).ok_or_else(|| mismatch(block))?;
    Ok(HtmlNode::parent(
        Heading::tag(level),
        text_to_children(content)?,
    ))
}

fn code_to_node(block: &Block<'_>) -> Result<HtmlNode> {
    let body = CodeFence::body(block.text).ok_or_else(|| mismatch(block))?;
    Ok(HtmlNode::parent("pre", vec![HtmlNode::leaf("code", body)]))
}

fn quote_to_node(block: &Block<'_>) -> Result<HtmlNode> {
    let text = block
        .lines()
        .map(BlockQuote::strip_prefix)
        .collect::<Vec<_>>()
        .join("\n");
    Ok(HtmlNode::parent("blockquote", text_to_children(&text)?))
}

fn unordered_list_to_node(block: &Block<'_>) -> Result<HtmlNode> {
    let items = block
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| {
            Ok(HtmlNode::parent(
                "li",
                text_to_children(UnorderedList::item_text(line))?,
            ))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(HtmlNode::parent("ul", items))
}

fn ordered_list_to_node(block: &Block<'_>) -> Result<HtmlNode> {
    let items = block
        .lines()
        .filter(|line| !line.is_empty())
        .filter_map(OrderedList::item_text)
        .map(|text| Ok(HtmlNode::parent("li", text_to_children(text)?)))
        .collect::<Result<Vec<_>>>()?;
    Ok(HtmlNode::parent("ol", items))
}
