use crate::{
    error::{MarkdownError, Result},
    html::HtmlNode,
    parsing::parse_document,
};

use super::blocks::block_to_node;

/// The tag of the root container every document is wrapped in.
pub const ROOT_TAG: &str = "div";

/// Converts a whole Markdown document into a single `<div>` tree.
///
/// Blocks are converted in order; the first failing block aborts the
/// conversion and no partial tree is returned.
pub fn convert_document(markdown: &str) -> Result<HtmlNode> {
    let doc = parse_document(markdown);
    let children = doc
        .blocks
        .iter()
        .map(block_to_node)
        .collect::<Result<Vec<_>>>()?;

    log::debug!("converted document with {} blocks", children.len());
    Ok(HtmlNode::parent(ROOT_TAG, children))
}

/// Returns the text of the first `# ` heading line, trimmed.
///
/// Lines are trimmed before matching, so indented headings count.
///
/// # Errors
/// [`MarkdownError::NoTitleFound`] when no line is a level-one heading.
pub fn extract_title(markdown: &str) -> Result<String> {
    markdown
        .split('\n')
        .map(str::trim)
        .find_map(|line| line.strip_prefix("# "))
        .map(|title| title.trim().to_string())
        .ok_or(MarkdownError::NoTitleFound)
}
