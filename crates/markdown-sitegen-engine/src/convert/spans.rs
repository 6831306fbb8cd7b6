use crate::{
    error::Result,
    html::HtmlNode,
    parsing::inline::{Span, tokenize},
};

/// Converts one inline span into a leaf node.
pub fn span_to_node(span: &Span) -> HtmlNode {
    match span {
        Span::Text(text) => HtmlNode::text(text.as_str()),
        Span::Bold(text) => HtmlNode::leaf("b", text.as_str()),
        Span::Italic(text) => HtmlNode::leaf("i", text.as_str()),
        Span::Code(text) => HtmlNode::leaf("code", text.as_str()),
        Span::Link { text, url } => {
            HtmlNode::leaf("a", text.as_str()).with_attribute("href", url.as_str())
        }
        Span::Image { alt, url } => HtmlNode::leaf("img", "")
            .with_attribute("src", url.as_str())
            .with_attribute("alt", alt.as_str()),
    }
}

/// Tokenizes inline Markdown and converts every span to a node.
pub fn text_to_children(text: &str) -> Result<Vec<HtmlNode>> {
    Ok(tokenize(text)?.iter().map(span_to_node).collect())
}
