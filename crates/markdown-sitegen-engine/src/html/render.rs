use std::borrow::Cow;

use crate::error::{MarkdownError, Result};

use super::node::HtmlNode;

/// Controls how a tree is serialised.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Escape `<`, `>`, `&` in text and `"` in attribute values.
    /// Off by default: values are emitted verbatim.
    pub escape_html: bool,
}

impl RenderOptions {
    pub fn escaped() -> Self {
        Self { escape_html: true }
    }

    fn text<'a>(&self, value: &'a str) -> Cow<'a, str> {
        if self.escape_html {
            html_escape::encode_text(value)
        } else {
            Cow::Borrowed(value)
        }
    }

    fn attribute<'a>(&self, value: &'a str) -> Cow<'a, str> {
        if self.escape_html {
            html_escape::encode_double_quoted_attribute(value)
        } else {
            Cow::Borrowed(value)
        }
    }
}

impl HtmlNode {
    /// Renders the tree without escaping.
    ///
    /// # Errors
    /// [`MarkdownError::InvalidNode`] for an empty tag or an empty attribute name
    /// anywhere in the tree.
    pub fn render(&self) -> Result<String> {
        self.render_with(&RenderOptions::default())
    }

    pub fn render_with(&self, options: &RenderOptions) -> Result<String> {
        let mut out = String::new();
        write_node(&mut out, self, options)?;
        Ok(out)
    }
}

fn write_node(out: &mut String, node: &HtmlNode, options: &RenderOptions) -> Result<()> {
    match node {
        HtmlNode::Leaf {
            tag: None, value, ..
        } => {
            out.push_str(&options.text(value));
        }
        HtmlNode::Leaf {
            tag: Some(tag),
            value,
            attributes,
        } => {
            if tag.is_empty() {
                return Err(MarkdownError::InvalidNode(format!(
                    "leaf node with value '{value}' has an empty tag"
                )));
            }
            open_tag(out, tag, attributes, options)?;
            out.push_str(&options.text(value));
            close_tag(out, tag);
        }
        HtmlNode::Parent {
            tag,
            children,
            attributes,
        } => {
            if tag.is_empty() {
                return Err(MarkdownError::InvalidNode(
                    "parent node requires a tag".to_string(),
                ));
            }
            open_tag(out, tag, attributes, options)?;
            for child in children {
                write_node(out, child, options)?;
            }
            close_tag(out, tag);
        }
    }
    Ok(())
}

fn open_tag(
    out: &mut String,
    tag: &str,
    attributes: &[(String, String)],
    options: &RenderOptions,
) -> Result<()> {
    out.push('<');
    out.push_str(tag);
    for (key, value) in attributes {
        if key.is_empty() {
            return Err(MarkdownError::InvalidNode(format!(
                "<{tag}> has an attribute with an empty name"
            )));
        }
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(&options.attribute(value));
        out.push('"');
    }
    out.push('>');
    Ok(())
}

fn close_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
