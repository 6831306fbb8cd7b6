//! Markdown to HTML tree conversion.
//!
//! The engine is pure and synchronous: no I/O, no shared state. Callers use
//! [`convert_document`] to build a tree, [`HtmlNode::render`] to serialise it,
//! and [`extract_title`] to find the page title.

pub mod convert;
pub mod error;
pub mod html;
pub mod parsing;

// Re-export key types for easier usage
pub use convert::{convert_document, extract_title};
pub use error::{MarkdownError, Result};
pub use html::{HtmlNode, RenderOptions};
pub use parsing::{
    blocks::{Block, BlockType, classify, segment},
    inline::{Span, SpanKind, tokenize},
    parse_document,
};
