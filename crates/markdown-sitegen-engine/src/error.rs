use crate::parsing::blocks::BlockType;

/// Errors raised while tokenizing, converting or rendering a document.
///
/// Every failure aborts the whole conversion; there is no partial output.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkdownError {
    #[error("Invalid Markdown syntax: unmatched delimiter '{delimiter}' in text: '{text}'")]
    MalformedInline { delimiter: String, text: String },
    #[error("Invalid HTML node: {0}")]
    InvalidNode(String),
    #[error("Block does not fit its classified type {block_type:?}: '{block}'")]
    UnknownBlockType { block_type: BlockType, block: String },
    #[error("Invalid Markdown: no H1 heading found")]
    NoTitleFound,
}

pub type Result<T, E = MarkdownError> = std::result::Result<T, E>;
