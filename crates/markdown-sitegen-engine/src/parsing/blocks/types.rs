use serde::Serialize;

/// The structural type of a block, decided from its own lines only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BlockType {
    /// Default when no other grammar matches.
    Paragraph,
    /// `#` to `######` followed by a space on the first line.
    Heading,
    /// Fenced with three backticks at both ends.
    Code,
    /// Every line starts with `>`.
    Quote,
    /// Every line starts with `- ` or `* `.
    UnorderedList,
    /// Lines numbered `1. `, `2. `, ... with no gaps.
    OrderedList,
}

/// A blank-line delimited chunk of a document with its classified type.
///
/// `text` is trimmed at both ends; internal line structure is preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    pub text: &'a str,
    pub block_type: BlockType,
}

impl<'a> Block<'a> {
    /// The block's lines, split on `\n`.
    pub fn lines(&self) -> impl Iterator<Item = &'a str> {
        self.text.split('\n')
    }
}
