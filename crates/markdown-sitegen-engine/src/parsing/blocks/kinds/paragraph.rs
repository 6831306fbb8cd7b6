/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the default block when no other
/// grammar matches. Their lines are joined with a single space before inline
/// tokenizing.
pub struct Paragraph;

impl Paragraph {
    pub const LINE_JOIN: &'static str = " ";

    pub fn inline_text(block: &str) -> String {
        block.split('\n').collect::<Vec<_>>().join(Self::LINE_JOIN)
    }
}
