/// Blockquote block type with owned prefix constant.
pub struct BlockQuote;

impl BlockQuote {
    pub const PREFIX: char = '>';

    pub fn is_quote_line(line: &str) -> bool {
        line.starts_with(Self::PREFIX)
    }

    /// Strips one `>` and at most one following space.
    pub fn strip_prefix(line: &str) -> &str {
        let rest = line.strip_prefix(Self::PREFIX).unwrap_or(line);
        rest.strip_prefix(' ').unwrap_or(rest)
    }
}
