/// Fenced code block type with owned fence constant.
///
/// A code block is a raw zone: its body is never tokenized.
pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";
    /// Blocks must be longer than this many characters to hold two fences and a body.
    pub const MIN_LEN: usize = 6;

    /// Whether the whole block is fenced at both ends.
    pub fn is_fenced(block: &str) -> bool {
        block.chars().count() > Self::MIN_LEN
            && block.starts_with(Self::FENCE)
            && block.ends_with(Self::FENCE)
    }

    /// The literal body of a fenced block.
    ///
    /// Removes both fences, then at most one newline from each end. Any info
    /// string after the opening fence is kept.
    pub fn body(block: &str) -> Option<&str> {
        if !Self::is_fenced(block) {
            return None;
        }
        let inner = &block[Self::FENCE.len()..block.len() - Self::FENCE.len()];
        let inner = inner.strip_prefix('\n').unwrap_or(inner);
        Some(inner.strip_suffix('\n').unwrap_or(inner))
    }
}
