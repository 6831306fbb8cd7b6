/// Heading block type with owned marker constants.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 6;

    /// Returns the heading level of a line: 1-6 `#` followed by a space.
    ///
    /// Seven or more `#` characters, or a missing space, is not a heading.
    pub fn level(line: &str) -> Option<u8> {
        let hashes = line.chars().take_while(|&c| c == Self::MARKER).count();
        if !(1..=Self::MAX_LEVEL).contains(&hashes) {
            return None;
        }
        if line[hashes..].starts_with(' ') {
            u8::try_from(hashes).ok()
        } else {
            None
        }
    }

    /// Splits a heading line into its level and trimmed content.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let level = Self::level(line)?;
        let content = &line[usize::from(level) + 1..];
        Some((level, content.trim()))
    }

    /// The HTML tag for a heading level, `h1` to `h6`.
    pub fn tag(level: u8) -> String {
        format!("h{level}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_one_to_six() {
        assert_eq!(Heading::level("# Heading 1"), Some(1));
        assert_eq!(Heading::level("### Heading 3"), Some(3));
        assert_eq!(Heading::level("###### Heading 6"), Some(6));
    }

    #[test]
    fn too_many_hashes_is_not_heading() {
        assert_eq!(Heading::level("####### Too Many Hashes"), None);
    }

    #[test]
    fn missing_space_is_not_heading() {
        assert_eq!(Heading::level("#NoSpace"), None);
        assert_eq!(Heading::level("#"), None);
        assert_eq!(Heading::level("Not a heading # in middle"), None);
    }

    #[test]
    fn parse_trims_content() {
        assert_eq!(Heading::parse("##   Spaced out  "), Some((2, "Spaced out")));
        assert_eq!(Heading::parse("# "), Some((1, "")));
    }

    #[test]
    fn tag_names() {
        assert_eq!(Heading::tag(1), "h1");
        assert_eq!(Heading::tag(6), "h6");
    }
}
