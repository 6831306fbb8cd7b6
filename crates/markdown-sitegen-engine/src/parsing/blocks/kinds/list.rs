/// Unordered list block type with owned item markers.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKERS: [&'static str; 2] = ["- ", "* "];
    /// Characters removed from the front of every item line.
    pub const MARKER_LEN: usize = 2;

    pub fn is_item_line(line: &str) -> bool {
        Self::MARKERS.iter().any(|m| line.starts_with(m))
    }

    /// The item text: the line without its first two characters.
    pub fn item_text(line: &str) -> &str {
        match line.char_indices().nth(Self::MARKER_LEN) {
            Some((i, _)) => &line[i..],
            None => "",
        }
    }
}

/// Ordered list block type: `1. `, `2. `, ... strictly increasing from one.
pub struct OrderedList;

impl OrderedList {
    pub const SEPARATOR: &'static str = ". ";

    /// The marker expected on the `n`th line (1-based).
    pub fn marker(n: usize) -> String {
        format!("{n}{}", Self::SEPARATOR)
    }

    /// Whether lines are numbered 1, 2, 3... with no gaps.
    pub fn is_sequence<'a>(lines: impl IntoIterator<Item = &'a str>) -> bool {
        lines
            .into_iter()
            .enumerate()
            .all(|(i, line)| line.starts_with(&Self::marker(i + 1)))
    }

    /// The item text: everything after the first space, or `None` without one.
    pub fn item_text(line: &str) -> Option<&str> {
        line.split_once(' ').map(|(_, rest)| rest)
    }
}
