/// A byte cursor over inline text.
///
/// All syntax bytes the tokenizer looks for are ASCII, so every position the
/// cursor stops at is a valid `str` boundary for slicing.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Creates a cursor positioned at `i`.
    #[cfg(test)]
    pub fn at(s: &'a str, i: usize) -> Self {
        Self { s, i }
    }

    pub fn pos(&self) -> usize {
        self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// The byte just before the cursor, if any.
    pub fn prev(&self) -> Option<u8> {
        self.i
            .checked_sub(1)
            .and_then(|j| self.s.as_bytes().get(j).copied())
    }

    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s.as_bytes().get(self.i..).is_some_and(|rest| rest.starts_with(pat))
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.s.as_bytes().get(self.i).copied()?;
        self.i += 1;
        Some(b)
    }

    /// Advances until one of `stops` is under the cursor (or eof) and returns it.
    pub fn skip_until(&mut self, stops: &[u8]) -> Option<u8> {
        while let Some(b) = self.peek() {
            if stops.contains(&b) {
                return Some(b);
            }
            self.i += 1;
        }
        None
    }

    /// Slice of the input between `start` and the cursor.
    pub fn since(&self, start: usize) -> &'a str {
        &self.s[start..self.i]
    }
}
