/// Link inline type with owned bracket constants.
///
/// The text part may not contain `[` or `]`; the URL part may not contain
/// `(` or `)`.
pub struct Link;

impl Link {
    pub const TEXT_OPEN: u8 = b'[';
    pub const TEXT_CLOSE: u8 = b']';
    pub const URL_OPEN: u8 = b'(';
    pub const URL_CLOSE: u8 = b')';

    /// Bytes that end the text part.
    pub const TEXT_STOPS: &'static [u8] = &[Self::TEXT_OPEN, Self::TEXT_CLOSE];
    /// Bytes that end the URL part.
    pub const URL_STOPS: &'static [u8] = &[Self::URL_OPEN, Self::URL_CLOSE];
}
