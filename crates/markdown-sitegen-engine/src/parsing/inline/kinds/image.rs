use super::link::Link;

/// Image inline type: a link with a leading `!`.
pub struct Image;

impl Image {
    pub const BANG: u8 = b'!';
    pub const OPEN: &'static [u8] = &[Self::BANG, Link::TEXT_OPEN];
}
