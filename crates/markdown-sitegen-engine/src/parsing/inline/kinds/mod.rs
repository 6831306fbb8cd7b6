//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Link`**: `[text](url)` brackets, never preceded by `!`
//! - **`Image`**: `![alt](url)`, the `!` prefix plus link brackets
//! - **`Delimiter`**: `**` bold, `_` italic, `` ` `` code
//!
//! The tokenizer never hardcodes `[`, `**` or `` ` ``; it asks these types.

pub mod delimiter;
pub mod image;
pub mod link;

pub use delimiter::Delimiter;
pub use image::Image;
pub use link::Link;
