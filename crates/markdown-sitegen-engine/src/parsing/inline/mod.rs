//! # Inline Parsing
//!
//! Turns the inline text of a block into typed [`Span`]s.
//!
//! ## Architecture
//!
//! Tokenizing is an ordered pipeline over a list of spans that starts as one
//! `Text` span holding the whole input:
//!
//! 1. `![alt](url)` images, found with a cursor scan
//! 2. `[text](url)` links not preceded by `!`
//! 3. `**` bold, `_` italic, `` ` `` code, split with `str::split`
//!
//! Each pass only looks at spans that are still `Text`.
//!
//! ## Modules
//!
//! - **`types`**: `Span` enum and its payload-free `SpanKind`
//! - **`kinds`**: Inline types with owned delimiters (Link, Image, Delimiter)
//! - **`cursor`**: `Cursor` for byte-by-byte scanning
//! - **`parser`**: `tokenize()` entry point and the individual passes
//!
//! ## Unmatched Delimiters
//!
//! An odd number of `**`, `_` or `` ` `` markers in a text span is a hard
//! failure (`MalformedInline`), not literal text.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::tokenize;
pub use types::{Span, SpanKind};
