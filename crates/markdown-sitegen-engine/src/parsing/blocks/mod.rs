//! # Block Parsing
//!
//! Splits a document into blocks and decides each block's structural type.
//!
//! ## Parsing Phases
//!
//! 1. **Segmentation** (`segment`): the document is split on runs of two or
//!    more newlines; pieces are trimmed and blank pieces dropped.
//! 2. **Classification** (`classify`): each block is typed by an ordered
//!    decision list over its own lines (no lookahead into neighbours).
//!
//! ## Modules
//!
//! - **`types`**: Core types (`Block`, `BlockType`)
//! - **`kinds`**: Block-specific types with owned delimiters (Heading, CodeFence,
//!   BlockQuote, UnorderedList, OrderedList, Paragraph)
//! - **`segment`**: `segment()` document splitter
//! - **`classify`**: `classify()` decision list
//!
//! ## Key Invariants
//!
//! - Segmentation never yields empty or whitespace-only blocks
//! - Classification is total: every block gets exactly one of six types
//! - Fenced code blocks are raw zones: no inline parsing inside

pub mod classify;
pub mod kinds;
pub mod segment;
pub mod types;

pub use classify::classify;
pub use segment::segment;
pub use types::{Block, BlockType};
