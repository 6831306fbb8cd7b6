//! # HTML Node Model
//!
//! An owned tree of renderable nodes with no knowledge of Markdown.
//!
//! ## Modules
//!
//! - **`node`**: `HtmlNode` (Leaf / Parent) and its `Attributes`
//! - **`render`**: depth-first rendering to a string, with optional escaping
//!
//! ## Rendering Contract
//!
//! - A Leaf without a tag renders its value verbatim.
//! - A tagged node renders `<tag attrs>` + value or children + `</tag>`.
//! - Attributes render in insertion order as ` key="value"`.
//! - By default nothing is escaped; `RenderOptions::escape_html` opts in.

pub mod node;
pub mod render;

pub use node::{Attributes, HtmlNode};
pub use render::RenderOptions;
