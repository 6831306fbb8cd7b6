//! # Tree Conversion
//!
//! Maps parsed blocks and inline spans onto the [`HtmlNode`](crate::html::HtmlNode) model.
//!
//! ## Modules
//!
//! - **`spans`**: one leaf per inline `Span`
//! - **`blocks`**: one subtree per classified `Block`
//! - **`document`**: `convert_document()` and `extract_title()` entry points
//!
//! ## Tag Mapping
//!
//! | Input | Output |
//! |---|---|
//! | paragraph | `<p>` |
//! | heading level n | `<hn>` |
//! | code block | `<pre><code>` (literal, never tokenized) |
//! | quote | `<blockquote>` |
//! | unordered / ordered list | `<ul>` / `<ol>` with `<li>` items |
//! | bold / italic / code span | `<b>` / `<i>` / `<code>` |
//! | link | `<a href>` |
//! | image | `<img src alt>` |

pub mod blocks;
pub mod document;
pub mod spans;

pub use blocks::block_to_node;
pub use document::{convert_document, extract_title};
pub use spans::{span_to_node, text_to_children};
