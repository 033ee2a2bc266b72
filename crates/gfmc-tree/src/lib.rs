//! Document tree model for the GFM components rewriter.
//!
//! This crate provides the [`Node`] union that the transform engine operates
//! on: a mutable, ordered, acyclic n-ary tree produced by parsing a markdown
//! document to HTML. Two physical encodings of comments exist in the wild —
//! dedicated [`Node::Comment`] nodes (pipelines that parse embedded HTML)
//! and [`Node::Raw`] nodes carrying literal `<!-- ... -->` text (pipelines
//! that pass HTML through unparsed). [`comment_value`] collapses both into
//! one view so consumers pattern-match once.
//!
//! Also included:
//! - [`parse_fragment`]: a quick-xml based fragment parser used for
//!   untrusted SVG content,
//! - [`Document::to_html`]: a serializer so callers and tests can assert on
//!   rendered output.

mod comment;
mod fragment;
mod html;
mod node;

pub use comment::{comment_value, is_comment};
pub use fragment::{FragmentError, parse_fragment};
pub use html::{escape_attr, escape_html};
pub use node::{Attrs, Document, Element, Node, text_content, visit_parents};
