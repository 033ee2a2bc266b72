//! Comment-marker driven tree rewriting for GFM-rendered HTML.
//!
//! Markdown passed through a GFM renderer can only express generic HTML,
//! but documentation sites want richer components: tab groups, file trees,
//! cards, badges. This crate recognizes HTML comments as component markers
//! (`<!-- tabs -->` ... `<!-- /tabs -->`) and rewrites the enclosed
//! subtrees into the corresponding component markup, leaving everything
//! unmarked untouched.
//!
//! The entry point is [`ComponentRewriter`], which runs a fixed pass
//! pipeline over a [`gfmc_tree::Document`]: raw-node splitting, block
//! transforms, inline transforms, icon hydration, footnote tooltips, and
//! marker cleanup. Unapplied markers never survive a run.
//!
//! # Example
//!
//! ```
//! use gfmc_transform::{ComponentRewriter, Options};
//! use gfmc_tree::{Document, parse_fragment};
//!
//! let html = concat!(
//!     "<!-- steps -->",
//!     "<ol><li>Install the CLI</li><li>Run it</li></ol>",
//!     "<!-- /steps -->",
//! );
//! let mut doc = Document::new(parse_fragment(html)?);
//! ComponentRewriter::new(Options::default()).rewrite(&mut doc);
//! assert!(doc.to_html().starts_with(r#"<ol class="sl-steps""#));
//! # Ok::<(), gfmc_tree::FragmentError>(())
//! ```

mod context;
mod marker;
mod options;
mod passes;
mod rewriter;
mod sanitize;
pub mod transforms;
mod treetext;

pub use context::{RewriteContext, TabIds};
pub use marker::{ALL_COMPONENTS, Component, Marker, Params, Range, collect_ranges, parse_node};
pub use options::Options;
pub use rewriter::ComponentRewriter;
pub use sanitize::{sanitize_svg, sanitize_url};
pub use treetext::{TreeEntry, parse_tree_text};
