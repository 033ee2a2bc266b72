//! The pipeline entry point.

use gfmc_tree::Document;

use crate::context::RewriteContext;
use crate::options::Options;
use crate::passes;

/// Rewrites marker-annotated documents into component subtrees.
///
/// One rewriter is cheap to build and reusable across documents; each
/// [`rewrite`](Self::rewrite) call runs with fresh per-run state, so id
/// assignment never leaks between documents.
///
/// # Example
///
/// ```
/// use gfmc_transform::{ComponentRewriter, Options};
/// use gfmc_tree::{Document, parse_fragment};
///
/// let nodes = parse_fragment("<!-- steps --><ol><li>One</li></ol><!-- /steps -->")?;
/// let mut doc = Document::new(nodes);
/// ComponentRewriter::new(Options::default()).rewrite(&mut doc);
/// assert!(doc.to_html().contains("sl-steps"));
/// # Ok::<(), gfmc_tree::FragmentError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ComponentRewriter {
    options: Options,
}

impl ComponentRewriter {
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// The configured options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Rewrite one document in place.
    ///
    /// Passes run in a fixed order: raw splitting, block transforms,
    /// inline transforms, icon hydration, footnote tooltips, marker
    /// cleanup. The result carries no recognizable markers, so running
    /// `rewrite` again is a no-op.
    pub fn rewrite(&self, doc: &mut Document) {
        let mut ctx = RewriteContext::new();

        tracing::debug!("rewriting document");
        passes::split::run(doc);
        passes::block::run(doc, &self.options, &mut ctx);
        passes::inline::run(doc, &self.options);
        passes::hydrate::run(doc, &self.options);
        if self.options.tooltips {
            passes::tooltip::run(doc);
        }
        passes::cleanup::run(doc);
    }
}
