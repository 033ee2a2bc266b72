//! One view over the two physical encodings of a comment.
//!
//! Pipelines that parse embedded HTML produce dedicated [`Node::Comment`]
//! nodes whose value is already the inner text. Pipelines that pass HTML
//! through unparsed produce [`Node::Raw`] nodes whose string literally
//! contains `<!-- ... -->`. Both must be recognized everywhere a marker can
//! appear.

use std::sync::LazyLock;

use regex::Regex;

use crate::node::Node;

/// Matches a raw string that is exactly one comment, including multiline
/// bodies, with the inner text captured.
static COMMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^<!--\s*(.*?)\s*-->$").expect("invalid comment regex")
});

/// Extract the comment text from a node.
///
/// Returns the inner text for [`Node::Comment`] directly, and for
/// [`Node::Raw`] nodes whose trimmed value matches `<!--...-->`. Returns
/// `None` for anything else.
#[must_use]
pub fn comment_value(node: &Node) -> Option<String> {
    match node {
        Node::Comment(value) => Some(value.clone()),
        Node::Raw(value) => COMMENT_RE
            .captures(value.trim())
            .map(|caps| caps[1].to_owned()),
        Node::Element(_) | Node::Text(_) => None,
    }
}

/// Check whether a node is a comment in either encoding.
#[must_use]
pub fn is_comment(node: &Node) -> bool {
    comment_value(node).is_some()
}
