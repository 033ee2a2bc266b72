//! Cleanup pass: prune every marker still in the tree.
//!
//! Runs last. Anything `parse_node` still recognizes at this point went
//! unapplied (unmet precondition, lone opener, disabled transform) and
//! must not leak into rendered output.

use gfmc_tree::{Document, visit_parents};

use crate::marker::parse_node;

pub fn run(doc: &mut Document) {
    visit_parents(doc, |children| {
        children.retain(|node| parse_node(node).is_none());
    });
}
