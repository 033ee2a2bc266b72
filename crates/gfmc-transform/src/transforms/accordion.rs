//! Accordion group: wrap collapsible blocks in one container.

use gfmc_tree::{Element, Node};

use crate::marker::Params;

/// Wrap the non-blank content in a grouping container.
#[must_use]
pub fn accordion_group(content: &[Node], _params: &Params) -> Option<Vec<Node>> {
    let kept: Vec<Node> = content
        .iter()
        .filter(|n| !n.is_blank_text())
        .cloned()
        .collect();

    Some(vec![
        Element::new("div")
            .with_class("gfm-accordion-group")
            .with_children(kept)
            .into(),
    ])
}
