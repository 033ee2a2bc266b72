//! Badge: restyle a code span as a badge.

use gfmc_tree::{Element, Node};

use crate::marker::Params;

/// Build a badge span from the code element preceding the marker.
///
/// The text is the code element's first text child; `variant` defaults to
/// "default" and `size` to "small".
#[must_use]
pub fn badge(code: &Element, params: &Params) -> Node {
    let variant = params.get("variant").map_or("default", String::as_str);
    let size = params.get("size").map_or("small", String::as_str);
    let text = code
        .children
        .first()
        .and_then(|n| match n {
            Node::Text(t) => Some(t.clone()),
            _ => None,
        })
        .unwrap_or_default();

    Element::new("span")
        .with_attr("class", format!("sl-badge {variant} {size}"))
        .with_child(Node::Text(text))
        .into()
}
