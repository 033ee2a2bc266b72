//! Inline transform pass: badge and icon markers inside element content.

use gfmc_tree::{Document, Element, Node};

use crate::marker::{Component, parse_node};
use crate::options::Options;
use crate::transforms;

/// Process badge and icon markers among the direct children of elements.
///
/// Scans right-to-left so splices never shift indices still to be
/// visited. A badge marker pairs with the code element immediately before
/// it; without one (or when the transform yields nothing) the orphan
/// marker alone is removed. The document root is not scanned: a marker
/// sitting at the top level is block content and falls through to cleanup.
pub fn run(doc: &mut Document, options: &Options) {
    for node in &mut doc.children {
        if let Node::Element(el) = node {
            visit_element(el, options);
        }
    }
}

fn visit_element(el: &mut Element, options: &Options) {
    process_children(&mut el.children, options);
    for child in &mut el.children {
        if let Node::Element(inner) = child {
            visit_element(inner, options);
        }
    }
}

fn process_children(children: &mut Vec<Node>, options: &Options) {
    let mut i = children.len();
    while i > 0 {
        i -= 1;
        let Some(marker) = parse_node(&children[i]) else {
            continue;
        };

        match marker.keyword.as_str() {
            "badge" => {
                let preceding_code = i > 0
                    && children[i - 1]
                        .as_element()
                        .is_some_and(|el| el.tag == "code");
                if preceding_code && options.is_enabled(Component::Badge) {
                    let code = children[i - 1]
                        .as_element()
                        .cloned()
                        .unwrap_or_default();
                    let replacement = transforms::badge(&code, &marker.params);
                    children.splice(i - 1..=i, [replacement]);
                    i -= 1;
                } else {
                    children.remove(i);
                }
            }
            "icon" => {
                let replacement = options
                    .is_enabled(Component::Icon)
                    .then(|| transforms::icon(&marker.params, options))
                    .flatten();
                match replacement {
                    Some(node) => {
                        children[i] = node;
                    }
                    None => {
                        children.remove(i);
                    }
                }
            }
            _ => {}
        }
    }
}
