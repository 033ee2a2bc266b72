//! Steps: stamp ordered lists between the markers with the steps style.

use gfmc_tree::Node;

use crate::marker::Params;

/// Stamp every ordered list in the content with `class="sl-steps"` and
/// `role="list"`. Requires at least one ordered list.
#[must_use]
pub fn steps(content: &[Node], _params: &Params) -> Option<Vec<Node>> {
    if !content.iter().any(|n| n.is_element("ol")) {
        return None;
    }

    let mut replacement = content.to_vec();
    for node in &mut replacement {
        if let Some(el) = node.as_element_mut() {
            if el.tag == "ol" {
                el.attrs.set("class", "sl-steps");
                el.attrs.set("role", "list");
            }
        }
    }
    Some(replacement)
}

#[cfg(test)]
mod tests {
    use gfmc_tree::Element;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_stamps_ordered_list() {
        let content = vec![Node::from(
            Element::new("ol").with_child(Element::new("li").with_child(Node::text("a")).into()),
        )];
        let out = steps(&content, &Params::new()).unwrap();
        let ol = out[0].as_element().unwrap();
        assert_eq!(ol.attrs.get("class"), Some("sl-steps"));
        assert_eq!(ol.attrs.get("role"), Some("list"));
        // List items are untouched.
        assert_eq!(ol.children.len(), 1);
    }

    #[test]
    fn test_without_ordered_list_is_unchanged() {
        let content = vec![Node::from(Element::new("p"))];
        assert_eq!(steps(&content, &Params::new()), None);
    }
}
