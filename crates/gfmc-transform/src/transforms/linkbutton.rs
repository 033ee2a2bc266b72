//! Link button: restyle an anchor, dropping its wrapper paragraph.

use gfmc_tree::Node;

use crate::marker::Params;

/// Find the first anchor directly in the content or one level inside a
/// paragraph, restyle it, and return just the anchor.
#[must_use]
pub fn link_button(content: &[Node], params: &Params) -> Option<Vec<Node>> {
    let variant = params.get("variant").map_or("primary", String::as_str);

    let link = find_anchor(content)?;
    let mut link = link.clone();
    if let Some(el) = link.as_element_mut() {
        el.attrs
            .set("class", format!("sl-link-button not-content {variant}"));
    }
    Some(vec![link])
}

fn find_anchor(content: &[Node]) -> Option<&Node> {
    for node in content {
        if node.is_element("a") {
            return Some(node);
        }
        if let Some(el) = node.as_element() {
            if el.tag == "p" {
                if let Some(link) = el.children.iter().find(|c| c.is_element("a")) {
                    return Some(link);
                }
            }
        }
    }
    None
}
