//! Link cards: anchors restyled as navigation cards.

use gfmc_tree::{Element, Node, text_content};

use crate::marker::Params;
use crate::sanitize::sanitize_url;

use super::ICON_ATTR;

/// Build a single link card from the first qualifying paragraph.
///
/// A paragraph qualifies when it holds an anchor with an href and title
/// text; an em-dash or spaced-hyphen separated text sibling supplies the
/// optional description.
#[must_use]
pub fn link_card(content: &[Node], _params: &Params) -> Option<Vec<Node>> {
    for node in content {
        if let Some(el) = node.as_element().filter(|el| el.tag == "p") {
            if let Some((href, title, description)) = extract_link_data(&el.children) {
                return Some(vec![make_link_card(&href, &title, &description)]);
            }
        }
    }
    None
}

/// Build one card per qualifying list item.
///
/// Returns `None` (unchanged) when no item qualifies.
#[must_use]
pub fn link_cards(content: &[Node], _params: &Params) -> Option<Vec<Node>> {
    let mut cards = Vec::new();

    for node in content {
        let Some(list) = node.as_element().filter(|el| el.tag == "ul") else {
            continue;
        };
        for item in &list.children {
            let Some(li) = item.as_element().filter(|el| el.tag == "li") else {
                continue;
            };
            // The item's content may sit directly in the <li> or inside a
            // leading paragraph.
            let search = match li.children.first().and_then(Node::as_element) {
                Some(p) if p.tag == "p" => &p.children,
                _ => &li.children,
            };
            if let Some((href, title, description)) = extract_link_data(search) {
                cards.push(make_link_card(&href, &title, &description));
            }
        }
    }

    if cards.is_empty() { None } else { Some(cards) }
}

/// Pull (href, title, description) out of a sibling run. The description
/// is the text after an em-dash or ` - ` separator in a text sibling.
fn extract_link_data(nodes: &[Node]) -> Option<(String, String, String)> {
    let mut href = String::new();
    let mut title = String::new();
    let mut description = String::new();

    for node in nodes {
        match node {
            Node::Element(el) if el.tag == "a" => {
                href = el.attrs.get("href").unwrap_or_default().to_owned();
                title = text_content(node);
            }
            Node::Text(text) => {
                if let Some(rest) = split_description(text) {
                    description = rest.to_owned();
                }
            }
            _ => {}
        }
    }

    if href.is_empty() || title.is_empty() {
        return None;
    }
    Some((href, title, description))
}

/// The text after an em-dash (`—`) separator, or after a `- ` preceded by
/// any whitespace.
fn split_description(text: &str) -> Option<&str> {
    if let Some(idx) = text.find('—') {
        return Some(text[idx + '—'.len_utf8()..].trim());
    }
    for (idx, _) in text.match_indices("- ") {
        if text[..idx].ends_with(char::is_whitespace) {
            return Some(text[idx + 2..].trim());
        }
    }
    None
}

fn make_link_card(href: &str, title: &str, description: &str) -> Node {
    let mut stack_children = vec![Node::from(
        Element::new("a")
            .with_attr("href", sanitize_url(href))
            .with_child(
                Element::new("span")
                    .with_class("title")
                    .with_child(Node::text(title))
                    .into(),
            ),
    )];

    if !description.is_empty() {
        stack_children.push(
            Element::new("span")
                .with_class("description")
                .with_child(Node::text(description))
                .into(),
        );
    }

    let arrow = Element::new("span")
        .with_attr(ICON_ATTR, "right-arrow")
        .with_class("icon");

    Element::new("div")
        .with_class("sl-link-card")
        .with_child(
            Element::new("span")
                .with_attr("class", "sl-flex stack")
                .with_children(stack_children)
                .into(),
        )
        .with_child(arrow.into())
        .into()
}
