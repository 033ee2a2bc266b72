//! Card and card grid: blockquotes restyled as cards.

use gfmc_tree::{Element, Node, text_content};

use crate::marker::{Marker, Params, parse_node};

use super::ICON_ATTR;

/// Build a card from the first blockquote in the consumed span.
///
/// Returns `None` (unchanged) when no blockquote was consumed.
#[must_use]
pub fn card(content: &[Node], params: &Params) -> Option<Vec<Node>> {
    let blockquote = content
        .iter()
        .find_map(|n| n.as_element().filter(|el| el.tag == "blockquote"))?;
    Some(vec![make_card(blockquote, params)])
}

/// Wrap cards between the grid markers in a card grid.
///
/// An inline `card` marker inside the range sets pending params that the
/// next blockquote consumes; each blockquote becomes one card. Zero cards
/// still produce the (empty) grid.
#[must_use]
pub fn card_grid(content: &[Node], _params: &Params) -> Option<Vec<Node>> {
    let mut cards = Vec::new();
    let mut pending = Params::new();

    for node in content {
        if let Some(Marker { keyword, params }) = parse_node(node) {
            if keyword == "card" {
                pending = params;
            }
            continue;
        }

        if let Some(el) = node.as_element().filter(|el| el.tag == "blockquote") {
            cards.push(make_card(el, &pending));
            pending = Params::new();
        }
    }

    Some(vec![
        Element::new("div")
            .with_class("card-grid")
            .with_children(cards)
            .into(),
    ])
}

/// Build one card article from a blockquote.
///
/// The title comes from a bold run in the blockquote's first paragraph; the
/// remaining element children are the body. Without a bold run everything
/// is body and the title is empty.
fn make_card(blockquote: &Element, params: &Params) -> Node {
    let elements: Vec<&Element> = blockquote
        .children
        .iter()
        .filter_map(Node::as_element)
        .collect();

    let mut title = String::new();
    let mut body: Vec<Node> = Vec::new();

    if let Some((first, rest)) = elements.split_first() {
        let strong = (first.tag == "p")
            .then(|| first.find_child("strong"))
            .flatten();
        if let Some(strong) = strong {
            title = text_content(&Node::Element(strong.clone()));
            body = rest.iter().map(|el| Node::Element((*el).clone())).collect();
        } else {
            body = elements
                .iter()
                .map(|el| Node::Element((*el).clone()))
                .collect();
        }
    }

    let mut title_children = Vec::new();
    if let Some(icon_name) = params.get("icon") {
        title_children.push(
            Element::new("span")
                .with_attr(ICON_ATTR, icon_name.clone())
                .with_class("icon")
                .into(),
        );
    }
    title_children.push(Element::new("span").with_child(Node::Text(title)).into());

    Element::new("article")
        .with_attr("class", "card sl-flex")
        .with_child(
            Element::new("p")
                .with_attr("class", "title sl-flex")
                .with_children(title_children)
                .into(),
        )
        .with_child(
            Element::new("div")
                .with_class("body")
                .with_children(body)
                .into(),
        )
        .into()
}
