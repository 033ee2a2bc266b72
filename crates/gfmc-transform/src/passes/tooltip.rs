//! Tooltip pass: footnote references become hover/focus tooltips.
//!
//! GFM renders a footnote as a `sup > a[data-footnote-ref]` pointing at a
//! definition inside a trailing `section[data-footnotes]`. This pass moves
//! each definition inline as a tooltip anchored to the word before the
//! reference, then drops the footnote section.

use std::collections::BTreeMap;

use gfmc_tree::{Document, Element, Node, visit_parents};

/// Run the footnote-to-tooltip rewrite over the whole document.
pub fn run(doc: &mut Document) {
    let definitions = collect_definitions(doc);
    if definitions.is_empty() {
        return;
    }
    tracing::debug!(count = definitions.len(), "converting footnotes to tooltips");

    visit_parents(doc, |children| {
        let mut i = 0;
        while i < children.len() {
            let Some(id) = footnote_ref_target(&children[i]) else {
                i += 1;
                continue;
            };
            let Some(content) = definitions.get(&id) else {
                // A ref without a definition stays as rendered.
                i += 1;
                continue;
            };

            let trigger_text = take_preceding_word(children, i)
                .unwrap_or_else(|| ref_label(&children[i]));
            children[i] = make_tooltip(&trigger_text, content.clone());
            i += 1;
        }
    });

    remove_footnote_sections(doc);
}

/// Definitions keyed by their `user-content-fn-*` id, with backref anchors
/// and trailing whitespace stripped.
fn collect_definitions(doc: &Document) -> BTreeMap<String, Vec<Node>> {
    let mut definitions = BTreeMap::new();

    for node in &doc.children {
        let Some(section) = node.as_element() else {
            continue;
        };
        if !is_footnote_section(section) {
            continue;
        }
        for list in section.children.iter().filter_map(Node::as_element) {
            if list.tag != "ol" {
                continue;
            }
            for item in list.children.iter().filter_map(Node::as_element) {
                if item.tag != "li" {
                    continue;
                }
                let Some(id) = item.attrs.get("id") else {
                    continue;
                };
                definitions.insert(id.to_owned(), definition_content(item));
            }
        }
    }

    definitions
}

fn is_footnote_section(el: &Element) -> bool {
    el.tag == "section"
        && (el.attrs.get("data-footnotes").is_some()
            || el.attrs.classes().contains(&"footnotes"))
}

/// The usable content of one definition `li`: backrefs removed, a lone
/// wrapping paragraph unwrapped so the content sits inline, trailing
/// whitespace trimmed.
fn definition_content(item: &Element) -> Vec<Node> {
    let mut content: Vec<Node> = item
        .children
        .iter()
        .filter(|n| !n.is_blank_text())
        .cloned()
        .collect();

    if content.len() == 1 && content[0].is_element("p") {
        if let Some(Node::Element(p)) = content.pop() {
            content = p.children;
        }
    }

    strip_backrefs(&mut content);
    trim_trailing_whitespace(&mut content);
    content
}

fn strip_backrefs(nodes: &mut Vec<Node>) {
    nodes.retain(|n| {
        !n.as_element()
            .is_some_and(|el| el.tag == "a" && el.attrs.get("data-footnote-backref").is_some())
    });
    for node in nodes.iter_mut() {
        if let Some(el) = node.as_element_mut() {
            strip_backrefs(&mut el.children);
        }
    }
}

fn trim_trailing_whitespace(nodes: &mut Vec<Node>) {
    while let Some(last) = nodes.last_mut() {
        match last {
            Node::Text(value) => {
                let trimmed = value.trim_end();
                if trimmed.is_empty() {
                    nodes.pop();
                } else {
                    *value = trimmed.to_owned();
                    break;
                }
            }
            _ => break,
        }
    }
}

/// The definition id a `sup > a[data-footnote-ref]` node points at.
fn footnote_ref_target(node: &Node) -> Option<String> {
    let sup = node.as_element().filter(|el| el.tag == "sup")?;
    let anchor = sup
        .children
        .iter()
        .filter_map(Node::as_element)
        .find(|el| el.tag == "a" && el.attrs.get("data-footnote-ref").is_some())?;
    let href = anchor.attrs.get("href")?;
    Some(href.strip_prefix('#').unwrap_or(href).to_owned())
}

/// The visible label of the reference, as a fallback trigger.
fn ref_label(node: &Node) -> String {
    gfmc_tree::text_content(node)
}

/// Pull the word immediately before the reference out of the preceding
/// text sibling, shortening that sibling in place.
fn take_preceding_word(children: &mut [Node], index: usize) -> Option<String> {
    if index == 0 {
        return None;
    }
    let Node::Text(value) = &mut children[index - 1] else {
        return None;
    };
    if value.ends_with(char::is_whitespace) {
        return None;
    }
    let split = value
        .rfind(char::is_whitespace)
        .map_or(0, |idx| idx + value[idx..].chars().next().map_or(1, char::len_utf8));
    let word = value[split..].to_owned();
    if word.is_empty() {
        return None;
    }
    value.truncate(split);
    Some(word)
}

fn make_tooltip(trigger_text: &str, content: Vec<Node>) -> Node {
    Element::new("span")
        .with_class("gfm-tooltip")
        .with_child(
            Element::new("span")
                .with_class("gfm-tooltip-trigger")
                .with_attr("tabindex", "0")
                .with_child(Node::text(trigger_text))
                .into(),
        )
        .with_child(
            Element::new("span")
                .with_class("gfm-tooltip-content")
                .with_attr("role", "tooltip")
                .with_children(content)
                .into(),
        )
        .into()
}

fn remove_footnote_sections(doc: &mut Document) {
    doc.children.retain(|node| {
        !node
            .as_element()
            .is_some_and(is_footnote_section)
    });
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn footnote_ref(n: u32) -> Node {
        Element::new("sup")
            .with_child(
                Element::new("a")
                    .with_attr("href", format!("#user-content-fn-{n}"))
                    .with_attr("id", format!("user-content-fnref-{n}"))
                    .with_attr("data-footnote-ref", "")
                    .with_child(Node::text(n.to_string()))
                    .into(),
            )
            .into()
    }

    fn footnote_section(defs: &[(u32, &str)]) -> Node {
        let items = defs.iter().map(|(n, text)| {
            Element::new("li")
                .with_attr("id", format!("user-content-fn-{n}"))
                .with_child(
                    Element::new("p")
                        .with_child(Node::text(format!("{text} ")))
                        .with_child(
                            Element::new("a")
                                .with_attr("href", format!("#user-content-fnref-{n}"))
                                .with_attr("data-footnote-backref", "")
                                .with_child(Node::text("↩"))
                                .into(),
                        )
                        .into(),
                )
                .into()
        });
        Element::new("section")
            .with_attr("data-footnotes", "")
            .with_class("footnotes")
            .with_child(Element::new("ol").with_children(items).into())
            .into()
    }

    fn doc_with_ref(text_before: &str) -> Document {
        Document::new(vec![
            Element::new("p")
                .with_child(Node::text(text_before))
                .with_child(footnote_ref(1))
                .with_child(Node::text(" for building."))
                .into(),
            footnote_section(&[(1, "Astro is a web framework.")]),
        ])
    }

    #[test]
    fn test_ref_becomes_tooltip() {
        let mut doc = doc_with_ref("Starlight uses Astro");
        run(&mut doc);
        let html = doc.to_html();

        assert!(html.contains(r#"class="gfm-tooltip""#));
        assert!(html.contains(r#"class="gfm-tooltip-trigger""#));
        assert!(html.contains(r#"class="gfm-tooltip-content""#));
        assert!(html.contains(r#"role="tooltip""#));
        assert!(html.contains("Astro is a web framework."));
    }

    #[test]
    fn test_preceding_word_is_trigger() {
        let mut doc = doc_with_ref("Starlight uses Astro");
        run(&mut doc);
        let html = doc.to_html();

        assert!(html.contains(">Astro</span>"));
        assert!(html.contains("Starlight uses "));
    }

    #[test]
    fn test_backref_stripped() {
        let mut doc = doc_with_ref("Use Astro");
        run(&mut doc);
        let html = doc.to_html();
        assert!(!html.contains("↩"));
    }

    #[test]
    fn test_footnote_section_removed() {
        let mut doc = doc_with_ref("Use Astro");
        run(&mut doc);
        let html = doc.to_html();
        assert!(!html.contains("footnotes"));
        assert!(!html.contains("user-content-fn-1"));
    }

    #[test]
    fn test_multiple_footnotes() {
        let mut doc = Document::new(vec![
            Element::new("p")
                .with_child(Node::text("Use Astro"))
                .with_child(footnote_ref(1))
                .with_child(Node::text(" with Starlight"))
                .with_child(footnote_ref(2))
                .with_child(Node::text(" for docs."))
                .into(),
            footnote_section(&[
                (1, "Astro is a web framework."),
                (2, "Starlight is a docs theme."),
            ]),
        ]);
        run(&mut doc);
        let html = doc.to_html();

        assert_eq!(html.matches("gfm-tooltip-trigger").count(), 2);
        assert!(html.contains("Astro is a web framework."));
        assert!(html.contains("Starlight is a docs theme."));
    }

    #[test]
    fn test_no_footnotes_is_a_no_op() {
        let mut doc = Document::new(vec![
            Element::new("p")
                .with_child(Node::text("Just a normal paragraph."))
                .into(),
        ]);
        let before = doc.to_html();
        run(&mut doc);
        assert_eq!(doc.to_html(), before);
    }

    #[test]
    fn test_ref_without_definition_left_alone() {
        let mut doc = Document::new(vec![
            Element::new("p")
                .with_child(Node::text("Dangling"))
                .with_child(footnote_ref(7))
                .into(),
            footnote_section(&[(1, "Only one.")]),
        ]);
        run(&mut doc);
        let html = doc.to_html();
        assert!(html.contains("data-footnote-ref"));
        assert!(html.contains("user-content-fn-7"));
    }

    #[test]
    fn test_trigger_falls_back_to_label() {
        // No word directly before the ref: previous text ends with space.
        let mut doc = Document::new(vec![
            Element::new("p")
                .with_child(Node::text("See "))
                .with_child(footnote_ref(1))
                .into(),
            footnote_section(&[(1, "Details.")]),
        ]);
        run(&mut doc);
        let html = doc.to_html();
        assert!(html.contains(">1</span>"));
        assert!(html.contains("See "));
    }
}
