//! HTML serialization.

use std::fmt::Write;

use crate::node::{Document, Node};

/// Tags serialized without a closing tag when childless.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

impl Document {
    /// Serialize the whole document.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::with_capacity(4096);
        for child in &self.children {
            serialize_node(child, &mut out);
        }
        out
    }
}

impl Node {
    /// Serialize a single node and its descendants.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::with_capacity(256);
        serialize_node(self, &mut out);
        out
    }
}

fn serialize_node(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(&escape_html(text)),
        Node::Raw(raw) => out.push_str(raw),
        Node::Comment(value) => {
            let _ = write!(out, "<!--{value}-->");
        }
        Node::Element(el) => {
            out.push('<');
            out.push_str(&el.tag);
            for (key, value) in el.attrs.iter() {
                if value.is_empty() {
                    // Boolean attribute (hidden, open, data-pagefind-ignore).
                    let _ = write!(out, " {key}");
                } else {
                    let _ = write!(out, r#" {key}="{}""#, escape_attr(value));
                }
            }
            if el.children.is_empty() && VOID_ELEMENTS.contains(&el.tag.as_str()) {
                out.push_str("/>");
                return;
            }
            out.push('>');
            for child in &el.children {
                serialize_node(child, out);
            }
            let _ = write!(out, "</{}>", el.tag);
        }
    }
}

/// Escape text for HTML content.
#[must_use]
pub fn escape_html(text: &str) -> String {
    escape(text, false)
}

/// Escape text for an HTML attribute value.
#[must_use]
pub fn escape_attr(text: &str) -> String {
    escape(text, true)
}

fn escape(text: &str, escape_quotes: bool) -> String {
    let mut result = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' if escape_quotes => result.push_str("&quot;"),
            _ => result.push(ch),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::node::Element;

    #[test]
    fn test_element_with_attrs_and_text() {
        let node: Node = Element::new("a")
            .with_attr("href", "/docs")
            .with_child(Node::text("Docs & more"))
            .into();
        assert_eq!(node.to_html(), r#"<a href="/docs">Docs &amp; more</a>"#);
    }

    #[test]
    fn test_boolean_attribute() {
        let node: Node = Element::new("div").with_attr("hidden", "").into();
        assert_eq!(node.to_html(), "<div hidden></div>");
    }

    #[test]
    fn test_void_element() {
        let node: Node = Element::new("br").into();
        assert_eq!(node.to_html(), "<br/>");
    }

    #[test]
    fn test_non_void_empty_element_gets_closing_tag() {
        let node: Node = Element::new("span").with_class("icon").into();
        assert_eq!(node.to_html(), r#"<span class="icon"></span>"#);
    }

    #[test]
    fn test_comment_and_raw() {
        let doc = Document::new(vec![
            Node::Comment(" note ".to_owned()),
            Node::Raw("<details open>".to_owned()),
        ]);
        assert_eq!(doc.to_html(), "<!-- note --><details open>");
    }

    #[test]
    fn test_attr_escaping() {
        let node: Node = Element::new("span")
            .with_attr("title", r#"a "b" <c>"#)
            .into();
        assert_eq!(
            node.to_html(),
            r#"<span title="a &quot;b&quot; &lt;c&gt;"></span>"#
        );
    }
}
