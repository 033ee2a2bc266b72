//! Sanitization of untrusted SVG fragments and URLs.
//!
//! Icon fragments come from an externally supplied map and author-supplied
//! link destinations reach generated markup, so both cross a trust
//! boundary here. Sanitizers never fail: unparseable or empty fragments
//! yield empty output.

use gfmc_tree::{Node, parse_fragment};

/// SVG elements safe to keep inside an `<svg>` wrapper. Structural and
/// drawing elements only; interactive, scripting, `foreignObject`, and
/// `style` elements are excluded.
const ALLOWED_SVG_ELEMENTS: &[&str] = &[
    "circle",
    "clippath",
    "defs",
    "desc",
    "ellipse",
    "g",
    "line",
    "lineargradient",
    "mask",
    "path",
    "polygon",
    "polyline",
    "radialgradient",
    "rect",
    "stop",
    "symbol",
    "text",
    "title",
    "tspan",
    "use",
];

/// Schemes that must never appear in a generated href.
const UNSAFE_URL_SCHEMES: &[&str] = &["javascript:", "vbscript:", "data:"];

/// Parse and sanitize an SVG inner-content string.
///
/// Keeps text nodes and allow-listed elements; strips `on*` event-handler
/// attributes and `href`/`xlink:href` values carrying a `javascript:`
/// scheme; recurses into children. Unparseable input yields an empty list.
#[must_use]
pub fn sanitize_svg(fragment: &str) -> Vec<Node> {
    let Ok(nodes) = parse_fragment(fragment) else {
        tracing::debug!("dropping unparseable svg fragment");
        return Vec::new();
    };

    nodes.into_iter().filter_map(sanitize_node).collect()
}

fn sanitize_node(node: Node) -> Option<Node> {
    match node {
        Node::Text(_) => Some(node),
        Node::Element(mut el) => {
            if !ALLOWED_SVG_ELEMENTS.contains(&el.tag.to_ascii_lowercase().as_str()) {
                return None;
            }

            let mut clean = gfmc_tree::Attrs::new();
            for (key, value) in el.attrs.iter() {
                if key.to_ascii_lowercase().starts_with("on") {
                    continue;
                }
                if matches!(key, "href" | "xlink:href") && has_javascript_scheme(value) {
                    continue;
                }
                clean.set(key, value);
            }
            el.attrs = clean;

            let children = std::mem::take(&mut el.children);
            el.children = children.into_iter().filter_map(sanitize_node).collect();
            Some(Node::Element(el))
        }
        // Comments and raw markup never survive sanitization.
        Node::Comment(_) | Node::Raw(_) => None,
    }
}

fn has_javascript_scheme(value: &str) -> bool {
    value
        .trim_start()
        .to_ascii_lowercase()
        .starts_with("javascript:")
}

/// Return the URL unchanged if its scheme is safe, or an empty string.
///
/// Matching is case-insensitive and tolerates leading whitespace. Relative
/// paths and fragment links pass through untouched.
#[must_use]
pub fn sanitize_url(url: &str) -> String {
    let lowered = url.trim_start().to_ascii_lowercase();
    if UNSAFE_URL_SCHEMES
        .iter()
        .any(|scheme| lowered.starts_with(scheme))
    {
        return String::new();
    }
    url.to_owned()
}

#[cfg(test)]
mod tests {
    use gfmc_tree::{Document, Element};
    use pretty_assertions::assert_eq;

    use super::*;

    fn render(nodes: Vec<Node>) -> String {
        Document::new(nodes).to_html()
    }

    #[test]
    fn test_geometry_elements_survive() {
        let out = render(sanitize_svg(r#"<path d="M1 1"/><circle r="2"/>"#));
        assert_eq!(out, r#"<path d="M1 1"></path><circle r="2"></circle>"#);
    }

    #[test]
    fn test_script_elements_stripped() {
        let out = render(sanitize_svg(r#"<script>alert(1)</script><path d="M1 1"/>"#));
        assert!(!out.contains("script"));
        assert!(out.contains("path"));
    }

    #[test]
    fn test_foreign_object_and_style_stripped() {
        let out = render(sanitize_svg(
            "<foreignObject><div>x</div></foreignObject><style>*{}</style>",
        ));
        assert_eq!(out, "");
    }

    #[test]
    fn test_event_handlers_stripped_case_insensitively() {
        let out = render(sanitize_svg(r#"<path d="M1 1" onclick="x()" onLoad="y()"/>"#));
        assert_eq!(out, r#"<path d="M1 1"></path>"#);
    }

    #[test]
    fn test_javascript_href_stripped() {
        let out = render(sanitize_svg(r#"<use href=" JavaScript:evil()"/>"#));
        assert_eq!(out, "<use></use>");
    }

    #[test]
    fn test_safe_href_kept() {
        let out = render(sanitize_svg(r##"<use href="#shape"/>"##));
        assert_eq!(out, r##"<use href="#shape"></use>"##);
    }

    #[test]
    fn test_nested_disallowed_element_stripped() {
        let out = render(sanitize_svg("<g><script>x</script><rect/></g>"));
        assert_eq!(out, "<g><rect></rect></g>");
    }

    #[test]
    fn test_unparseable_fragment_yields_empty() {
        assert_eq!(sanitize_svg("<g>"), Vec::<Node>::new());
        assert_eq!(sanitize_svg(""), Vec::<Node>::new());
    }

    #[test]
    fn test_comment_nodes_dropped() {
        let nodes = sanitize_svg("<!-- x --><rect/>");
        assert_eq!(render(nodes), "<rect></rect>");
    }

    #[test]
    fn test_sanitize_node_is_not_fooled_by_mixed_case_tags() {
        let nodes = vec![Node::Element(Element::new("ScRiPt"))];
        let kept: Vec<Node> = nodes.into_iter().filter_map(sanitize_node).collect();
        assert!(kept.is_empty());
    }

    #[test]
    fn test_sanitize_url() {
        assert_eq!(sanitize_url("javascript:x"), "");
        assert_eq!(sanitize_url(" \tJAVASCRIPT:alert(1)"), "");
        assert_eq!(sanitize_url("vbscript:msgbox"), "");
        assert_eq!(sanitize_url("data:text/html,<script>"), "");
        assert_eq!(sanitize_url("https://example.com"), "https://example.com");
        assert_eq!(sanitize_url("/relative/path"), "/relative/path");
        assert_eq!(sanitize_url("#fragment"), "#fragment");
        assert_eq!(sanitize_url(""), "");
    }
}
