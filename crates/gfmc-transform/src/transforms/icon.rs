//! Icon: inline SVG or a deferred placeholder.

use gfmc_tree::{Element, Node};

use crate::marker::Params;
use crate::options::Options;
use crate::sanitize::sanitize_svg;

use super::ICON_ATTR;

/// Build an inline icon from `icon:<name>` params.
///
/// With a map hit the sanitized fragment is embedded in a fixed-box svg;
/// otherwise a placeholder span carries the name for later hydration (or a
/// host-rendered fallback). Returns `None` when the icon param is missing.
#[must_use]
pub fn icon(params: &Params, options: &Options) -> Option<Node> {
    let name = params.get("icon").filter(|n| !n.is_empty())?;

    if let Some(fragment) = options.icon(name) {
        let svg = Element::new("svg")
            .with_attr("aria-hidden", "true")
            .with_attr("width", "16")
            .with_attr("height", "16")
            .with_attr("viewBox", "0 0 24 24")
            .with_attr("fill", "currentColor")
            .with_children(sanitize_svg(fragment));
        return Some(svg.into());
    }

    Some(
        Element::new("span")
            .with_attr(ICON_ATTR, name.clone())
            .with_attr("aria-hidden", "true")
            .into(),
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn params_for(name: &str) -> Params {
        let mut params = Params::new();
        params.insert("icon".to_owned(), name.to_owned());
        params
    }

    #[test]
    fn test_map_hit_renders_svg() {
        let options = Options::new().with_icon("rocket", r#"<path d="M1 1"/>"#);
        let node = icon(&params_for("rocket"), &options).unwrap();
        let svg = node.as_element().unwrap();
        assert_eq!(svg.tag, "svg");
        assert_eq!(svg.attrs.get("viewBox"), Some("0 0 24 24"));
        assert!(svg.children[0].is_element("path"));
    }

    #[test]
    fn test_map_hit_is_sanitized() {
        let options = Options::new().with_icon("evil", "<script>x</script><rect/>");
        let node = icon(&params_for("evil"), &options).unwrap();
        let svg = node.as_element().unwrap();
        assert_eq!(svg.children.len(), 1);
        assert!(svg.children[0].is_element("rect"));
    }

    #[test]
    fn test_map_miss_renders_placeholder() {
        let node = icon(&params_for("rocket"), &Options::new()).unwrap();
        let span = node.as_element().unwrap();
        assert_eq!(span.tag, "span");
        assert_eq!(span.attrs.get(ICON_ATTR), Some("rocket"));
    }

    #[test]
    fn test_missing_name_yields_nothing() {
        assert_eq!(icon(&Params::new(), &Options::new()), None);
    }
}
