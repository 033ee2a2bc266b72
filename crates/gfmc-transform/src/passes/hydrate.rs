//! Icon hydration pass: swap icon placeholders for inline SVG.

use gfmc_tree::{Document, Element, visit_parents};

use crate::options::Options;
use crate::sanitize::sanitize_svg;
use crate::transforms::{ICON_ATTR, ICON_ATTR_CAMEL};

/// Replace every element carrying an icon placeholder attribute whose name
/// resolves in the icon map with an inline `svg` sized to the surrounding
/// text. Placeholders for names the map does not know stay untouched, so a
/// host-side hydrator can still pick them up.
pub fn run(doc: &mut Document, options: &Options) {
    if options.icons.is_empty() {
        return;
    }

    visit_parents(doc, |children| {
        for child in children.iter_mut() {
            let Some(el) = child.as_element() else {
                continue;
            };
            let Some(name) = placeholder_name(el) else {
                continue;
            };
            let Some(fragment) = options.icon(&name) else {
                continue;
            };

            let mut svg = Element::new("svg")
                .with_attr("aria-hidden", "true")
                .with_attr("width", "1em")
                .with_attr("height", "1em")
                .with_attr("viewBox", "0 0 24 24")
                .with_attr("fill", "currentColor");
            let classes = el.attrs.classes();
            if !classes.is_empty() {
                svg = svg.with_attr("class", classes.join(" "));
            }
            svg = svg.with_children(sanitize_svg(fragment));

            tracing::debug!(icon = %name, "hydrated icon placeholder");
            *child = svg.into();
        }
    });
}

/// The icon name on a placeholder element, checking both the attribute
/// spelling used when building nodes and the camel-cased property form
/// some serializers emit.
fn placeholder_name(el: &Element) -> Option<String> {
    el.attrs
        .get(ICON_ATTR)
        .or_else(|| el.attrs.get(ICON_ATTR_CAMEL))
        .filter(|name| !name.is_empty())
        .map(ToOwned::to_owned)
}

#[cfg(test)]
mod tests {
    use gfmc_tree::Node;
    use pretty_assertions::assert_eq;

    use super::*;

    fn placeholder(name: &str) -> Node {
        Element::new("span")
            .with_attr(ICON_ATTR, name)
            .with_class("icon")
            .into()
    }

    #[test]
    fn test_known_placeholder_becomes_svg() {
        let options = Options::new().with_icon("rocket", r#"<path d="M1 1"/>"#);
        let mut doc = Document::new(vec![placeholder("rocket")]);
        run(&mut doc, &options);

        let svg = doc.children[0].as_element().unwrap();
        assert_eq!(svg.tag, "svg");
        assert_eq!(svg.attrs.get("width"), Some("1em"));
        assert_eq!(svg.attrs.get("class"), Some("icon"));
        assert!(svg.children[0].is_element("path"));
    }

    #[test]
    fn test_unknown_placeholder_untouched() {
        let options = Options::new().with_icon("rocket", "<rect/>");
        let mut doc = Document::new(vec![placeholder("star")]);
        run(&mut doc, &options);

        let span = doc.children[0].as_element().unwrap();
        assert_eq!(span.tag, "span");
        assert_eq!(span.attrs.get(ICON_ATTR), Some("star"));
    }

    #[test]
    fn test_camel_cased_attribute_recognized() {
        let options = Options::new().with_icon("rocket", "<rect/>");
        let mut doc = Document::new(vec![
            Element::new("span")
                .with_attr(ICON_ATTR_CAMEL, "rocket")
                .into(),
        ]);
        run(&mut doc, &options);
        assert!(doc.children[0].is_element("svg"));
    }

    #[test]
    fn test_nested_placeholders_hydrated() {
        let options = Options::new().with_icon("folder", "<rect/>");
        let mut doc = Document::new(vec![
            Element::new("li")
                .with_child(placeholder("folder"))
                .into(),
        ]);
        run(&mut doc, &options);
        let li = doc.children[0].as_element().unwrap();
        assert!(li.children[0].is_element("svg"));
    }

    #[test]
    fn test_fragment_is_sanitized() {
        let options = Options::new().with_icon("evil", "<script>x</script><circle/>");
        let mut doc = Document::new(vec![placeholder("evil")]);
        run(&mut doc, &options);
        let svg = doc.children[0].as_element().unwrap();
        assert_eq!(svg.children.len(), 1);
        assert!(svg.children[0].is_element("circle"));
    }

    #[test]
    fn test_empty_map_is_a_no_op() {
        let mut doc = Document::new(vec![placeholder("rocket")]);
        run(&mut doc, &Options::new());
        assert!(doc.children[0].is_element("span"));
    }
}
