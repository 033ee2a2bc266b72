//! Tree node types and traversal.

/// Insertion-ordered attribute map.
///
/// Keys are unique; [`Attrs::set`] replaces an existing value in place
/// (last write wins). Order is preserved so serialization is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attrs(Vec<(String, String)>);

impl Attrs {
    /// Create an empty attribute map.
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Get an attribute value by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Check whether an attribute is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Set an attribute, replacing any existing value for the same name.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(entry) = self.0.iter_mut().find(|(k, _)| *k == name) {
            entry.1 = value;
        } else {
            self.0.push((name, value));
        }
    }

    /// Remove an attribute. Returns the previous value, if any.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let idx = self.0.iter().position(|(k, _)| k == name)?;
        Some(self.0.remove(idx).1)
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Append a class to the space-separated `class` attribute.
    pub fn add_class(&mut self, class: &str) {
        match self.get("class") {
            Some(existing) if !existing.is_empty() => {
                let joined = format!("{existing} {class}");
                self.set("class", joined);
            }
            _ => self.set("class", class),
        }
    }

    /// The classes from the `class` attribute, split on whitespace.
    #[must_use]
    pub fn classes(&self) -> Vec<&str> {
        self.get("class")
            .map(|c| c.split_ascii_whitespace().collect())
            .unwrap_or_default()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attrs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (k, v) in iter {
            attrs.set(k, v);
        }
        attrs
    }
}

/// An element node: tag name, attributes, and exclusively owned children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Element {
    /// Create an element with no attributes or children.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Attrs::new(),
            children: Vec::new(),
        }
    }

    /// Builder: set an attribute.
    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(name, value);
        self
    }

    /// Builder: append a class.
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.attrs.add_class(class);
        self
    }

    /// Builder: append a child node.
    #[must_use]
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Builder: append children.
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// First child element with the given tag.
    #[must_use]
    pub fn find_child(&self, tag: &str) -> Option<&Element> {
        self.children.iter().find_map(|c| match c {
            Node::Element(el) if el.tag == tag => Some(el),
            _ => None,
        })
    }
}

/// A node in the document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A tag with attributes and children.
    Element(Element),
    /// Plain text.
    Text(String),
    /// A parsed comment; the value is the inner text without delimiters.
    Comment(String),
    /// Unparsed markup passed through verbatim. May itself contain literal
    /// `<!-- ... -->` comment syntax.
    Raw(String),
}

impl Node {
    /// Shorthand for a text node.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(el) => Some(el),
            _ => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Self::Element(el) => Some(el),
            _ => None,
        }
    }

    /// True for an element node with the given tag.
    #[must_use]
    pub fn is_element(&self, tag: &str) -> bool {
        matches!(self, Self::Element(el) if el.tag == tag)
    }

    /// True for a text node that is empty or whitespace only.
    #[must_use]
    pub fn is_blank_text(&self) -> bool {
        matches!(self, Self::Text(t) if t.trim().is_empty())
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Self::Element(el)
    }
}

/// The root of one document tree. Lives for exactly one transformation and
/// is mutated in place by every pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub children: Vec<Node>,
}

impl Document {
    #[must_use]
    pub fn new(children: Vec<Node>) -> Self {
        Self { children }
    }
}

/// Concatenated text content of a node and its descendants.
#[must_use]
pub fn text_content(node: &Node) -> String {
    fn collect(node: &Node, out: &mut String) {
        match node {
            Node::Text(t) => out.push_str(t),
            Node::Element(el) => {
                for child in &el.children {
                    collect(child, out);
                }
            }
            Node::Comment(_) | Node::Raw(_) => {}
        }
    }

    let mut out = String::new();
    collect(node, &mut out);
    out
}

/// Depth-first walk over every parent in the tree, root first.
///
/// The callback receives each mutable children list (the document root's,
/// then every element's) and may splice it freely; descent into an element
/// happens after the callback has run on it, so replacements are themselves
/// visited.
pub fn visit_parents<F>(doc: &mut Document, mut f: F)
where
    F: FnMut(&mut Vec<Node>),
{
    f(&mut doc.children);
    visit_element_parents(&mut doc.children, &mut f);
}

fn visit_element_parents<F>(nodes: &mut Vec<Node>, f: &mut F)
where
    F: FnMut(&mut Vec<Node>),
{
    for node in nodes.iter_mut() {
        if let Node::Element(el) = node {
            f(&mut el.children);
            visit_element_parents(&mut el.children, f);
        }
    }
}
