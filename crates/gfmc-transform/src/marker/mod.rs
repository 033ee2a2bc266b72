//! Marker recognition.
//!
//! A marker is a comment whose trimmed text names a registered construct:
//! a bare keyword optionally followed by `key:value` tokens
//! (`tabs synckey:pkg`), a `/`-prefixed closer (`/tabs`), or the shorthand
//! `icon:<name>`. Comments with any other first token are never touched.

mod component;
mod ranges;

use std::collections::BTreeMap;

pub use component::{ALL_COMPONENTS, Component};
pub use ranges::{Range, collect_ranges};

/// Parameters attached to a marker. Keys are unique; duplicates resolve
/// last-write-wins with no diagnostic.
pub type Params = BTreeMap<String, String>;

/// An ephemeral parsed marker. Never stored in the tree; recomputed each
/// scan and discarded when the owning pass finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    /// The first token, including the `/` prefix for closers.
    pub keyword: String,
    pub params: Params,
}

impl Marker {
    /// Parse a comment's inner text as a marker.
    ///
    /// Returns `None` whenever the first token is outside the registered
    /// keyword set and does not match `icon:<name>`. Parameter tokens
    /// without a colon, or with a leading colon, are silently ignored.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }

        let mut tokens = trimmed.split_ascii_whitespace();
        let first = tokens.next()?;

        if Component::is_registered_keyword(first) {
            let mut params = Params::new();
            for token in tokens {
                match token.find(':') {
                    Some(idx) if idx > 0 => {
                        params.insert(token[..idx].to_owned(), token[idx + 1..].to_owned());
                    }
                    _ => {}
                }
            }
            return Some(Self {
                keyword: first.to_owned(),
                params,
            });
        }

        // Shorthand: `icon:rocket` names the icon component directly.
        if let Some(name) = first.strip_prefix("icon:") {
            let mut params = Params::new();
            params.insert("icon".to_owned(), name.to_owned());
            return Some(Self {
                keyword: "icon".to_owned(),
                params,
            });
        }

        None
    }

    /// The component this marker opens, if it is an opener.
    #[must_use]
    pub fn component(&self) -> Option<Component> {
        Component::from_keyword(&self.keyword)
    }

    /// Whether this marker is a `/`-prefixed closer.
    #[must_use]
    pub fn is_closer(&self) -> bool {
        self.keyword.starts_with('/')
    }
}

/// Parse a node as a marker, looking through both comment encodings.
#[must_use]
pub fn parse_node(node: &gfmc_tree::Node) -> Option<Marker> {
    let text = gfmc_tree::comment_value(node)?;
    Marker::parse(&text)
}
