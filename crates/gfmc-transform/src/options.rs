//! Rewriter configuration.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::marker::Component;

/// Configuration for one [`ComponentRewriter`](crate::ComponentRewriter).
///
/// All fields have defaults, so `Options::default()` enables every
/// registered transform with an empty icon map and tooltips on.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Transforms to enable, by keyword. `None` enables all registered
    /// transforms. A marker naming a disabled-but-registered keyword is
    /// still recognized structurally; cleanup prunes it silently.
    pub transforms: Option<Vec<String>>,
    /// Icon name → raw SVG fragment. Fragments are untrusted and pass
    /// through the SVG sanitizer before embedding.
    pub icons: BTreeMap<String, String>,
    /// Enable the footnote → tooltip pass.
    pub tooltips: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            transforms: None,
            icons: BTreeMap::new(),
            tooltips: true,
        }
    }
}

impl Options {
    /// Create options with all defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable only the named transforms.
    #[must_use]
    pub fn with_transforms<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.transforms = Some(keywords.into_iter().map(Into::into).collect());
        self
    }

    /// Replace the icon map.
    #[must_use]
    pub fn with_icons(mut self, icons: BTreeMap<String, String>) -> Self {
        self.icons = icons;
        self
    }

    /// Add a single icon.
    #[must_use]
    pub fn with_icon(mut self, name: impl Into<String>, svg: impl Into<String>) -> Self {
        self.icons.insert(name.into(), svg.into());
        self
    }

    /// Enable or disable the tooltip pass.
    #[must_use]
    pub fn with_tooltips(mut self, tooltips: bool) -> Self {
        self.tooltips = tooltips;
        self
    }

    /// Whether a component's transform is enabled.
    #[must_use]
    pub fn is_enabled(&self, component: Component) -> bool {
        match &self.transforms {
            None => true,
            Some(enabled) => enabled.iter().any(|k| k == component.keyword()),
        }
    }

    /// Look up an icon fragment by name.
    #[must_use]
    pub fn icon(&self, name: &str) -> Option<&str> {
        self.icons.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_enable_everything() {
        let options = Options::default();
        assert!(options.is_enabled(Component::Tabs));
        assert!(options.is_enabled(Component::Badge));
        assert!(options.tooltips);
        assert!(options.icons.is_empty());
    }

    #[test]
    fn test_transform_filter() {
        let options = Options::new().with_transforms(["steps", "tabs"]);
        assert!(options.is_enabled(Component::Steps));
        assert!(!options.is_enabled(Component::Card));
    }

    #[test]
    fn test_icon_builder() {
        let options = Options::new().with_icon("rocket", "<path d=\"M1 1\"/>");
        assert_eq!(options.icon("rocket"), Some("<path d=\"M1 1\"/>"));
        assert_eq!(options.icon("star"), None);
    }
}
