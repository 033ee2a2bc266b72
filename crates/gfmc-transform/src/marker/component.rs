//! The closed set of component kinds.

/// A component kind recognized by the rewriter.
///
/// Dispatch is by exhaustive match on this enum; the string keyword only
/// survives at the two user-facing seams (author comments and the
/// enable/disable filter in `Options::transforms`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Steps,
    Filetree,
    Tabs,
    Card,
    CardGrid,
    LinkCard,
    LinkCards,
    LinkButton,
    AccordionGroup,
    Badge,
    Icon,
}

/// Every registered component, in registration order.
pub const ALL_COMPONENTS: &[Component] = &[
    Component::Steps,
    Component::Filetree,
    Component::Tabs,
    Component::Card,
    Component::CardGrid,
    Component::LinkCard,
    Component::LinkCards,
    Component::LinkButton,
    Component::AccordionGroup,
    Component::Badge,
    Component::Icon,
];

impl Component {
    /// The author-facing opening keyword.
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Steps => "steps",
            Self::Filetree => "filetree",
            Self::Tabs => "tabs",
            Self::Card => "card",
            Self::CardGrid => "cardgrid",
            Self::LinkCard => "linkcard",
            Self::LinkCards => "linkcards",
            Self::LinkButton => "linkbutton",
            Self::AccordionGroup => "accordiongroup",
            Self::Badge => "badge",
            Self::Icon => "icon",
        }
    }

    /// Look up a component by its opening keyword.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        ALL_COMPONENTS
            .iter()
            .copied()
            .find(|c| c.keyword() == keyword)
    }

    /// The closing keyword for paired components, `None` for the rest.
    #[must_use]
    pub fn closer(self) -> Option<&'static str> {
        match self {
            Self::Steps => Some("/steps"),
            Self::Filetree => Some("/filetree"),
            Self::Tabs => Some("/tabs"),
            Self::CardGrid => Some("/cardgrid"),
            Self::LinkCard => Some("/linkcard"),
            Self::LinkCards => Some("/linkcards"),
            Self::LinkButton => Some("/linkbutton"),
            Self::AccordionGroup => Some("/accordiongroup"),
            Self::Card | Self::Badge | Self::Icon => None,
        }
    }

    /// Components handled inside paragraph content by the inline pass.
    #[must_use]
    pub fn is_inline(self) -> bool {
        matches!(self, Self::Badge | Self::Icon)
    }

    /// Self-closing components that consume following block siblings.
    #[must_use]
    pub fn consumes_block(self) -> bool {
        matches!(self, Self::Card)
    }

    /// Whether `keyword` is a registered opener or closer.
    #[must_use]
    pub fn is_registered_keyword(keyword: &str) -> bool {
        if Self::from_keyword(keyword).is_some() {
            return true;
        }
        ALL_COMPONENTS.iter().any(|c| c.closer() == Some(keyword))
    }
}
