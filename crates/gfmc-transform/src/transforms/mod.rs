//! Per-component builders.
//!
//! Builders are pure functions from a matched range's content to a
//! replacement subtree. Every builder signals an unmet structural
//! precondition by returning `None`, which the pipeline passes through
//! verbatim — author input never fails the transform.

mod accordion;
mod badge;
mod card;
mod filetree;
mod icon;
mod linkbutton;
mod linkcard;
mod steps;
mod tabs;

pub use accordion::accordion_group;
pub use badge::badge;
pub use card::{card, card_grid};
pub use filetree::filetree;
pub use icon::icon;
pub use linkbutton::link_button;
pub use linkcard::{link_card, link_cards};
pub use steps::steps;
pub use tabs::tabs;

/// Name of the attribute carrying a deferred icon, hydrated in a later
/// pass. Non-hydrating consumers may render their own fallback from it.
pub const ICON_ATTR: &str = "data-gfm-icon";

/// CamelCase property-access spelling of [`ICON_ATTR`], produced by
/// pipelines that expose data attributes as properties.
pub const ICON_ATTR_CAMEL: &str = "dataGfmIcon";
