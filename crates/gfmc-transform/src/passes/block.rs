//! Block transform pass: paired and self-closing marker ranges.

use gfmc_tree::{Document, Node, visit_parents};

use crate::context::RewriteContext;
use crate::marker::{Component, Range, collect_ranges, parse_node};
use crate::options::Options;
use crate::transforms;

/// Run block transforms over every parent in the tree.
///
/// Ranges within one parent are processed highest-start-index first so
/// earlier replacements never invalidate the indices of ranges still to be
/// processed. A replacement only ever touches its own parent's children.
pub fn run(doc: &mut Document, options: &Options, ctx: &mut RewriteContext) {
    visit_parents(doc, |children| {
        let ranges = collect_ranges(children);
        if ranges.is_empty() {
            return;
        }
        tracing::trace!(count = ranges.len(), "collected block ranges");

        for range in ranges.iter().rev() {
            let Some(component) = range.marker.component() else {
                continue;
            };
            if component.is_inline() {
                continue;
            }
            if !options.is_enabled(component) {
                continue;
            }

            if component.consumes_block() {
                apply_self_closing(children, range, component);
            } else if range.is_paired() {
                apply_paired(children, range, component, ctx);
            }
        }
    });
}

/// A paired range: content is strictly between the two markers; the
/// replacement covers markers and content.
fn apply_paired(
    children: &mut Vec<Node>,
    range: &Range,
    component: Component,
    ctx: &mut RewriteContext,
) {
    let content = &children[range.start + 1..range.end];
    let params = &range.marker.params;

    let replacement = match component {
        Component::Steps => transforms::steps(content, params),
        Component::Filetree => transforms::filetree(content, params),
        Component::Tabs => transforms::tabs(content, params, ctx),
        Component::CardGrid => transforms::card_grid(content, params),
        Component::LinkCard => transforms::link_card(content, params),
        Component::LinkCards => transforms::link_cards(content, params),
        Component::LinkButton => transforms::link_button(content, params),
        Component::AccordionGroup => transforms::accordion_group(content, params),
        Component::Card | Component::Badge | Component::Icon => None,
    };

    if let Some(replacement) = replacement {
        tracing::debug!(keyword = component.keyword(), "applied block transform");
        children.splice(range.start..=range.end, replacement);
    }
}

/// A self-closing block range: the marker consumes following siblings up
/// to the next recognized marker (exclusive), or up to and including the
/// first blockquote, whichever comes first.
fn apply_self_closing(children: &mut Vec<Node>, range: &Range, component: Component) {
    let mut consumed = Vec::new();
    for node in &children[range.start + 1..] {
        if parse_node(node).is_some() {
            break;
        }
        consumed.push(node.clone());
        if node.is_element("blockquote") {
            break;
        }
    }

    let replacement = match component {
        Component::Card => transforms::card(&consumed, &range.marker.params),
        _ => None,
    };

    if let Some(replacement) = replacement {
        tracing::debug!(keyword = component.keyword(), "applied block transform");
        children.splice(range.start..range.start + 1 + consumed.len(), replacement);
    }
}
