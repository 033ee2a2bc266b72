//! Tabs: collapsible groups converted to an accessible tab set.

use std::sync::LazyLock;

use regex::Regex;

use gfmc_tree::{Element, Node, text_content};

use crate::context::{RewriteContext, TabIds};
use crate::marker::Params;

/// One extracted tab: label plus panel content.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Tab {
    label: String,
    content: Vec<Node>,
}

static DETAILS_OPEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^<details[\s>]").expect("invalid details-open regex"));
static SUMMARY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<summary>(.*?)</summary>").expect("invalid summary regex"));
static DETAILS_CLOSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^</details\s*>").expect("invalid details-close regex"));

/// Convert the collapsible groups in the content into one tab set.
///
/// Tab ids come from the per-run context so two documents never share
/// them. A `synckey` param attaches cross-instance synchronization and
/// appends a restore companion element. Zero extracted tabs leaves the
/// range unchanged.
#[must_use]
pub fn tabs(content: &[Node], params: &Params, ctx: &mut RewriteContext) -> Option<Vec<Node>> {
    let tabs = extract_tabs(content);
    if tabs.is_empty() {
        return None;
    }

    let ids: Vec<TabIds> = tabs.iter().map(|_| ctx.next_tab_ids()).collect();
    let sync_key = params.get("synckey");

    let tab_items: Vec<Node> = tabs
        .iter()
        .zip(&ids)
        .enumerate()
        .map(|(idx, (tab, id))| {
            let first = idx == 0;
            Element::new("li")
                .with_attr("role", "presentation")
                .with_class("tab")
                .with_child(
                    Element::new("a")
                        .with_attr("role", "tab")
                        .with_attr("href", format!("#{}", id.panel))
                        .with_attr("id", id.tab.clone())
                        .with_attr("aria-selected", if first { "true" } else { "false" })
                        .with_attr("tabindex", if first { "0" } else { "-1" })
                        .with_child(Node::text(tab.label.clone()))
                        .into(),
                )
                .into()
        })
        .collect();

    let panels: Vec<Node> = tabs
        .into_iter()
        .zip(&ids)
        .enumerate()
        .map(|(idx, (tab, id))| {
            let mut panel = Element::new("div")
                .with_attr("role", "tabpanel")
                .with_attr("id", id.panel.clone())
                .with_attr("aria-labelledby", id.tab.clone());
            if idx != 0 {
                panel = panel.with_attr("hidden", "");
            }
            panel.with_children(tab.content).into()
        })
        .collect();

    let mut root = Element::new("starlight-tabs");
    if let Some(key) = sync_key {
        root.attrs.set("data-sync-key", key.clone());
    }
    root.children.push(
        Element::new("div")
            .with_attr("class", "tablist-wrapper not-content")
            .with_child(
                Element::new("ul")
                    .with_attr("role", "tablist")
                    .with_children(tab_items)
                    .into(),
            )
            .into(),
    );
    root.children.extend(panels);
    if sync_key.is_some() {
        root.children
            .push(Element::new("starlight-tabs-restore").into());
    }

    Some(vec![root.into()])
}

/// Extract tabs, preferring parsed `details` elements and falling back to
/// the raw-text encoding when none parse.
fn extract_tabs(content: &[Node]) -> Vec<Tab> {
    let from_elements = extract_from_elements(content);
    if !from_elements.is_empty() {
        return from_elements;
    }
    extract_from_raw(content)
}

/// Strategy (a): each direct `details` child contributes one tab; its
/// `summary` child supplies the trimmed label, everything else is panel
/// content.
fn extract_from_elements(content: &[Node]) -> Vec<Tab> {
    let mut tabs = Vec::new();

    for node in content {
        let Some(details) = node.as_element().filter(|el| el.tag == "details") else {
            continue;
        };

        let label = details
            .find_child("summary")
            .map(|summary| text_content(&Node::Element(summary.clone())).trim().to_owned())
            .unwrap_or_default();
        let panel: Vec<Node> = details
            .children
            .iter()
            .filter(|c| !c.is_element("summary"))
            .cloned()
            .collect();

        tabs.push(Tab {
            label,
            content: panel,
        });
    }

    tabs
}

/// Strategy (b): scan a flat mixed sequence of raw fragments and parsed
/// nodes. A raw `<details...>` opens a tab (label from an inline or later
/// standalone `<summary>` fragment); interleaved non-text nodes accumulate
/// as panel content until the matching raw `</details>`; whitespace-only
/// text is skipped.
fn extract_from_raw(content: &[Node]) -> Vec<Tab> {
    let mut tabs = Vec::new();
    let mut i = 0;

    while i < content.len() {
        let Node::Raw(value) = &content[i] else {
            i += 1;
            continue;
        };
        let trimmed = value.trim();
        if !DETAILS_OPEN_RE.is_match(trimmed) {
            i += 1;
            continue;
        }

        let mut label = SUMMARY_RE
            .captures(trimmed)
            .map(|caps| caps[1].trim().to_owned())
            .unwrap_or_default();

        let mut panel = Vec::new();
        i += 1;
        while i < content.len() {
            match &content[i] {
                Node::Raw(raw) => {
                    let raw_trimmed = raw.trim();
                    if DETAILS_CLOSE_RE.is_match(raw_trimmed) {
                        break;
                    }
                    if label.is_empty() {
                        if let Some(caps) = SUMMARY_RE.captures(raw_trimmed) {
                            label = caps[1].trim().to_owned();
                            i += 1;
                            continue;
                        }
                    }
                    panel.push(content[i].clone());
                }
                node if node.is_blank_text() => {}
                node => panel.push(node.clone()),
            }
            i += 1;
        }

        tabs.push(Tab {
            label,
            content: panel,
        });
        i += 1; // past the closing fragment
    }

    tabs
}
