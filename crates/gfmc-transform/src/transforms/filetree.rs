//! File tree: a code block of paths rendered as a nested disclosure list.

use gfmc_tree::{Element, Node, text_content};

use crate::marker::Params;
use crate::treetext::{TreeEntry, parse_tree_text};

use super::ICON_ATTR;

/// Icon names by file extension. The host resolves these to actual SVGs.
const EXTENSION_ICONS: &[(&str, &str)] = &[
    (".js", "seti:javascript"),
    (".mjs", "seti:javascript"),
    (".cjs", "seti:javascript"),
    (".ts", "seti:typescript"),
    (".tsx", "seti:typescript"),
    (".json", "seti:json"),
    (".md", "seti:markdown"),
    (".mdx", "seti:markdown"),
    (".astro", "seti:astro"),
    (".css", "seti:css"),
    (".html", "seti:html"),
    (".yml", "seti:yml"),
    (".yaml", "seti:yml"),
    (".toml", "seti:config"),
    (".rs", "seti:rust"),
    (".py", "seti:python"),
    (".sh", "seti:shell"),
    (".bash", "seti:shell"),
];

const DEFAULT_FILE_ICON: &str = "seti:default";
const FOLDER_ICON: &str = "seti:folder";

/// Render the first code block between the markers as a file tree.
///
/// No code block, or one that parses to zero entries, leaves the range
/// unchanged.
#[must_use]
pub fn filetree(content: &[Node], _params: &Params) -> Option<Vec<Node>> {
    let code_text = find_code_text(content)?;
    let entries = parse_tree_text(&code_text);
    if entries.is_empty() {
        return None;
    }

    let root_list = Element::new("ul").with_children(entries.iter().map(make_entry));

    Some(vec![
        Element::new("starlight-file-tree")
            .with_class("not-content")
            .with_attr("data-pagefind-ignore", "")
            .with_child(root_list.into())
            .into(),
    ])
}

/// The text of the first `pre > code` block.
fn find_code_text(content: &[Node]) -> Option<String> {
    for node in content {
        let Some(pre) = node.as_element().filter(|el| el.tag == "pre") else {
            continue;
        };
        if let Some(code) = pre.find_child("code") {
            let text = text_content(&Node::Element(code.clone()));
            if !text.is_empty() {
                return Some(text);
            }
        }
    }
    None
}

fn make_entry(entry: &TreeEntry) -> Node {
    if entry.is_directory {
        make_directory(entry)
    } else {
        make_file(entry)
    }
}

fn make_file(entry: &TreeEntry) -> Node {
    let mut classes = vec!["file"];
    if entry.is_placeholder {
        classes.push("empty");
    }

    let inner = if entry.is_placeholder {
        Element::new("span").with_child(Node::text("…"))
    } else {
        let mut span = Element::new("span");
        if entry.highlight {
            span = span.with_class("highlight");
        }
        span.with_child(icon_placeholder(file_icon_name(&entry.name)))
            .with_child(Node::text(entry.name.clone()))
    };

    let mut entry_span = Element::new("span")
        .with_class("tree-entry")
        .with_child(inner.into());

    if !entry.comment.is_empty() {
        entry_span = entry_span.with_child(Node::text(" ")).with_child(
            Element::new("span")
                .with_class("comment")
                .with_child(Node::text(entry.comment.clone()))
                .into(),
        );
    }

    Element::new("li")
        .with_attr("class", classes.join(" "))
        .with_child(entry_span.into())
        .into()
}

fn make_directory(entry: &TreeEntry) -> Node {
    let mut name_span = Element::new("span");
    if entry.highlight {
        name_span = name_span.with_class("highlight");
    }
    name_span = name_span
        .with_child(icon_placeholder(FOLDER_ICON))
        .with_child(Node::text(entry.name.clone()));

    let summary = Element::new("summary").with_child(
        Element::new("span")
            .with_class("tree-entry")
            .with_child(name_span.into())
            .into(),
    );

    let child_items: Vec<Node> = if entry.children.is_empty() {
        vec![empty_directory_row()]
    } else {
        entry.children.iter().map(make_entry).collect()
    };

    let mut details = Element::new("details");
    if !entry.children.is_empty() {
        details = details.with_attr("open", "");
    }
    details = details
        .with_child(summary.into())
        .with_child(Element::new("ul").with_children(child_items).into());

    Element::new("li")
        .with_class("directory")
        .with_child(details.into())
        .into()
}

/// Placeholder row shown inside a directory with no listed children.
fn empty_directory_row() -> Node {
    Element::new("li")
        .with_attr("class", "file empty")
        .with_child(
            Element::new("span")
                .with_class("tree-entry")
                .with_child(Element::new("span").with_child(Node::text("…")).into())
                .into(),
        )
        .into()
}

fn icon_placeholder(name: &str) -> Node {
    Element::new("span")
        .with_attr(ICON_ATTR, name)
        .with_class("tree-icon")
        .into()
}

/// Icon name for a file, by extension, with a fixed fallback.
fn file_icon_name(filename: &str) -> &'static str {
    let ext = filename
        .rfind('.')
        .map(|idx| &filename[idx..])
        .unwrap_or_default();
    EXTENSION_ICONS
        .iter()
        .find(|(e, _)| *e == ext)
        .map_or(DEFAULT_FILE_ICON, |(_, icon)| icon)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn code_block(text: &str) -> Node {
        Element::new("pre")
            .with_child(Element::new("code").with_child(Node::text(text)).into())
            .into()
    }

    #[test]
    fn test_renders_nested_tree() {
        let content = vec![code_block("src/\n  index.ts  #!\n")];
        let out = filetree(&content, &Params::new()).unwrap();
        let html = out[0].to_html();

        assert!(html.starts_with("<starlight-file-tree"));
        assert!(html.contains("data-pagefind-ignore"));
        assert!(html.contains(r#"<li class="directory">"#));
        assert!(html.contains("<details open>"));
        assert!(html.contains(r#"data-gfm-icon="seti:folder""#));
        assert!(html.contains(r#"data-gfm-icon="seti:typescript""#));
        assert!(html.contains(r#"<span class="highlight">"#));
        assert!(html.contains("index.ts"));
    }

    #[test]
    fn test_comment_annotation_rendered() {
        let content = vec![code_block("main.rs  # entry point\n")];
        let out = filetree(&content, &Params::new()).unwrap();
        let html = out[0].to_html();
        assert!(html.contains(r#"<span class="comment">entry point</span>"#));
        assert!(html.contains(r#"data-gfm-icon="seti:rust""#));
    }

    #[test]
    fn test_placeholder_row() {
        let content = vec![code_block("src/\n  ...\n")];
        let out = filetree(&content, &Params::new()).unwrap();
        let html = out[0].to_html();
        assert!(html.contains(r#"<li class="file empty">"#));
        assert!(html.contains("…"));
    }

    #[test]
    fn test_empty_directory_gets_placeholder_row() {
        let content = vec![code_block("empty/\n")];
        let out = filetree(&content, &Params::new()).unwrap();
        let html = out[0].to_html();
        assert!(html.contains(r#"<li class="file empty">"#));
        // A childless directory renders closed.
        assert!(html.contains("<details>"));
    }

    #[test]
    fn test_no_code_block_is_unchanged() {
        let content = vec![Node::from(Element::new("p"))];
        assert_eq!(filetree(&content, &Params::new()), None);
    }

    #[test]
    fn test_unknown_extension_falls_back() {
        assert_eq!(file_icon_name("a.xyz"), "seti:default");
        assert_eq!(file_icon_name("Makefile"), "seti:default");
        assert_eq!(file_icon_name("mod.rs"), "seti:rust");
    }
}
