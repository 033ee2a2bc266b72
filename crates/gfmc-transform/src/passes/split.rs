//! Pre-pass: split merged raw blocks.
//!
//! Some upstream serializations merge adjacent HTML fragments (a closing
//! tag immediately followed by a comment, say) into one raw node like
//! `"</details>\n<!-- /tabs -->"`. Range collection sees one opaque node
//! and the marker inside stays hidden, so this pass runs once over the
//! whole tree before anything else.

use gfmc_tree::{Document, Node, visit_parents};

/// Split every raw child at `>` `\n` `<` boundaries, preserving text and
/// order exactly.
pub fn run(doc: &mut Document) {
    visit_parents(doc, |children| {
        if !children
            .iter()
            .any(|c| matches!(c, Node::Raw(v) if v.contains('\n')))
        {
            return;
        }

        let mut rebuilt = Vec::with_capacity(children.len());
        for child in children.drain(..) {
            match child {
                Node::Raw(value) if value.contains('\n') => {
                    let parts = split_fragments(&value);
                    if parts.len() > 1 {
                        rebuilt.extend(parts.into_iter().map(Node::Raw));
                    } else {
                        rebuilt.push(Node::Raw(value));
                    }
                }
                other => rebuilt.push(other),
            }
        }
        *children = rebuilt;
    });
}

/// Split at every newline whose previous character is `>` and next
/// character is `<`. (The upstream used a lookaround regex; the regex
/// crate has no lookarounds, so this scans directly.)
fn split_fragments(value: &str) -> Vec<String> {
    let bytes = value.as_bytes();
    let mut parts = Vec::new();
    let mut start = 0;

    for (i, &b) in bytes.iter().enumerate() {
        if b == b'\n'
            && i > 0
            && bytes[i - 1] == b'>'
            && bytes.get(i + 1).copied() == Some(b'<')
        {
            parts.push(value[start..i].to_owned());
            start = i + 1;
        }
    }
    parts.push(value[start..].to_owned());
    parts
}
