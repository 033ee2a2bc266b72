//! Parsing directory-tree text literals.
//!
//! Two dialects are supported, decided once per input: the box-drawing
//! output of the `tree` command, and plain two-space indentation. The
//! filetree builder feeds this parser the text of a fenced code block.

/// One entry in a parsed directory tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeEntry {
    pub name: String,
    pub is_directory: bool,
    pub is_placeholder: bool,
    pub highlight: bool,
    pub comment: String,
    pub children: Vec<TreeEntry>,
}

/// Box-drawing characters used by the `tree` command.
const BOX_CHARS: &[char] = &['│', '├', '└', '─', '┬', '┤', '┌', '┐', '┘', '┴', '┼'];

/// Parse a text tree representation into nested entries.
///
/// If any line contains a box-drawing character the whole input is read in
/// the box dialect (box characters become spaces, four columns per level);
/// otherwise indentation counts at two spaces per level.
#[must_use]
pub fn parse_tree_text(text: &str) -> Vec<TreeEntry> {
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    if lines.is_empty() {
        return Vec::new();
    }

    let box_dialect = lines.iter().any(|l| l.contains(BOX_CHARS));

    let entries: Vec<(TreeEntry, usize)> = lines
        .iter()
        .map(|line| {
            let (clean, depth) = if box_dialect {
                let stripped: String = line
                    .chars()
                    .map(|c| if BOX_CHARS.contains(&c) { ' ' } else { c })
                    .collect();
                let leading = stripped.len() - stripped.trim_start().len();
                (stripped.trim().to_owned(), leading / 4)
            } else {
                let stripped = line.trim_start();
                let leading = line.len() - stripped.len();
                (stripped.trim().to_owned(), leading / 2)
            };
            (parse_line(&clean), depth)
        })
        .collect();

    build_tree(entries)
}

/// Parse one cleaned line into entry properties.
fn parse_line(clean: &str) -> TreeEntry {
    let is_placeholder = {
        let rest = clean.strip_prefix("...").or_else(|| clean.strip_prefix('…'));
        rest.is_some_and(|r| r.trim().is_empty())
    };
    if is_placeholder {
        return TreeEntry {
            name: "…".to_owned(),
            is_placeholder: true,
            ..TreeEntry::default()
        };
    }

    let mut name = clean.to_owned();
    let mut comment = String::new();
    let mut highlight = false;

    // `file.ts #!` highlight shorthand.
    if let Some(stripped) = name.strip_suffix(" #!") {
        name = stripped.trim().to_owned();
        highlight = true;
    }

    // `file.ts  # note` trailing annotation (double space before the hash).
    if let Some(idx) = name.find("  #") {
        let annotation = name[idx + 3..].trim().to_owned();
        name = name[..idx].trim().to_owned();
        if annotation == "highlight" || annotation == "!" {
            highlight = true;
        } else {
            comment = annotation;
        }
    }

    let is_directory = name.ends_with('/');

    TreeEntry {
        name,
        is_directory,
        is_placeholder: false,
        highlight,
        comment,
        children: Vec::new(),
    }
}

/// Build nested entries from a flat depth-annotated list.
///
/// A stack of children-list frames seeded with a depth -1 sentinel handles
/// arbitrary forward and backward depth jumps in O(n).
fn build_tree(entries: Vec<(TreeEntry, usize)>) -> Vec<TreeEntry> {
    // (collected children, depth); index 0 is the sentinel root.
    let mut stack: Vec<(Vec<TreeEntry>, isize)> = vec![(Vec::new(), -1)];

    for (entry, depth) in entries {
        let depth = isize::try_from(depth).unwrap_or(isize::MAX);
        while stack.len() > 1 && stack[stack.len() - 1].1 >= depth {
            let (children, _) = stack.pop().expect("stack holds at least the sentinel");
            attach_to_last_dir(&mut stack, children);
        }

        let is_directory = entry.is_directory;
        stack
            .last_mut()
            .expect("sentinel frame always present")
            .0
            .push(entry);

        if is_directory {
            stack.push((Vec::new(), depth));
        }
    }

    while stack.len() > 1 {
        let (children, _) = stack.pop().expect("stack holds at least the sentinel");
        attach_to_last_dir(&mut stack, children);
    }

    stack.pop().map(|(children, _)| children).unwrap_or_default()
}

/// Attach a popped frame's children to the directory entry that opened it,
/// which is the last entry pushed to the frame below.
fn attach_to_last_dir(stack: &mut [(Vec<TreeEntry>, isize)], children: Vec<TreeEntry>) {
    if let Some((parent_children, _)) = stack.last_mut() {
        if let Some(dir) = parent_children.last_mut() {
            dir.children = children;
        }
    }
}
