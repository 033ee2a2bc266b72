//! Resolving markers into index ranges over one parent's children.

use gfmc_tree::Node;

use super::{Component, Marker, parse_node};

/// A resolved marker construct's span within one parent's children.
///
/// Self-closing: `start == end` (the marker node itself). Paired:
/// `start < end` with both bounds on marker nodes. Indices are valid only
/// against the children list at scan time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Range {
    pub marker: Marker,
    pub start: usize,
    pub end: usize,
}

impl Range {
    #[must_use]
    pub fn is_paired(&self) -> bool {
        self.start < self.end
    }
}

/// Collect the top-level marker ranges from one parent's children.
///
/// Left-to-right scan. Closers are skipped (they are consumed by their
/// opener). A keyword with a registered closer pairs with the *first*
/// matching closer found after it — no depth counting, so two nested pairs
/// of the same keyword mismatch. That is a documented limitation of the
/// comment grammar, not something this scan repairs. An opener with no
/// closer in the same parent yields no range.
///
/// The returned set is non-overlapping at the top level: a self-closing
/// range whose index lies strictly inside a paired range is dropped, since
/// the paired builder re-scans its own consumed slice (e.g. `card` markers
/// inside `cardgrid`).
#[must_use]
pub fn collect_ranges(children: &[Node]) -> Vec<Range> {
    let mut ranges = Vec::new();

    for (i, node) in children.iter().enumerate() {
        let Some(marker) = parse_node(node) else {
            continue;
        };
        if marker.is_closer() {
            continue;
        }

        let closer = marker.component().and_then(Component::closer);
        if let Some(closer) = closer {
            for (j, candidate) in children.iter().enumerate().skip(i + 1) {
                let Some(candidate_marker) = parse_node(candidate) else {
                    continue;
                };
                if candidate_marker.keyword == closer {
                    ranges.push(Range {
                        marker,
                        start: i,
                        end: j,
                    });
                    break;
                }
            }
        } else {
            ranges.push(Range {
                marker,
                start: i,
                end: i,
            });
        }
    }

    let paired: Vec<(usize, usize)> = ranges
        .iter()
        .filter(|r| r.is_paired())
        .map(|r| (r.start, r.end))
        .collect();

    ranges.retain(|r| {
        r.is_paired()
            || !paired
                .iter()
                .any(|&(start, end)| r.start > start && r.start < end)
    });

    ranges
}

#[cfg(test)]
mod tests {
    use gfmc_tree::Element;
    use pretty_assertions::assert_eq;

    use super::*;

    fn comment(text: &str) -> Node {
        Node::Comment(text.to_owned())
    }

    fn para(text: &str) -> Node {
        Element::new("p").with_child(Node::text(text)).into()
    }

    #[test]
    fn test_paired_range() {
        let children = vec![comment("steps"), para("a"), comment("/steps")];
        let ranges = collect_ranges(&children);
        assert_eq!(ranges.len(), 1);
        assert_eq!((ranges[0].start, ranges[0].end), (0, 2));
        assert!(ranges[0].is_paired());
    }

    #[test]
    fn test_self_closing_range() {
        let children = vec![para("x"), comment("card icon:star")];
        let ranges = collect_ranges(&children);
        assert_eq!(ranges.len(), 1);
        assert_eq!((ranges[0].start, ranges[0].end), (1, 1));
    }

    #[test]
    fn test_unmatched_opener_yields_no_range() {
        let children = vec![comment("tabs"), para("a")];
        assert_eq!(collect_ranges(&children), vec![]);
    }

    #[test]
    fn test_closer_alone_yields_no_range() {
        let children = vec![para("a"), comment("/tabs")];
        assert_eq!(collect_ranges(&children), vec![]);
    }

    #[test]
    fn test_raw_encoded_markers_pair_with_parsed_ones() {
        let children = vec![
            Node::Raw("<!-- tabs -->".to_owned()),
            para("a"),
            comment("/tabs"),
        ];
        let ranges = collect_ranges(&children);
        assert_eq!(ranges.len(), 1);
        assert_eq!((ranges[0].start, ranges[0].end), (0, 2));
    }

    #[test]
    fn test_self_closing_inside_paired_is_dropped() {
        let children = vec![
            comment("cardgrid"),
            comment("card"),
            para("body"),
            comment("/cardgrid"),
            comment("card"),
        ];
        let ranges = collect_ranges(&children);
        assert_eq!(ranges.len(), 2);
        assert_eq!((ranges[0].start, ranges[0].end), (0, 3));
        // The card at index 4 sits outside the paired range and survives.
        assert_eq!((ranges[1].start, ranges[1].end), (4, 4));
        // Invariant: no surviving self-closing index lies strictly inside
        // any paired range.
        for range in ranges.iter().filter(|r| !r.is_paired()) {
            assert!(!(range.start > 0 && range.start < 3));
        }
    }

    #[test]
    fn test_unrelated_comments_ignored() {
        let children = vec![comment("TODO: later"), para("a")];
        assert_eq!(collect_ranges(&children), vec![]);
    }

    #[test]
    fn test_first_closer_wins_for_nested_same_keyword() {
        // Nested same-keyword pairs are unsupported: the outer opener pairs
        // with the *inner* closer.
        let children = vec![
            comment("tabs"),
            comment("tabs"),
            comment("/tabs"),
            comment("/tabs"),
        ];
        let ranges = collect_ranges(&children);
        assert_eq!((ranges[0].start, ranges[0].end), (0, 2));
    }
}
