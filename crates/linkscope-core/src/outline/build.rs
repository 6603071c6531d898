//! Worklist-driven outline construction.

use crate::uri::ParsedUri;
use crate::validator;

use super::{OutlineNode, ParameterEntry};

/// Nesting levels expanded below the top-level URL by default.
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// Builds [`OutlineNode`] trees with a bounded nesting depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutlineBuilder {
    max_depth: usize,
}

impl Default for OutlineBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

/// A node under construction, linked to the entry that will own it.
struct Slot {
    url: String,
    depth: usize,
    /// (parent slot, index of the parameter entry in the parent).
    link: Option<(usize, usize)>,
    pending: Vec<(String, String)>,
    node: OutlineNode,
}

impl Slot {
    fn new(url: String, uri: ParsedUri, depth: usize, link: Option<(usize, usize)>) -> Self {
        let node = OutlineNode::header(&uri);
        Self {
            url,
            depth,
            link,
            pending: uri.into_query_parameters(),
            node,
        }
    }
}

impl OutlineBuilder {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Outlines `url`, or returns `None` when it is not a hierarchical URI.
    ///
    /// Nested values are re-parsed from their raw strings. A value that would
    /// expand past `max_depth`, or that repeats a URL already open on its
    /// path, is marked truncated instead of expanded.
    pub fn build(&self, url: &str) -> Option<OutlineNode> {
        let root = ParsedUri::parse(url);
        if !root.is_hierarchical() {
            tracing::debug!("input is not hierarchical; no outline");
            return None;
        }

        let mut arena = vec![Slot::new(url.to_string(), root, 0, None)];
        let mut worklist = vec![0usize];

        while let Some(index) = worklist.pop() {
            let pending = std::mem::take(&mut arena[index].pending);
            let depth = arena[index].depth + 1;

            for (position, (name, value)) in pending.into_iter().enumerate() {
                let is_url_value = validator::looks_like_url(&value);
                let nested = ParsedUri::parse(&value);
                let expandable = nested.is_hierarchical() && nested.has_query_parameters();

                let mut entry = ParameterEntry {
                    name,
                    value,
                    is_url_value,
                    children: None,
                    truncated: false,
                };

                if expandable {
                    if depth > self.max_depth || on_path(&arena, index, &entry.value) {
                        tracing::debug!(depth, name = %entry.name, "outline expansion truncated");
                        entry.truncated = true;
                    } else {
                        arena.push(Slot::new(
                            entry.value.clone(),
                            nested,
                            depth,
                            Some((index, position)),
                        ));
                        worklist.push(arena.len() - 1);
                    }
                }

                arena[index].node.parameters.push(entry);
            }
        }

        // Children always sit after their parent, so folding from the back
        // attaches every subtree before its parent is taken.
        while let Some(slot) = arena.pop() {
            match slot.link {
                Some((parent, position)) => {
                    arena[parent].node.parameters[position].children = Some(slot.node);
                }
                None => return Some(slot.node),
            }
        }
        None
    }
}

/// True if `value` equals the URL of `index` or any of its ancestors.
fn on_path(arena: &[Slot], index: usize, value: &str) -> bool {
    let mut current = Some(index);
    while let Some(i) = current {
        if arena[i].url == value {
            return true;
        }
        current = arena[i].link.map(|(parent, _)| parent);
    }
    false
}

/// Outlines `url` with the default depth limit.
pub fn build_outline(url: &str) -> Option<OutlineNode> {
    OutlineBuilder::default().build(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(url: &str, link: Option<(usize, usize)>) -> Slot {
        Slot::new(url.to_string(), ParsedUri::parse(url), 0, link)
    }

    #[test]
    fn on_path_walks_ancestors() {
        let arena = vec![
            slot("https://a.example/?n=1", None),
            slot("https://b.example/?n=2", Some((0, 0))),
            slot("https://c.example/?n=3", Some((1, 0))),
            slot("https://d.example/?n=4", Some((0, 1))),
        ];
        assert!(on_path(&arena, 2, "https://a.example/?n=1"));
        assert!(on_path(&arena, 2, "https://b.example/?n=2"));
        assert!(on_path(&arena, 2, "https://c.example/?n=3"));
        assert!(!on_path(&arena, 2, "https://d.example/?n=4"));
        assert!(!on_path(&arena, 3, "https://b.example/?n=2"));
    }

    #[test]
    fn zero_depth_never_expands() {
        let node = OutlineBuilder::new(0)
            .build("https://example.com/?next=https://inner.example/?a=1")
            .unwrap();
        let next = node.parameter("next").unwrap();
        assert!(next.truncated);
        assert!(next.children.is_none());
    }
}
