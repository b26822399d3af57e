//! Map the element an event landed on to the control it belongs to.
//!
//! Clicks usually hit an icon or label inside a button, so the handlers
//! walk up the parent chain instead of looking at the target alone.

/// A node in a parent-linked tree, e.g. a DOM element.
pub trait TreeNode: Sized {
    fn tree_id(&self) -> Option<String>;

    fn tree_parent(&self) -> Option<Self>;
}

/// The first node, starting at `start` and moving to parents, that
/// satisfies `matches`.
pub fn closest<N: TreeNode>(start: N, mut matches: impl FnMut(&N) -> bool) -> Option<N> {
    let mut current = Some(start);
    while let Some(node) = current {
        if matches(&node) {
            return Some(node);
        }
        current = node.tree_parent();
    }
    None
}

pub fn closest_with_id<N: TreeNode>(start: N, id: &str) -> Option<N> {
    closest(start, |node| node.tree_id().as_deref() == Some(id))
}
