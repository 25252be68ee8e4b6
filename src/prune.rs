//! Pruning of low-density subtrees.
//!
//! A container is rejectable when it looks weak on its own (low density, or
//! more markup than its score justifies) and taking it out would raise its
//! parent's density score. The second half is answered by simulation: the
//! node is detached, the parent re-aggregated, and everything put back.
//!
//! # Cost
//!
//! Each [`can_reject`] call that reaches the simulation re-aggregates the
//! parent's whole subtree, so it costs O(size of the parent's subtree), not
//! O(1). A sweep over n siblings of one parent is O(n · subtree).

use std::collections::VecDeque;

use tracing::trace;

use crate::compute::aggregate;
use crate::options::Options;
use crate::tree::{NodeId, Stats, Tree};

/// Temporary removal of a node from its parent.
///
/// Dropping the guard re-inserts the node at its original position and
/// restores the parent's counters, whatever happened in between.
struct Detached<'a> {
    tree: &'a mut Tree,
    parent: NodeId,
    node: NodeId,
    index: usize,
    stats: Stats,
}

impl<'a> Detached<'a> {
    fn new(tree: &'a mut Tree, node: NodeId) -> Option<Self> {
        let parent = tree.parent(node)?;
        let stats = *tree.stats(parent);
        let index = tree.detach(node)?;
        Some(Self {
            tree,
            parent,
            node,
            index,
            stats,
        })
    }
}

impl Drop for Detached<'_> {
    fn drop(&mut self) {
        // The node was detached by us, so it has no parent and cannot be an
        // ancestor of its old parent.
        let restored = self.tree.insert_child(self.parent, self.index, self.node);
        debug_assert!(restored.is_ok(), "re-inserting {} failed: {restored:?}", self.node);
        *self.tree.stats_mut(self.parent) = self.stats;
    }
}

/// Whether removing `node` would raise its parent's density score.
///
/// The parent's child order and counters are left exactly as found. The
/// simulation re-aggregates the parent's other children, which recomputes
/// the same values they already held.
#[must_use]
pub fn lowers_parent_score(tree: &mut Tree, node: NodeId, options: &Options) -> bool {
    let Some(mut guard) = Detached::new(tree, node) else {
        return false;
    };
    aggregate(&mut *guard.tree, guard.parent, options);
    let raised = guard.stats.score < guard.tree.stats(guard.parent).score;
    drop(guard);
    raised
}

/// Whether `node` should be removed from the tree.
///
/// Text units are never rejected.
#[must_use]
pub fn can_reject(tree: &mut Tree, node: NodeId, options: &Options) -> bool {
    if tree.is_text(node) {
        return false;
    }
    let stats = *tree.stats(node);
    let weak = stats.score < options.reject_cutoff
        || stats.tags as f64 > stats.score * options.reject_multiplier;
    weak && lowers_parent_score(tree, node, options)
}

/// Remove rejectable containers below `root`, top-down.
///
/// Siblings are judged together against the same statistics, then removed
/// and their parent re-aggregated before the sweep descends. Containers that
/// hold mostly direct text are kept whole. Returns the number of subtrees
/// removed; `root` itself is never removed.
pub fn prune(tree: &mut Tree, root: NodeId, options: &Options) -> usize {
    aggregate(tree, root, options);

    let mut removed = 0;
    let mut queue = VecDeque::from([root]);

    while let Some(parent) = queue.pop_front() {
        let children: Vec<NodeId> = tree
            .children(parent)
            .iter()
            .copied()
            .filter(|&n| !tree.is_text(n))
            .collect();

        let rejected: Vec<NodeId> = children
            .iter()
            .copied()
            .filter(|&n| can_reject(tree, n, options))
            .collect();

        for &node in &rejected {
            trace!(
                node = %node,
                tag = tree.tag(node).unwrap_or_default(),
                score = tree.stats(node).score,
                "pruned"
            );
            tree.detach(node);
        }

        if !rejected.is_empty() {
            aggregate(tree, parent, options);
            removed += rejected.len();
        }

        queue.extend(
            children
                .into_iter()
                .filter(|n| !rejected.contains(n) && !tree.contains_text(*n)),
        );
    }

    if removed > 0 {
        aggregate(tree, root, options);
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Variety;

    fn wrap(tree: &mut Tree, tag: &str, children: &[NodeId]) -> NodeId {
        let node = tree.create_container(tag, Variety::NORMAL);
        for &child in children {
            tree.append_child(node, child).ok();
        }
        node
    }

    fn paragraph(tree: &mut Tree, text: &str) -> NodeId {
        let text = tree.create_text(text, false);
        wrap(tree, "p", &[text])
    }

    fn link_list(tree: &mut Tree, count: usize) -> NodeId {
        let mut items = Vec::new();
        for i in 0..count {
            let text = tree.create_text(format!("Link {i}").as_str(), true);
            let a = tree.create_container("a", Variety::HYPERLINK);
            tree.append_child(a, text).ok();
            items.push(wrap(tree, "li", &[a]));
        }
        wrap(tree, "ul", &items)
    }

    const SENTENCE: &str = "This paragraph carries the actual article text for the reader. ";

    #[test]
    fn test_what_if_leaves_parent_untouched() {
        let options = Options::default();
        let mut tree = Tree::new();
        let p1 = paragraph(&mut tree, &SENTENCE.repeat(3));
        let list = link_list(&mut tree, 5);
        let p2 = paragraph(&mut tree, &SENTENCE.repeat(2));
        let root = wrap(&mut tree, "div", &[p1, list, p2]);
        aggregate(&mut tree, root, &options);

        let order = tree.children(root).to_vec();
        let score = tree.stats(root).score;

        for node in [p1, list, p2] {
            let _ = lowers_parent_score(&mut tree, node, &options);
            assert_eq!(tree.children(root), order.as_slice());
            assert_eq!(tree.stats(root).score.to_bits(), score.to_bits());
            assert_eq!(tree.parent(node), Some(root));
        }
    }

    #[test]
    fn test_rejection_check_keeps_parent_counters() {
        let options = Options::default();
        let mut tree = Tree::new();
        let p1 = paragraph(&mut tree, "Plain words here.");
        let list = link_list(&mut tree, 2);
        let direct = tree.create_text("and some loose text", false);
        let root = wrap(&mut tree, "div", &[p1, list, direct]);
        aggregate(&mut tree, root, &options);
        let before = *tree.stats(root);
        let holds_text = tree.contains_text(root);

        for node in [p1, list, direct] {
            let _ = can_reject(&mut tree, node, &options);
            assert_eq!(*tree.stats(root), before);
            assert_eq!(tree.contains_text(root), holds_text);
        }
    }

    #[test]
    fn test_link_list_lowers_parent_score() {
        let options = Options::default();
        let mut tree = Tree::new();
        let p1 = paragraph(&mut tree, &SENTENCE.repeat(3));
        let list = link_list(&mut tree, 5);
        let root = wrap(&mut tree, "div", &[p1, list]);
        aggregate(&mut tree, root, &options);

        assert!(lowers_parent_score(&mut tree, list, &options));
        assert!(!lowers_parent_score(&mut tree, p1, &options));
        assert!(can_reject(&mut tree, list, &options));
    }

    #[test]
    fn test_dense_paragraph_is_not_rejected() {
        let options = Options::default();
        let mut tree = Tree::new();
        let p1 = paragraph(&mut tree, &SENTENCE.repeat(3));
        let p2 = paragraph(&mut tree, &SENTENCE.repeat(3));
        let root = wrap(&mut tree, "div", &[p1, p2]);
        aggregate(&mut tree, root, &options);

        assert!(!can_reject(&mut tree, p1, &options));
    }

    #[test]
    fn test_orphans_and_text_are_never_rejected() {
        let options = Options::default();
        let mut tree = Tree::new();
        let text = tree.create_text("x", false);
        let root = wrap(&mut tree, "div", &[text]);
        aggregate(&mut tree, root, &options);

        assert!(!lowers_parent_score(&mut tree, root, &options));
        assert!(!can_reject(&mut tree, root, &options));
        assert!(!can_reject(&mut tree, text, &options));
    }

    #[test]
    fn test_prune_removes_link_farm() {
        let options = Options::default();
        let mut tree = Tree::new();
        let p1 = paragraph(&mut tree, &SENTENCE.repeat(3));
        let list = link_list(&mut tree, 8);
        let p2 = paragraph(&mut tree, &SENTENCE.repeat(2));
        let root = wrap(&mut tree, "article", &[p1, list, p2]);
        aggregate(&mut tree, root, &options);
        let before: Stats = *tree.stats(root);

        let removed = prune(&mut tree, root, &options);

        assert_eq!(removed, 1);
        assert_eq!(tree.children(root), &[p1, p2]);
        assert_eq!(tree.parent(list), None);
        assert!(tree.stats(root).score > before.score);
        assert_eq!(tree.stats(root).hyperchars, 0);
    }

    #[test]
    fn test_prune_keeps_clean_article() {
        let options = Options::default();
        let mut tree = Tree::new();
        let p1 = paragraph(&mut tree, &SENTENCE.repeat(3));
        let p2 = paragraph(&mut tree, &SENTENCE.repeat(2));
        let root = wrap(&mut tree, "article", &[p1, p2]);

        assert_eq!(prune(&mut tree, root, &options), 0);
        assert_eq!(tree.children(root), &[p1, p2]);
    }
}
