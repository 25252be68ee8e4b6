//! Statistics aggregation and candidate selection.
//!
//! One postorder pass recomputes every container's counters from its
//! children and scores it by text density:
//!
//! ```text
//! score = chars / tags * log2((chars + 1) / (hyperchars + 1))
//! sum   = Σ score(child)
//! ```
//!
//! The first factor rewards text-dense subtrees; the logarithm drops to zero
//! as hyperlink text approaches all of the text. Zero or negative scores are
//! ordinary results for link farms. A container's `sum` measures what it
//! holds rather than its own density, and is what candidates compete on.

use tracing::trace;

use crate::options::Options;
use crate::tree::{NodeId, Stats, Tree, Variety};

/// Best-scoring container seen during one aggregation pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    node: Option<NodeId>,
    sum: f64,
}

impl Candidate {
    /// A register any container can beat.
    #[must_use]
    pub fn new() -> Self {
        Self {
            node: None,
            sum: f64::NEG_INFINITY,
        }
    }

    /// A register no finite sum can beat.
    ///
    /// Kept for callers that want aggregation to run without ever reporting
    /// a candidate.
    #[must_use]
    pub fn unreachable() -> Self {
        Self {
            node: None,
            sum: f64::INFINITY,
        }
    }

    #[must_use]
    pub fn node(&self) -> Option<NodeId> {
        self.node
    }

    #[must_use]
    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// Record `node` if `sum` strictly beats the current best.
    pub fn offer(&mut self, node: NodeId, sum: f64) -> bool {
        if sum > self.sum {
            self.node = Some(node);
            self.sum = sum;
            true
        } else {
            false
        }
    }
}

impl Default for Candidate {
    fn default() -> Self {
        Self::new()
    }
}

/// Density score for the given counters.
#[must_use]
pub fn density(chars: usize, hyperchars: usize, tags: usize) -> f64 {
    let chars = chars as f64;
    chars / tags as f64 * ((chars + 1.0) / (hyperchars as f64 + 1.0)).log2()
}

/// Recompute counters for the subtree at `node` without tracking a candidate.
pub fn aggregate(tree: &mut Tree, node: NodeId, options: &Options) {
    visit(tree, node, options, None);
}

/// Recompute counters for the subtree at `node`, offering every container
/// to `candidate` as its `sum` is computed.
pub fn aggregate_with(tree: &mut Tree, node: NodeId, options: &Options, candidate: &mut Candidate) {
    visit(tree, node, options, Some(candidate));
}

/// Aggregate from `root` with a fresh register and return it.
#[must_use]
pub fn select(tree: &mut Tree, root: NodeId, options: &Options) -> Candidate {
    let mut candidate = Candidate::new();
    aggregate_with(tree, root, options, &mut candidate);
    candidate
}

fn visit(tree: &mut Tree, node: NodeId, options: &Options, mut candidate: Option<&mut Candidate>) {
    // Text counters are fixed at creation.
    if tree.is_text(node) {
        return;
    }

    let mut stats = Stats {
        tags: 1,
        ..Stats::default()
    };

    for i in 0..tree.children(node).len() {
        let child = tree.children(node)[i];
        visit(tree, child, options, candidate.as_deref_mut());

        let child_stats = tree.stats(child);
        stats.chars += child_stats.chars;
        stats.hyperchars += child_stats.hyperchars;
        stats.tags += child_stats.tags;
        stats.sum += child_stats.score;
    }

    stats.score = density(stats.chars, stats.hyperchars, stats.tags);
    if tree.of_variety(node, Variety::BAD) {
        stats.score *= options.bad_multiplier;
    }

    *tree.stats_mut(node) = stats;

    if let Some(candidate) = candidate {
        if candidate.offer(node, stats.sum) {
            trace!(node = %node, sum = stats.sum, "new best candidate");
        }
    }
}
