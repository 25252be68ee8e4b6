//! Result types for extraction output.

use serde::Serialize;

use crate::tree::{NodeId, Tree};

/// Counters of the container chosen as main content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateStats {
    /// Arena index of the container.
    pub node: NodeId,
    /// Tag name of the container.
    pub tag: String,
    /// Characters of text below it.
    pub chars: usize,
    /// Characters of hyperlink text below it.
    pub hyperchars: usize,
    /// Nodes in its subtree, itself included.
    pub tags: usize,
    /// Its own density score.
    pub score: f64,
    /// Sum of its children's scores, the value it won selection with.
    pub sum: f64,
}

impl CandidateStats {
    /// Snapshot the counters of `node` as they currently stand.
    #[must_use]
    pub fn capture(tree: &Tree, node: NodeId) -> Self {
        let stats = tree.stats(node);
        Self {
            node,
            tag: tree.tag(node).unwrap_or_default().to_string(),
            chars: stats.chars,
            hyperchars: stats.hyperchars,
            tags: stats.tags,
            score: stats.score,
            sum: stats.sum,
        }
    }
}

/// Result of content extraction.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExtractResult {
    /// Main content as plain text, paragraphs separated by blank lines.
    pub content_text: String,

    /// The selected container, with counters from selection time.
    pub candidate: Option<CandidateStats>,

    /// Number of subtrees removed from the candidate by pruning.
    pub pruned: usize,

    /// Non-fatal issues found during extraction.
    pub warnings: Vec<String>,
}
