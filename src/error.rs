//! Error types for rs-readability.
//!
//! Tree construction is the only place the core can fail: attaching a node
//! must keep every node under at most one parent and the tree acyclic.

use crate::tree::NodeId;

/// Error type for tree construction and extraction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The node already belongs to a container.
    #[error("attempted reparenting of node {child}")]
    Reparenting {
        /// Node that was being attached.
        child: NodeId,
    },

    /// Attaching would make a node its own ancestor.
    #[error("attaching node {child} under {parent} would create a cycle")]
    Cycle {
        /// Node that was being attached.
        child: NodeId,
        /// Requested parent.
        parent: NodeId,
    },

    /// Text units cannot hold children.
    #[error("node {0} is a text unit and cannot hold children")]
    NotAContainer(NodeId),

    /// The builder received a close with nothing open.
    #[error("unbalanced close tag: {0}")]
    Unbalanced(String),

    /// No content container was found in the document.
    #[error("No extractable content found")]
    NoContent,
}

/// Result type alias for tree and extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
