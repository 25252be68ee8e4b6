//! Arena-backed node tree.
//!
//! Every node lives in a [`Tree`] and is addressed by a [`NodeId`]. A
//! container owns the ordered list of its children; the parent link is a
//! plain index used only to walk upward. Attaching a node enforces the
//! single-parent and acyclic invariants up front, so the scoring code never
//! has to defend against a malformed shape.
//!
//! ```text
//! Tree.nodes: [ body, div, "Hello", a, "link" ]
//!                 │     │              │
//!                 └─ div┴─ "Hello", a ─┴─ "link"
//! ```

use std::fmt;

use serde::Serialize;
use tendril::StrTendril;

use crate::error::{Error, Result};
use crate::grouping::Grouping;

/// Index of a node inside its [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in the arena.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Classification flags of a container.
///
/// Flags are inherited while building: anything inside a hyperlink is
/// hyperlink content, anything inside low-value markup is low-value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Variety(u8);

impl Variety {
    pub const NORMAL: Self = Self(0);
    pub const HYPERLINK: Self = Self(1);
    pub const BAD: Self = Self(2);

    /// Whether every flag in `other` is set.
    #[must_use]
    pub fn contains(self, other: Self) -> bool {
        other.0 != 0 && self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    #[must_use]
    pub fn is_normal(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for Variety {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Aggregated counters of a node.
///
/// Valid only right after [`aggregate`](crate::compute::aggregate) ran over
/// the subtree; any structural change leaves them stale.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Stats {
    /// Characters of text in the subtree.
    pub chars: usize,
    /// Characters of text under hyperlink influence.
    pub hyperchars: usize,
    /// Nodes in the subtree, self included.
    pub tags: usize,
    /// Density score of the node itself.
    pub score: f64,
    /// Sum of the immediate children's scores.
    pub sum: f64,
}

/// Leaf text unit.
#[derive(Debug, Clone)]
pub struct Text {
    content: StrTendril,
    hyperlink: bool,
}

impl Text {
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn is_hyperlink(&self) -> bool {
        self.hyperlink
    }
}

/// Element container.
#[derive(Debug, Clone)]
pub struct Container {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<NodeId>,
    variety: Variety,
}

impl Container {
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    #[must_use]
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attrs
    }

    #[must_use]
    pub fn variety(&self) -> Variety {
        self.variety
    }
}

#[derive(Debug, Clone)]
pub enum NodeKind {
    Container(Container),
    Text(Text),
}

#[derive(Debug, Clone)]
pub struct Node {
    parent: Option<NodeId>,
    stats: Stats,
    kind: NodeKind,
}

impl Node {
    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[must_use]
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    #[must_use]
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    #[must_use]
    pub fn as_container(&self) -> Option<&Container> {
        match &self.kind {
            NodeKind::Container(c) => Some(c),
            NodeKind::Text(_) => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&Text> {
        match &self.kind {
            NodeKind::Text(t) => Some(t),
            NodeKind::Container(_) => None,
        }
    }
}

/// Arena owning every node of one document.
///
/// Detached nodes stay in the arena as orphans until the tree is dropped.
#[derive(Debug, Clone, Default)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes ever created, orphans included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Create an unattached container.
    pub fn create_container(&mut self, tag: impl Into<String>, variety: Variety) -> NodeId {
        self.push(Node {
            parent: None,
            stats: Stats {
                tags: 1,
                ..Stats::default()
            },
            kind: NodeKind::Container(Container {
                tag: tag.into(),
                attrs: Vec::new(),
                children: Vec::new(),
                variety,
            }),
        })
    }

    /// Create an unattached text unit.
    ///
    /// Its counters are final: `chars` is the length of `content` in
    /// characters, and `hyperchars` equals it only for hyperlink text.
    pub fn create_text(&mut self, content: impl Into<StrTendril>, hyperlink: bool) -> NodeId {
        let content = content.into();
        let chars = content.chars().count();
        self.push(Node {
            parent: None,
            stats: Stats {
                chars,
                hyperchars: if hyperlink { chars } else { 0 },
                tags: 1,
                score: 0.0,
                sum: 0.0,
            },
            kind: NodeKind::Text(Text { content, hyperlink }),
        })
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    #[must_use]
    pub fn stats(&self, id: NodeId) -> &Stats {
        &self.nodes[id.0].stats
    }

    pub(crate) fn stats_mut(&mut self, id: NodeId) -> &mut Stats {
        &mut self.nodes[id.0].stats
    }

    /// Children of a container; empty for text units.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match &self.nodes[id.0].kind {
            NodeKind::Container(c) => &c.children,
            NodeKind::Text(_) => &[],
        }
    }

    #[must_use]
    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.children(id).last().copied()
    }

    #[must_use]
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.nodes[id.0].as_container().map(Container::tag)
    }

    #[must_use]
    pub fn variety(&self, id: NodeId) -> Variety {
        self.nodes[id.0]
            .as_container()
            .map_or(Variety::NORMAL, Container::variety)
    }

    #[must_use]
    pub fn is_text(&self, id: NodeId) -> bool {
        self.nodes[id.0].as_text().is_some()
    }

    /// Whether a container carries the given classification.
    #[must_use]
    pub fn of_variety(&self, id: NodeId, variety: Variety) -> bool {
        self.variety(id).contains(variety)
    }

    /// Record an attribute on a container. Text units ignore it.
    pub fn set_attribute(&mut self, id: NodeId, name: impl Into<String>, value: impl Into<String>) {
        if let NodeKind::Container(c) = &mut self.nodes[id.0].kind {
            c.attrs.push((name.into(), value.into()));
        }
    }

    pub(crate) fn add_variety(&mut self, id: NodeId, variety: Variety) {
        if let NodeKind::Container(c) = &mut self.nodes[id.0].kind {
            c.variety.insert(variety);
        }
    }

    /// Iterate from the node's parent up to the root.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |&p| self.parent(p))
    }

    /// Append `child` to the end of `parent`'s children.
    ///
    /// Fails without touching either node when `child` already has a parent,
    /// when `parent` is a text unit, or when `child` is `parent` or one of
    /// its ancestors.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<NodeId> {
        let index = self.children(parent).len();
        self.insert_child(parent, index, child)?;
        Ok(child)
    }

    /// Insert `child` at `index` among `parent`'s children.
    ///
    /// Same checks as [`append_child`](Self::append_child). `index` is
    /// clamped to the number of children.
    pub fn insert_child(&mut self, parent: NodeId, index: usize, child: NodeId) -> Result<()> {
        if self.nodes[child.0].parent.is_some() {
            return Err(Error::Reparenting { child });
        }
        if self.is_text(parent) {
            return Err(Error::NotAContainer(parent));
        }
        if child == parent || self.ancestors(parent).any(|a| a == child) {
            return Err(Error::Cycle { child, parent });
        }

        if let NodeKind::Container(c) = &mut self.nodes[parent.0].kind {
            let index = index.min(c.children.len());
            c.children.insert(index, child);
        }
        self.nodes[child.0].parent = Some(parent);
        Ok(())
    }

    /// Detach a node from its parent, returning its former position.
    ///
    /// Returns `None` for a node that has no parent.
    pub fn detach(&mut self, id: NodeId) -> Option<usize> {
        let parent = self.nodes[id.0].parent.take()?;
        let NodeKind::Container(c) = &mut self.nodes[parent.0].kind else {
            return None;
        };
        let index = c.children.iter().position(|&n| n == id)?;
        c.children.remove(index);
        Some(index)
    }

    /// Whether the container's direct text outweighs its nested markup.
    ///
    /// Sums the characters of direct text children and compares them against
    /// the container's aggregated character count, which includes deeper
    /// descendants. Exactly half is not enough.
    #[must_use]
    pub fn contains_text(&self, id: NodeId) -> bool {
        if self.is_text(id) {
            return false;
        }
        let direct: usize = self
            .children(id)
            .iter()
            .filter(|&&n| self.is_text(n))
            .map(|&n| self.stats(n).chars)
            .sum();
        direct as f64 > self.stats(id).chars as f64 * 0.5
    }

    /// Serialize a subtree to plain text.
    ///
    /// Text units produce their literal content. Containers concatenate their
    /// children, wrapped in blank lines when the tag is a block tag.
    #[must_use]
    pub fn to_text(&self, id: NodeId, grouping: &Grouping) -> String {
        self.display(id, grouping).to_string()
    }

    /// `Display` adapter for [`to_text`](Self::to_text).
    #[must_use]
    pub fn display<'a>(&'a self, id: NodeId, grouping: &'a Grouping) -> Rendered<'a> {
        Rendered {
            tree: self,
            id,
            grouping,
        }
    }

    fn write_text(&self, id: NodeId, grouping: &Grouping, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.nodes[id.0].kind {
            NodeKind::Text(t) => f.write_str(&t.content),
            NodeKind::Container(c) => {
                let block = grouping.is_block(&c.tag);
                if block {
                    f.write_str("\n\n")?;
                }
                for &child in &c.children {
                    self.write_text(child, grouping, f)?;
                }
                if block {
                    f.write_str("\n\n")?;
                }
                Ok(())
            }
        }
    }
}

/// A subtree rendered as plain text.
pub struct Rendered<'a> {
    tree: &'a Tree,
    id: NodeId,
    grouping: &'a Grouping,
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.tree.write_text(self.id, self.grouping, f)
    }
}
