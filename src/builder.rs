//! Stack-based tree builder.
//!
//! Consumes one structural event at a time (open a tag, record an
//! attribute, add text, close the current tag) and materializes the
//! container/text tree scored by [`compute`](crate::compute).
//!
//! Classification is inherited on the way down: a container under a
//! hyperlink is hyperlink content, a container under low-value markup is
//! low-value, and text takes the hyperlink flag of its container.

use tracing::debug;

use crate::error::{Error, Result};
use crate::options::Options;
use crate::patterns::{is_low_value, WHITESPACE_NORMALIZE};
use crate::tree::{NodeId, Tree, Variety};

/// Tag name of the synthetic root every document hangs from.
pub const ROOT_TAG: &str = "#root";

/// A finished tree and its root.
#[derive(Debug, Clone)]
pub struct Document {
    pub tree: Tree,
    pub root: NodeId,
}

impl Document {
    /// Plain text of the whole document.
    #[must_use]
    pub fn text(&self, options: &Options) -> String {
        self.tree.to_text(self.root, &options.grouping)
    }
}

#[derive(Debug)]
enum Frame {
    Open(NodeId),
    /// A skipped tag; everything beneath it is dropped.
    Skipped,
}

/// Builds a [`Document`] from structural events.
#[derive(Debug)]
pub struct Builder<'o> {
    tree: Tree,
    root: NodeId,
    stack: Vec<Frame>,
    options: &'o Options,
}

impl<'o> Builder<'o> {
    #[must_use]
    pub fn new(options: &'o Options) -> Self {
        let mut tree = Tree::new();
        let root = tree.create_container(ROOT_TAG, Variety::NORMAL);
        Self {
            tree,
            root,
            stack: Vec::new(),
            options,
        }
    }

    /// Container receiving new children, `None` while inside a skipped tag.
    fn current(&self) -> Option<NodeId> {
        match self.stack.last() {
            None => Some(self.root),
            Some(Frame::Open(id)) => Some(*id),
            Some(Frame::Skipped) => None,
        }
    }

    #[must_use]
    pub fn options(&self) -> &'o Options {
        self.options
    }

    /// Number of tags currently open.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Open a container as the last child of the current one.
    pub fn open_tag(&mut self, name: &str) -> Result<()> {
        let Some(parent) = self.current() else {
            self.stack.push(Frame::Skipped);
            return Ok(());
        };

        let tag = name.to_ascii_lowercase();
        let grouping = &self.options.grouping;
        if grouping.is_skipped(&tag) {
            self.stack.push(Frame::Skipped);
            return Ok(());
        }

        let mut variety = self.tree.variety(parent);
        if grouping.is_hyperlink(&tag) {
            variety.insert(Variety::HYPERLINK);
        }
        if grouping.is_bad(&tag) {
            variety.insert(Variety::BAD);
        }

        let node = self.tree.create_container(tag, variety);
        self.tree.append_child(parent, node)?;
        self.stack.push(Frame::Open(node));
        Ok(())
    }

    /// Record an attribute on the most recently opened container.
    ///
    /// A `class` or `id` that looks like navigation, ads, or widgets flags
    /// the container as low-value when attribute classification is enabled.
    pub fn attribute(&mut self, name: &str, value: &str) {
        let Some(Frame::Open(node)) = self.stack.last() else {
            return;
        };
        let node = *node;

        if self.options.classify_attributes
            && (name.eq_ignore_ascii_case("class") || name.eq_ignore_ascii_case("id"))
            && is_low_value(value)
        {
            self.tree.add_variety(node, Variety::BAD);
        }
        self.tree.set_attribute(node, name, value);
    }

    /// Add a text unit to the current container.
    ///
    /// Whitespace runs collapse to a single space, so whitespace between
    /// inline elements survives as a `" "` unit. Empty text and text inside
    /// skipped tags is dropped.
    pub fn text(&mut self, content: &str) -> Result<()> {
        let Some(parent) = self.current() else {
            return Ok(());
        };
        if content.is_empty() {
            return Ok(());
        }

        let collapsed = WHITESPACE_NORMALIZE.replace_all(content, " ");
        let hyperlink = self.tree.of_variety(parent, Variety::HYPERLINK);
        let node = self.tree.create_text(&*collapsed, hyperlink);
        self.tree.append_child(parent, node)?;
        Ok(())
    }

    /// Close the current container.
    pub fn close_tag(&mut self, name: &str) -> Result<()> {
        if self.stack.pop().is_none() {
            return Err(Error::Unbalanced(name.to_string()));
        }
        Ok(())
    }

    /// Finish building, closing anything still open.
    #[must_use]
    pub fn finish(self) -> Document {
        if !self.stack.is_empty() {
            debug!(open = self.stack.len(), "closing unterminated tags");
        }
        Document {
            tree: self.tree,
            root: self.root,
        }
    }
}
