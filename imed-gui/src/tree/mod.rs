//! Value trees rendered as collapsible tree widgets.
//!
//! [`TreeNode`] is a plain labelled tree. [`FreeTreeNode`] mirrors a
//! directory on disk and draws file icons next to each entry. Both own their
//! children by value and share the queries in [`TreeItem`].

mod file;
mod icons;
mod node;

use std::path::PathBuf;
use std::rc::Rc;

pub use self::file::{BuildOptions, FreeTreeNode};
pub use self::icons::{FileIconProvider, FileIcons};
pub use self::node::TreeNode;

/// Selection callback shared between clones of a node.
pub type OnSelected<T> = Rc<dyn Fn(&T)>;

#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    #[error("cannot read directory {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{0} is not a directory")]
    NotADirectory(PathBuf),
}

/// Queries shared by every tree node type.
#[allow(clippy::len_without_is_empty)]
pub trait TreeItem: Sized {
    fn children(&self) -> &[Self];

    fn is_leaf(&self) -> bool {
        self.children().is_empty()
    }

    /// Number of direct children.
    fn len(&self) -> usize {
        self.children().len()
    }

    /// Number of nodes in the subtree, this one included.
    fn count(&self) -> usize {
        1 + self.children().iter().map(Self::count).sum::<usize>()
    }

    /// Pre-order walk over the subtree, starting with this node.
    fn iter(&self) -> DepthFirst<'_, Self> {
        DepthFirst { stack: vec![self] }
    }
}

/// Iterator returned by [`TreeItem::iter`].
pub struct DepthFirst<'a, T> {
    stack: Vec<&'a T>,
}

impl<'a, T: TreeItem> Iterator for DepthFirst<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}
