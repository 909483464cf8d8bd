//! The closed node type and its per-kind dispatch

use crate::tree::{Children, Container, Directory, Drive, File, Missing, Name, Named, TreeError};
use derive_more::Display;
use log::debug;
use std::borrow::Cow;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The kind of a node in the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NodeKind {
    /// A root container identified by a single letter
    #[display(fmt = "drive")]
    Drive,
    /// A named container
    #[display(fmt = "directory")]
    Directory,
    /// A named leaf
    #[display(fmt = "file")]
    File,
}

impl NodeKind {
    /// Returns true if nodes of this kind can have children
    pub const fn is_container(self) -> bool {
        matches!(self, NodeKind::Drive | NodeKind::Directory)
    }

    /// Returns true if nodes of this kind never have children
    pub const fn is_leaf(self) -> bool {
        matches!(self, NodeKind::File)
    }

    /// Returns true if nodes of this kind carry a renameable name
    pub const fn is_named(self) -> bool {
        matches!(self, NodeKind::Directory | NodeKind::File)
    }
}

/// A single node in the tree
///
/// Exactly one kind is active, and it never changes: replacing the whole
/// node is the only way to turn a file into a directory. Containers own
/// their children outright and children hold no link back to their parent.
///
/// Every operation below matches on the active kind and delegates to the
/// capability that kind carries. Operations a kind does not support return
/// an error rather than doing nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Node {
    Drive(Drive),
    Directory(Directory),
    File(File),
}

impl Node {
    /// Create a drive with the given letter and initial children
    pub fn drive(letter: char, children: impl IntoIterator<Item = Node>) -> Self {
        Node::Drive(Drive::new(letter, children))
    }

    /// Create a directory with the given name and initial children
    pub fn directory(name: impl Into<String>, children: impl IntoIterator<Item = Node>) -> Self {
        Node::Directory(Directory::new(Name::new(name), children))
    }

    /// Create a file with the given name
    pub fn file(name: impl Into<String>) -> Self {
        Node::File(File::new(Name::new(name)))
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Drive(_) => NodeKind::Drive,
            Node::Directory(_) => NodeKind::Directory,
            Node::File(_) => NodeKind::File,
        }
    }

    /// Returns true if this node can have children
    pub fn is_container(&self) -> bool {
        self.kind().is_container()
    }

    /// Returns true if this node is a leaf
    pub fn is_leaf(&self) -> bool {
        self.kind().is_leaf()
    }

    /// The node's display name
    ///
    /// Drives report their letter; directories and files their stored name.
    pub fn name(&self) -> Cow<'_, str> {
        match self {
            Node::Drive(drive) => Cow::Owned(drive.letter().to_string()),
            Node::Directory(dir) => Cow::Borrowed(dir.name()),
            Node::File(file) => Cow::Borrowed(file.name()),
        }
    }

    /// The container capability, if this kind has one
    pub fn as_container(&self) -> Option<&dyn Container> {
        match self {
            Node::Drive(drive) => Some(drive),
            Node::Directory(dir) => Some(dir),
            Node::File(_) => None,
        }
    }

    pub fn as_container_mut(&mut self) -> Option<&mut dyn Container> {
        match self {
            Node::Drive(drive) => Some(drive),
            Node::Directory(dir) => Some(dir),
            Node::File(_) => None,
        }
    }

    /// The naming capability, if this kind has one
    pub fn as_named(&self) -> Option<&dyn Named> {
        match self {
            Node::Drive(_) => None,
            Node::Directory(dir) => Some(dir),
            Node::File(file) => Some(file),
        }
    }

    pub fn as_named_mut(&mut self) -> Option<&mut dyn Named> {
        match self {
            Node::Drive(_) => None,
            Node::Directory(dir) => Some(dir),
            Node::File(file) => Some(file),
        }
    }

    /// The node's children in index order
    ///
    /// Leaves report an empty slice.
    pub fn children(&self) -> &[Node] {
        self.as_container()
            .map(|c| c.children().as_slice())
            .unwrap_or(&[])
    }

    /// Number of direct children (0 for leaves)
    pub fn child_count(&self) -> usize {
        self.children().len()
    }

    /// Number of nodes in this subtree, including this node
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(Node::node_count).sum::<usize>()
    }

    /// Replace the node's name in place
    ///
    /// Position, children and identity are unchanged. Drives cannot be
    /// renamed since their name is their letter.
    pub fn rename(&mut self, new_name: impl Into<String>) -> Result<(), TreeError> {
        let kind = self.kind();
        let named = self
            .as_named_mut()
            .ok_or(TreeError::CannotRename { kind })?;
        let new_name = new_name.into();
        debug!("Renaming {} {:?} to {:?}", kind, named.name(), new_name);
        named.set_name(new_name);
        Ok(())
    }

    /// Append a child after all existing children
    pub fn add_child(&mut self, child: Node) -> Result<(), TreeError> {
        let kind = self.kind();
        let container = self
            .as_container_mut()
            .ok_or(TreeError::CannotContain { kind })?;
        debug!("Adding {} {:?} to {}", child.kind(), child.name(), kind);
        container.children_mut().push(child);
        Ok(())
    }

    /// Detach and return the child at `index` along with its whole subtree
    ///
    /// Later siblings shift down by one, so every path or index previously
    /// resolved into this container must be considered invalid afterwards.
    pub fn remove_child(&mut self, index: usize) -> Result<Node, TreeError> {
        let kind = self.kind();
        let removed = self
            .child_list_mut()
            .and_then(|children| children.remove(index))
            .map_err(|reason| TreeError::non_exist(0, index, reason))?;
        debug!(
            "Removed {} {:?} at index {} from {}",
            removed.kind(),
            removed.name(),
            index,
            kind
        );
        Ok(removed)
    }

    pub(crate) fn child_list(&self) -> Result<&Children, Missing> {
        self.as_container()
            .map(|c| c.children())
            .ok_or(Missing::NotAContainer { kind: self.kind() })
    }

    pub(crate) fn child_list_mut(&mut self) -> Result<&mut Children, Missing> {
        let kind = self.kind();
        self.as_container_mut()
            .map(|c| c.children_mut())
            .ok_or(Missing::NotAContainer { kind })
    }
}

impl From<Drive> for Node {
    fn from(drive: Drive) -> Self {
        Node::Drive(drive)
    }
}

impl From<Directory> for Node {
    fn from(dir: Directory) -> Self {
        Node::Directory(dir)
    }
}

impl From<File> for Node {
    fn from(file: File) -> Self {
        Node::File(file)
    }
}
