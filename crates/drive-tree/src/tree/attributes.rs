//! Attributes composed into node kinds
//!
//! A node kind is assembled from these pieces rather than inheriting them:
//! [`Name`] gives a kind a mutable display name and [`Children`] gives it an
//! ordered, owned list of child nodes. The [`Named`] and [`Container`] traits
//! mark which kinds carry which attribute.

use crate::tree::{Missing, Node};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Capability: the node has a free-text name that can be changed in place
pub trait Named {
    /// The stored name
    fn name(&self) -> &str;

    /// Overwrite the stored name
    fn set_name(&mut self, name: String);
}

/// Capability: the node owns an ordered list of children
pub trait Container {
    fn children(&self) -> &Children;

    fn children_mut(&mut self) -> &mut Children;
}

/// A mutable display name
///
/// Names carry no uniqueness constraint; siblings may share one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Name(String);

impl Name {
    pub fn new(name: impl Into<String>) -> Self {
        Name(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn set(&mut self, name: String) {
        self.0 = name;
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Name {
    fn from(name: &str) -> Self {
        Name::new(name)
    }
}

impl From<String> for Name {
    fn from(name: String) -> Self {
        Name(name)
    }
}

/// An ordered, exclusively owned sequence of child nodes
///
/// Order is insertion order and is the basis for positional addressing.
/// Dropping the list drops every descendant with it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Children(Vec<Node>);

impl Children {
    pub fn new() -> Self {
        Children(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Node] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Node> {
        self.0.iter_mut()
    }

    /// Get the child at `index`
    pub fn get(&self, index: usize) -> Result<&Node, Missing> {
        let len = self.0.len();
        self.0.get(index).ok_or(Missing::OutOfRange { len })
    }

    /// Get the child at `index` mutably
    pub fn get_mut(&mut self, index: usize) -> Result<&mut Node, Missing> {
        let len = self.0.len();
        self.0.get_mut(index).ok_or(Missing::OutOfRange { len })
    }

    /// Append a child at the end, after every existing sibling
    pub fn push(&mut self, child: Node) {
        self.0.push(child);
    }

    /// Detach the child at `index`, shifting later siblings down by one
    pub fn remove(&mut self, index: usize) -> Result<Node, Missing> {
        if index < self.0.len() {
            Ok(self.0.remove(index))
        } else {
            Err(Missing::OutOfRange { len: self.0.len() })
        }
    }
}

impl From<Vec<Node>> for Children {
    fn from(nodes: Vec<Node>) -> Self {
        Children(nodes)
    }
}

impl FromIterator<Node> for Children {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Children(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Children {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Children {
    type Item = Node;
    type IntoIter = std::vec::IntoIter<Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name() {
        let mut name = Name::new("Animals");
        assert_eq!(name.as_str(), "Animals");
        assert_eq!(name.to_string(), "Animals");

        name.set("Plants".to_string());
        assert_eq!(name.as_ref(), "Plants");
        assert_eq!(Name::from("x"), Name::from("x".to_string()));
    }

    #[test]
    fn test_children_bounds() {
        let mut children: Children = vec![Node::file("a"), Node::file("b")].into();
        assert_eq!(children.len(), 2);
        assert!(children.get(1).is_ok());
        assert_eq!(children.get(2), Err(Missing::OutOfRange { len: 2 }));
        assert_eq!(children.get_mut(5).err(), Some(Missing::OutOfRange { len: 2 }));
    }

    #[test]
    fn test_children_push_and_remove() {
        let mut children = Children::new();
        assert!(children.is_empty());

        children.push(Node::file("a"));
        children.push(Node::file("b"));
        children.push(Node::file("c"));

        let removed = children.remove(0).unwrap();
        assert_eq!(removed.name(), "a");
        let names: Vec<_> = children.iter().map(|n| n.name().into_owned()).collect();
        assert_eq!(names, vec!["b", "c"]);

        assert_eq!(children.remove(2), Err(Missing::OutOfRange { len: 2 }));
        assert_eq!(children.len(), 2);
    }
}
