//! The three node kinds: drives, directories and files
//!
//! Each kind is a plain struct composed from the attributes it needs.
//! They become tree nodes only when wrapped in [`Node`](crate::tree::Node).

use crate::tree::{Children, Container, Name, Named, Node};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The root of a tree, identified by a single letter
///
/// A drive's name is derived from its letter and is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Drive {
    letter: char,
    contents: Children,
}

impl Drive {
    pub fn new(letter: char, children: impl IntoIterator<Item = Node>) -> Self {
        Self {
            letter,
            contents: children.into_iter().collect(),
        }
    }

    pub fn letter(&self) -> char {
        self.letter
    }
}

impl Container for Drive {
    fn children(&self) -> &Children {
        &self.contents
    }

    fn children_mut(&mut self) -> &mut Children {
        &mut self.contents
    }
}

/// A named container nested somewhere below a drive
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Directory {
    name: Name,
    contents: Children,
}

impl Directory {
    pub fn new(name: impl Into<Name>, children: impl IntoIterator<Item = Node>) -> Self {
        Self {
            name: name.into(),
            contents: children.into_iter().collect(),
        }
    }

    /// Create a directory with no children
    pub fn empty(name: impl Into<Name>) -> Self {
        Self::new(name, [])
    }
}

impl Named for Directory {
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn set_name(&mut self, name: String) {
        self.name.set(name);
    }
}

impl Container for Directory {
    fn children(&self) -> &Children {
        &self.contents
    }

    fn children_mut(&mut self) -> &mut Children {
        &mut self.contents
    }
}

/// A named leaf
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct File {
    name: Name,
}

impl File {
    pub fn new(name: impl Into<Name>) -> Self {
        Self { name: name.into() }
    }
}

impl Named for File {
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn set_name(&mut self, name: String) {
        self.name.set(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drive() {
        let drive = Drive::new('c', [Node::file("boot.ini")]);
        assert_eq!(drive.letter(), 'c');
        assert_eq!(drive.children().len(), 1);
    }

    #[test]
    fn test_directory_is_named_container() {
        let mut dir = Directory::new("Animals", [Node::file("Aardvark")]);
        assert_eq!(dir.name(), "Animals");
        assert_eq!(dir.children().len(), 1);

        dir.set_name("Beasts".to_string());
        assert_eq!(dir.name(), "Beasts");
        assert_eq!(dir.children().len(), 1);

        assert!(Directory::empty("tmp").children().is_empty());
    }

    #[test]
    fn test_file_is_named() {
        let mut file = File::new("Aardvark");
        file.set_name("Antelope".to_string());
        assert_eq!(file.name(), "Antelope");
    }
}
