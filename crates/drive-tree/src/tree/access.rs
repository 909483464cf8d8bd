//! Indexed and path-based access to descendants

use crate::tree::{Address, Missing, Node, TreeError};
use log::trace;

impl Node {
    /// Get the child at `index`
    ///
    /// Fails with [`TreeError::NonExist`] when the index is past the last
    /// child, or when this node is a leaf and has no children to index.
    pub fn child_at(&self, index: usize) -> Result<&Node, TreeError> {
        self.step(index)
            .map_err(|reason| missing(0, index, reason))
    }

    pub fn child_at_mut(&mut self, index: usize) -> Result<&mut Node, TreeError> {
        self.step_mut(index)
            .map_err(|reason| missing(0, index, reason))
    }

    /// Follow `path` from this node, one child index at a time
    ///
    /// The empty path resolves to `self`. Resolution stops at the first step
    /// that fails and reports that step's position in the error.
    pub fn resolve(&self, path: &[usize]) -> Result<&Node, TreeError> {
        path.iter()
            .enumerate()
            .try_fold(self, |node, (segment, &index)| {
                node.step(index)
                    .map_err(|reason| missing(segment, index, reason))
            })
    }

    pub fn resolve_mut(&mut self, path: &[usize]) -> Result<&mut Node, TreeError> {
        path.iter()
            .enumerate()
            .try_fold(self, |node, (segment, &index)| {
                node.step_mut(index)
                    .map_err(|reason| missing(segment, index, reason))
            })
    }

    /// Look up a direct child or a deep descendant
    ///
    /// ```
    /// use drive_tree::prelude::*;
    ///
    /// let tree = Node::drive('a', [Node::directory("Animals", [Node::file("Aardvark")])]);
    /// assert_eq!(tree.get(0usize).unwrap().name(), "Animals");
    /// assert_eq!(tree.get([0usize, 0]).unwrap().name(), "Aardvark");
    /// assert!(tree.get([0usize, 1]).is_err());
    /// ```
    pub fn get(&self, address: impl Into<Address>) -> Result<&Node, TreeError> {
        match address.into() {
            Address::Index(index) => self.child_at(index),
            Address::Path(path) => self.resolve(&path),
        }
    }

    pub fn get_mut(&mut self, address: impl Into<Address>) -> Result<&mut Node, TreeError> {
        match address.into() {
            Address::Index(index) => self.child_at_mut(index),
            Address::Path(path) => self.resolve_mut(&path),
        }
    }

    fn step(&self, index: usize) -> Result<&Node, Missing> {
        self.child_list()?.get(index)
    }

    fn step_mut(&mut self, index: usize) -> Result<&mut Node, Missing> {
        self.child_list_mut()?.get_mut(index)
    }
}

fn missing(segment: usize, index: usize, reason: Missing) -> TreeError {
    trace!(
        "No child at index {} (path segment {}): {}",
        index,
        segment,
        reason
    );
    TreeError::non_exist(segment, index, reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{NodeKind, Path};

    fn sample() -> Node {
        Node::drive(
            'a',
            [
                Node::directory("Animals", [Node::file("Aardvark"), Node::file("Bison")]),
                Node::file("notes.txt"),
            ],
        )
    }

    #[test]
    fn test_child_at_bounds() {
        let tree = sample();
        assert_eq!(tree.child_at(0).unwrap().name(), "Animals");
        assert_eq!(tree.child_at(1).unwrap().name(), "notes.txt");
        assert_eq!(
            tree.child_at(2),
            Err(TreeError::NonExist {
                segment: 0,
                index: 2,
                reason: Missing::OutOfRange { len: 2 },
            })
        );
    }

    #[test]
    fn test_child_at_on_file() {
        let file = Node::file("f");
        assert_eq!(
            file.child_at(0),
            Err(TreeError::NonExist {
                segment: 0,
                index: 0,
                reason: Missing::NotAContainer {
                    kind: NodeKind::File
                },
            })
        );
    }

    #[test]
    fn test_resolve_empty_path_is_identity() {
        let tree = sample();
        assert!(std::ptr::eq(tree.resolve(&[]).unwrap(), &tree));
    }

    #[test]
    fn test_resolve_reports_failing_segment() {
        let tree = sample();
        assert_eq!(tree.resolve(&[0, 1]).unwrap().name(), "Bison");

        let err = tree.resolve(&[0, 5, 0]).unwrap_err();
        assert_eq!(
            err,
            TreeError::NonExist {
                segment: 1,
                index: 5,
                reason: Missing::OutOfRange { len: 2 },
            }
        );

        // Walking through a file fails at the step below it
        let err = tree.resolve(&[1, 0]).unwrap_err();
        assert!(matches!(
            err,
            TreeError::NonExist {
                segment: 1,
                reason: Missing::NotAContainer { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_resolve_mut_then_rename() {
        let mut tree = sample();
        tree.resolve_mut(&[0, 0]).unwrap().rename("Antelope").unwrap();
        assert_eq!(tree.resolve(&[0, 0]).unwrap().name(), "Antelope");
        assert!(tree.resolve_mut(&[2]).is_err());
    }

    #[test]
    fn test_get_accepts_index_or_path() {
        let mut tree = sample();
        let path = Path::from([0, 1]);
        assert_eq!(tree.get(1usize).unwrap().name(), "notes.txt");
        assert_eq!(tree.get(&path).unwrap().name(), "Bison");
        assert_eq!(tree.get(Path::root()).unwrap().name(), "a");

        tree.get_mut(path.clone()).unwrap().rename("Buffalo").unwrap();
        assert_eq!(tree.get(path).unwrap().name(), "Buffalo");
        assert!(tree.get_mut(7usize).is_err());
    }
}
