//! Depth-first traversal over a tree
//!
//! Every walk is pre-order: a node is visited before any of its descendants,
//! and children are visited in ascending index order with each subtree
//! finished before the next sibling starts. Alongside each node the visitor
//! receives the [`Path`] from the starting node, which is empty for the
//! starting node itself.
//!
//! Visitors only ever see shared references, so the tree cannot be
//! structurally changed while a walk is in progress.

use crate::tree::{Node, Path};
use std::convert::Infallible;
use std::ops::ControlFlow;

impl Node {
    /// Call `visitor` once for every node in this subtree, in pre-order
    ///
    /// # Example
    ///
    /// ```
    /// use drive_tree::prelude::*;
    ///
    /// let tree = Node::drive('a', [Node::directory("Animals", [Node::file("Aardvark")])]);
    /// let mut seen = Vec::new();
    /// tree.recurse(|node, path| seen.push((node.name().into_owned(), path.depth())));
    /// assert_eq!(
    ///     seen,
    ///     [
    ///         ("a".to_string(), 0),
    ///         ("Animals".to_string(), 1),
    ///         ("Aardvark".to_string(), 2),
    ///     ]
    /// );
    /// ```
    pub fn recurse<F>(&self, mut visitor: F)
    where
        F: FnMut(&Node, &Path),
    {
        let flow = self.try_recurse(|node, path| {
            visitor(node, path);
            ControlFlow::<Infallible>::Continue(())
        });
        match flow {
            ControlFlow::Continue(()) => {}
            ControlFlow::Break(never) => match never {},
        }
    }

    /// Like [`recurse`](Node::recurse), but the visitor may stop the walk
    ///
    /// Returning `ControlFlow::Break(value)` ends the walk immediately and
    /// hands `value` back to the caller. No further nodes are visited.
    pub fn try_recurse<B, F>(&self, mut visitor: F) -> ControlFlow<B>
    where
        F: FnMut(&Node, &Path) -> ControlFlow<B>,
    {
        self.visit(&Path::root(), &mut visitor)
    }

    fn visit<B, F>(&self, path: &Path, visitor: &mut F) -> ControlFlow<B>
    where
        F: FnMut(&Node, &Path) -> ControlFlow<B>,
    {
        visitor(self, path)?;
        for (index, child) in self.children().iter().enumerate() {
            child.visit(&path.join(index), visitor)?;
        }
        ControlFlow::Continue(())
    }

    /// Lazily walk this subtree in pre-order
    ///
    /// Yields the same `(path, node)` sequence as [`recurse`](Node::recurse).
    pub fn walk(&self) -> Walk<'_> {
        Walk::new(self)
    }

    /// Find the first node in pre-order matching `predicate`
    pub fn find<P>(&self, mut predicate: P) -> Option<(Path, &Node)>
    where
        P: FnMut(&Node) -> bool,
    {
        self.walk().find(|(_, node)| predicate(*node))
    }

    /// Find the first node in pre-order with the given name
    pub fn find_by_name(&self, name: &str) -> Option<(Path, &Node)> {
        self.find(|node| node.name() == name)
    }

    /// Find the paths of every node with the given name
    pub fn find_all_by_name(&self, name: &str) -> Vec<Path> {
        self.walk()
            .filter(|(_, node)| node.name() == name)
            .map(|(path, _)| path)
            .collect()
    }
}

/// Pre-order iterator over a subtree
pub struct Walk<'a> {
    stack: Vec<(Path, &'a Node)>,
}

impl<'a> Walk<'a> {
    /// Create a walker starting from `start`
    pub fn new(start: &'a Node) -> Self {
        Self {
            stack: vec![(Path::root(), start)],
        }
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = (Path, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let (path, node) = self.stack.pop()?;

        // Push in reverse so the lowest index is popped first
        for (index, child) in node.children().iter().enumerate().rev() {
            self.stack.push((path.join(index), child));
        }

        Some((path, node))
    }
}
