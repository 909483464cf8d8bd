//! Indented text rendering of a tree
//!
//! Rendering is built entirely on [`Node::recurse`]: each visited node
//! becomes one line, indented once per step of its path.

use crate::tree::Node;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Options controlling how a tree is rendered as text
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct RenderOptions {
    /// Text repeated once per level of depth before each name.
    pub indent: String,

    /// Whether to append the node kind, e.g. `Animals (directory)`.
    pub show_kind: bool,

    /// Whether to append the node's path from the rendered root, e.g. `/0/1`.
    pub show_paths: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent: "\t".to_string(),
            show_kind: false,
            show_paths: false,
        }
    }
}

impl RenderOptions {
    /// Use `indent` for each level of depth
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    pub fn with_kind(mut self, show_kind: bool) -> Self {
        self.show_kind = show_kind;
        self
    }

    pub fn with_paths(mut self, show_paths: bool) -> Self {
        self.show_paths = show_paths;
        self
    }
}

/// Render `node` and its descendants, one line per node
pub fn render(node: &Node, options: &RenderOptions) -> String {
    let mut out = String::new();
    node.recurse(|item, path| {
        out.push_str(&options.indent.repeat(path.depth()));
        out.push_str(&item.name());
        if options.show_kind {
            out.push_str(&format!(" ({})", item.kind()));
        }
        if options.show_paths {
            out.push_str(&format!(" {}", path));
        }
        out.push('\n');
    });
    out
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self, &RenderOptions::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_indents_with_tabs() {
        let tree = Node::drive('a', [Node::directory("Animals", [Node::file("Aardvark")])]);
        assert_eq!(tree.to_string(), "a\n\tAnimals\n\t\tAardvark\n");
    }

    #[test]
    fn test_kind_and_paths() {
        let tree = Node::directory("docs", [Node::file("readme")]);
        let options = RenderOptions::default()
            .with_indent("  ")
            .with_kind(true)
            .with_paths(true);
        assert_eq!(
            render(&tree, &options),
            "docs (directory) /\n  readme (file) /0\n"
        );
    }

    #[test]
    fn test_render_subtree() {
        let tree = Node::drive('a', [Node::directory("Animals", [Node::file("Aardvark")])]);
        let subtree = tree.child_at(0).unwrap();
        assert_eq!(render(subtree, &RenderOptions::default()), "Animals\n\tAardvark\n");
    }
}
