//! Drive Tree Library
//!
//! An in-memory model of a small virtual filesystem: drives hold directories
//! and files, directories hold more of the same, and every node is reached
//! either by walking the tree or by a positional path of child indices.
//!
//! # Core Concepts
//!
//! - **Node**: a closed enum over the three kinds (drive, directory, file)
//! - **Path**: the child indices leading from one node to a descendant
//! - **Traversal**: pre-order walks that report each node with its path
//!
//! # Example
//!
//! ```
//! use drive_tree::prelude::*;
//!
//! let mut drive = Node::drive('a', [
//!     Node::directory("Animals", [Node::file("Aardvark")]),
//! ]);
//!
//! drive.resolve_mut(&[0, 0])?.rename("Antelope")?;
//! assert_eq!(drive.resolve(&[0, 0])?.name(), "Antelope");
//! assert!(drive.resolve(&[0, 1]).is_err());
//!
//! drive.recurse(|node, path| {
//!     println!("{}{}", "  ".repeat(path.depth()), node.name());
//! });
//! # Ok::<(), TreeError>(())
//! ```

pub mod tree;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::tree::prelude::*;
}
