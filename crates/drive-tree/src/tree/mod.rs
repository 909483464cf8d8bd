//! In-memory tree of drives, directories and files
//!
//! This module provides the closed [`Node`] type together with positional
//! addressing ([`Path`]), traversal and text rendering.

mod access;
mod attributes;
mod error;
mod kinds;
mod node;
mod path;
pub mod render;
mod traversal;

pub use attributes::{Children, Container, Name, Named};
pub use error::{Missing, TreeError};
pub use kinds::{Directory, Drive, File};
pub use node::{Node, NodeKind};
pub use path::{Address, Path};
pub use render::{render, RenderOptions};
pub use traversal::Walk;

/// Re-export common types for convenience
pub mod prelude {
    pub use super::{
        render, Address, Container, Missing, Named, Node, NodeKind, Path, RenderOptions,
        TreeError, Walk,
    };
}
