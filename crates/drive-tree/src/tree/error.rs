//! Error types for tree addressing and mutation

use crate::tree::NodeKind;
use derive_more::{Display, Error};

/// Why a requested child could not be found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Missing {
    /// The container exists but has fewer children than the index requires
    #[display(fmt = "the container only has {} children", len)]
    OutOfRange { len: usize },
    /// The node is a leaf and has no children at all
    #[display(fmt = "a {} has no children", kind)]
    NotAContainer { kind: NodeKind },
}

/// Errors returned by node accessors and mutators
///
/// None of these are fatal: every error leaves the tree untouched and the
/// caller decides whether to retry with another address or report upward.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum TreeError {
    /// An index or path step pointed at a child that does not exist
    ///
    /// `segment` is the position of the failing step within the path (0 for
    /// a single-index lookup).
    #[display(
        fmt = "path segment {} does not exist: index {} requested but {}",
        segment,
        index,
        reason
    )]
    NonExist {
        segment: usize,
        index: usize,
        reason: Missing,
    },
    /// Rename was attempted on a node whose name is not free text
    #[display(fmt = "cannot rename a {}", kind)]
    CannotRename { kind: NodeKind },
    /// A child was added to a node that cannot hold children
    #[display(fmt = "a {} cannot contain children", kind)]
    CannotContain { kind: NodeKind },
    /// A textual path contained a segment that is not a non-negative index
    #[display(fmt = "malformed path segment `{}`", segment)]
    MalformedPath { segment: String },
}

impl TreeError {
    pub(crate) fn non_exist(segment: usize, index: usize, reason: Missing) -> Self {
        TreeError::NonExist {
            segment,
            index,
            reason,
        }
    }

    /// Returns true if this error reports a missing child
    pub fn is_non_exist(&self) -> bool {
        matches!(self, TreeError::NonExist { .. })
    }
}
