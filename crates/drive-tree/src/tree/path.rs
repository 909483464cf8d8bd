//! Positional paths through a tree
//!
//! A [`Path`] is the sequence of child indices taken from some starting node
//! to reach a descendant. It is only meaningful relative to that starting
//! node, and only until the containers along the way are structurally
//! changed: removing a child shifts the indices of every later sibling.

use crate::tree::TreeError;
use smallvec::SmallVec;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered child indices from a starting node to a descendant
///
/// The empty path addresses the starting node itself. Extending a path with
/// [`Path::join`] produces a new value and leaves the original untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Path(SmallVec<[usize; 8]>);

impl Path {
    /// The empty path
    pub fn root() -> Self {
        Path(SmallVec::new())
    }

    /// A new path one level deeper, selecting child `index`
    pub fn join(&self, index: usize) -> Path {
        let mut next = self.clone();
        next.0.push(index);
        next
    }

    /// Number of steps below the starting node
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// The path one level up, or `None` for the empty path
    pub fn parent(&self) -> Option<Path> {
        match self.0.split_last() {
            Some((_, rest)) => Some(Path(SmallVec::from_slice(rest))),
            None => None,
        }
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
}

impl Deref for Path {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        &self.0
    }
}

impl AsRef<[usize]> for Path {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}

impl From<&[usize]> for Path {
    fn from(indices: &[usize]) -> Self {
        Path(SmallVec::from_slice(indices))
    }
}

impl<const N: usize> From<[usize; N]> for Path {
    fn from(indices: [usize; N]) -> Self {
        Path(indices.into_iter().collect())
    }
}

impl From<Vec<usize>> for Path {
    fn from(indices: Vec<usize>) -> Self {
        Path(SmallVec::from_vec(indices))
    }
}

impl FromIterator<usize> for Path {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Path(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Formats as `/0/1`; the empty path is `/`
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("/");
        }
        for index in &self.0 {
            write!(f, "/{}", index)?;
        }
        Ok(())
    }
}

/// Parses the [`Display`](fmt::Display) form; the leading `/` is optional
impl FromStr for Path {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let body = trimmed.strip_prefix('/').unwrap_or(trimmed);
        if body.is_empty() {
            return Ok(Path::root());
        }

        body.split('/')
            .map(|segment| {
                segment
                    .parse::<usize>()
                    .map_err(|_| TreeError::MalformedPath {
                        segment: segment.to_string(),
                    })
            })
            .collect()
    }
}

/// Either a single child index or a full path
///
/// Accepted by [`Node::get`](crate::tree::Node::get) so callers can address a
/// direct child and a deep descendant through the same entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Address {
    Index(usize),
    Path(Path),
}

impl From<usize> for Address {
    fn from(index: usize) -> Self {
        Address::Index(index)
    }
}

impl From<Path> for Address {
    fn from(path: Path) -> Self {
        Address::Path(path)
    }
}

impl From<&Path> for Address {
    fn from(path: &Path) -> Self {
        Address::Path(path.clone())
    }
}

impl From<&[usize]> for Address {
    fn from(indices: &[usize]) -> Self {
        Address::Path(Path::from(indices))
    }
}

impl<const N: usize> From<[usize; N]> for Address {
    fn from(indices: [usize; N]) -> Self {
        Address::Path(Path::from(indices))
    }
}

impl From<Vec<usize>> for Address {
    fn from(indices: Vec<usize>) -> Self {
        Address::Path(Path::from(indices))
    }
}
