//! Root-to-node addresses.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Sequence of sibling indices from the root to a node, outer to inner.
/// The empty path is the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Path(Vec<usize>);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParsePathError {
    #[error("path must start with '/': '{input}'")]
    MissingRoot { input: String },

    #[error("invalid path segment '{segment}' in '{input}'")]
    InvalidSegment { input: String, segment: String },
}

impl Path {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Path of the `index`-th child of this node.
    pub fn child(&self, index: usize) -> Self {
        let mut indices = Vec::with_capacity(self.0.len() + 1);
        indices.extend_from_slice(&self.0);
        indices.push(index);
        Self(indices)
    }

    /// Path of the parent node; `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        self.0
            .split_last()
            .map(|(_, rest)| Self(rest.to_vec()))
    }

    /// Index of this node within its parent; `None` for the root.
    pub fn last(&self) -> Option<usize> {
        self.0.last().copied()
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
}

impl From<Vec<usize>> for Path {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

impl<const N: usize> From<[usize; N]> for Path {
    fn from(indices: [usize; N]) -> Self {
        Self(indices.to_vec())
    }
}

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

/// Parses the [`Display`](fmt::Display) form: `/` for the root, `/0/2` for
/// nested nodes. A trailing slash is tolerated.
impl FromStr for Path {
    type Err = ParsePathError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let Some(rest) = input.strip_prefix('/') else {
            return Err(ParsePathError::MissingRoot {
                input: input.to_string(),
            });
        };
        let rest = rest.strip_suffix('/').unwrap_or(rest);
        if rest.is_empty() {
            return Ok(Self::root());
        }

        rest.split('/')
            .map(|segment| {
                segment
                    .parse::<usize>()
                    .map_err(|_| ParsePathError::InvalidSegment {
                        input: input.to_string(),
                        segment: segment.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}
