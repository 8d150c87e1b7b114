//! Upper bound derivation for range constraints

use std::fmt;

use crate::{Comparator, VersionTriple};

/// Exclusive upper bound of a caret or tilde range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// Versions strictly below this triple are in range
    Below(VersionTriple),
    /// Nothing above the floor is in range
    Empty,
    /// The next component would overflow, so every version above the floor is in range
    Unbounded,
}

impl Bound {
    /// Bound for `^floor`: bump the leading nonzero of major/minor.
    ///
    /// `^0.0.z` has no valid bound; only the floor itself matches.
    pub fn caret(floor: &VersionTriple) -> Self {
        if floor.major != 0 {
            match floor.major.checked_add(1) {
                Some(major) => Bound::Below(VersionTriple::new(major, 0, 0)),
                None => Bound::Unbounded,
            }
        } else if floor.minor != 0 {
            match floor.minor.checked_add(1) {
                Some(minor) => Bound::Below(VersionTriple::new(0, minor, 0)),
                None => Bound::Unbounded,
            }
        } else {
            Bound::Empty
        }
    }

    /// Bound for `~floor`: patch-level changes within the same minor
    pub fn tilde(floor: &VersionTriple) -> Self {
        match floor.minor.checked_add(1) {
            Some(minor) => Bound::Below(VersionTriple::new(floor.major, minor, 0)),
            None => Bound::Unbounded,
        }
    }

    /// Check whether a version above the floor still falls under this bound
    pub fn admits(&self, version: &VersionTriple) -> bool {
        match self {
            Bound::Below(limit) => Comparator::less_than(version, limit),
            Bound::Empty => false,
            Bound::Unbounded => true,
        }
    }

    /// The limiting triple, if there is one
    pub fn version(&self) -> Option<&VersionTriple> {
        match self {
            Bound::Below(limit) => Some(limit),
            Bound::Empty | Bound::Unbounded => None,
        }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Below(limit) => write!(f, "{} [exclusive]", limit),
            Bound::Empty => write!(f, "none"),
            Bound::Unbounded => write!(f, "unbounded"),
        }
    }
}
