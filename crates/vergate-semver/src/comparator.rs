//! Version comparison utilities

use std::cmp::Ordering;

use crate::VersionTriple;

/// Comparator for normalized version triples
pub struct Comparator;

impl Comparator {
    /// Compare `a` to `b`: major first, then minor, then patch
    pub fn compare(a: &VersionTriple, b: &VersionTriple) -> Ordering {
        a.major
            .cmp(&b.major)
            .then(a.minor.cmp(&b.minor))
            .then(a.patch.cmp(&b.patch))
    }

    /// Check if a > b
    pub fn greater_than(a: &VersionTriple, b: &VersionTriple) -> bool {
        Self::compare(a, b) == Ordering::Greater
    }

    /// Check if a >= b
    pub fn greater_than_or_equal_to(a: &VersionTriple, b: &VersionTriple) -> bool {
        Self::compare(a, b) != Ordering::Less
    }

    /// Check if a < b
    pub fn less_than(a: &VersionTriple, b: &VersionTriple) -> bool {
        Self::compare(a, b) == Ordering::Less
    }

    /// Check if a <= b
    pub fn less_than_or_equal_to(a: &VersionTriple, b: &VersionTriple) -> bool {
        Self::compare(a, b) != Ordering::Greater
    }

    /// Check if a == b
    pub fn equal_to(a: &VersionTriple, b: &VersionTriple) -> bool {
        Self::compare(a, b) == Ordering::Equal
    }
}
