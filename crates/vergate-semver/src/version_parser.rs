//! Version parsing and normalization module

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

/// Number of numeric components every version is normalized to
pub const TRIPLE_LEN: usize = 3;

/// Error type for version parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionParserError {
    #[error("Malformed version \"{version}\": segment \"{segment}\" is not a non-negative integer")]
    MalformedVersion { version: String, segment: String },
}

impl VersionParserError {
    /// The full version string that failed to parse
    pub fn version(&self) -> &str {
        match self {
            VersionParserError::MalformedVersion { version, .. } => version,
        }
    }

    /// The dot-separated segment that was rejected
    pub fn segment(&self) -> &str {
        match self {
            VersionParserError::MalformedVersion { segment, .. } => segment,
        }
    }
}

lazy_static! {
    // Leading run without any decimal digit (unicode \d, same class as the host's digit check)
    static ref OPERATOR_PREFIX_RE: Regex = Regex::new(r"^\D*").unwrap();
}

/// A normalized `major.minor.patch` version.
///
/// Ordering is derived field by field, so `major` dominates `minor`, which
/// dominates `patch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct VersionTriple {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl VersionTriple {
    /// Create a new triple
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        VersionTriple { major, minor, patch }
    }
}

impl From<[u64; TRIPLE_LEN]> for VersionTriple {
    fn from(parts: [u64; TRIPLE_LEN]) -> Self {
        VersionTriple::new(parts[0], parts[1], parts[2])
    }
}

impl FromStr for VersionTriple {
    type Err = VersionParserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VersionParser::to_triple(s)
    }
}

impl fmt::Display for VersionTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Splits constraint strings and normalizes dotted versions
pub struct VersionParser;

impl VersionParser {
    /// Split a raw constraint into its operator prefix and numeric remainder.
    ///
    /// The prefix is the longest leading run that contains no decimal digit;
    /// the remainder starts at the first digit. Without any digit the whole
    /// input is the prefix and the remainder is empty. Never fails.
    pub fn split_prefix(raw: &str) -> (&str, &str) {
        let end = OPERATOR_PREFIX_RE
            .find(raw)
            .map(|m| m.end())
            .unwrap_or(0);
        raw.split_at(end)
    }

    /// Normalize a dotted version into a [`VersionTriple`].
    ///
    /// Missing trailing segments are zero-filled and anything past the third
    /// segment is dropped unexamined. A present segment must consist of ASCII
    /// digits only; an empty segment (`"1..2"`, `""`) is malformed.
    pub fn to_triple(version: &str) -> Result<VersionTriple, VersionParserError> {
        let mut parts = [0u64; TRIPLE_LEN];

        for (slot, segment) in parts.iter_mut().zip(version.split('.')) {
            *slot = parse_segment(segment).ok_or_else(|| VersionParserError::MalformedVersion {
                version: version.to_string(),
                segment: segment.to_string(),
            })?;
        }

        Ok(VersionTriple::from(parts))
    }
}

fn parse_segment(segment: &str) -> Option<u64> {
    // u64::from_str would also accept a leading '+'
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}
