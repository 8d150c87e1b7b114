//! Version constraint checking for dotted `major.minor.patch` versions
//!
//! A required version is an optional operator prefix (`>`, `<`, `>=`, `<=`,
//! `^`, `~`) followed by a dotted version. Checking a current version against
//! it yields a [`Verdict`] carrying a [`ReasonCode`]; nothing here logs or
//! panics on bad input.

pub mod constraint;
mod comparator;
mod semver;
mod verdict;
mod version_parser;

pub use comparator::Comparator;
pub use constraint::{Bound, Constraint, Operator, UnrecognizedOperatorError};
pub use semver::Semver;
pub use verdict::{EvaluationError, ReasonCode, Verdict};
pub use version_parser::{VersionParser, VersionParserError, VersionTriple};

/// Evaluate `current` against a possibly prefixed `required` version
pub fn evaluate(current: &str, required: &str) -> Verdict {
    Semver::evaluate(current, required)
}
