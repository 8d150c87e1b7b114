//! Semver facade providing high-level version operations

use crate::verdict::{EvaluationError, Verdict};
use crate::{Constraint, VersionParser, VersionTriple};

/// Main facade for version checks
pub struct Semver;

impl Semver {
    /// Evaluate a current version against a required version.
    ///
    /// The current version is normalized first, then the required version's
    /// numeric part, then its operator prefix; the first failure wins.
    pub fn evaluate(current: &str, required: &str) -> Verdict {
        let current = match VersionParser::to_triple(current) {
            Ok(v) => v,
            Err(e) => return Verdict::Invalid(EvaluationError::from(e)),
        };

        match Constraint::parse(required) {
            Ok(constraint) => constraint.check(&current),
            Err(e) => Verdict::Invalid(e),
        }
    }

    /// Check if a version satisfies a required version
    pub fn satisfies(current: &str, required: &str) -> bool {
        Self::evaluate(current, required).is_success()
    }

    /// Parse a required version once for reuse against many versions
    pub fn parse_constraint(required: &str) -> Result<Constraint, EvaluationError> {
        Constraint::parse(required)
    }

    /// Return all versions that satisfy the required version, in input order.
    /// Malformed versions are skipped.
    pub fn satisfied_by(versions: &[&str], required: &str) -> Vec<String> {
        let constraint = match Constraint::parse(required) {
            Ok(c) => c,
            Err(_) => return Vec::new(),
        };

        versions
            .iter()
            .filter(|v| {
                VersionParser::to_triple(v)
                    .map(|triple| constraint.matches(&triple))
                    .unwrap_or(false)
            })
            .map(|v| v.to_string())
            .collect()
    }

    /// Sort versions in ascending order, dropping malformed ones
    pub fn sort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order (reverse sort)
    pub fn rsort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, false)
    }

    fn usort(versions: &[&str], ascending: bool) -> Vec<String> {
        let mut normalized: Vec<(VersionTriple, usize)> = versions
            .iter()
            .enumerate()
            .filter_map(|(i, v)| Some((VersionParser::to_triple(v).ok()?, i)))
            .collect();

        // stable, so equal triples keep their input order
        normalized.sort_by(|(a, _), (b, _)| if ascending { a.cmp(b) } else { b.cmp(a) });

        normalized
            .into_iter()
            .map(|(_, i)| versions[i].to_string())
            .collect()
    }
}
