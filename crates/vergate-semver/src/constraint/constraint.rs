//! Single version constraint implementation

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::{Bound, Operator};
use crate::verdict::{EvaluationError, ReasonCode, Verdict};
use crate::{Comparator, VersionParser, VersionTriple};

/// A parsed required version, e.g. `^1.2.0` or `>=3`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constraint {
    operator: Operator,
    version: VersionTriple,
}

impl Constraint {
    /// Create a new constraint
    pub fn new(operator: Operator, version: VersionTriple) -> Self {
        Constraint { operator, version }
    }

    /// Parse a raw required version.
    ///
    /// The numeric remainder is normalized before the prefix is looked up, so
    /// `"=1.x"` reports the malformed segment rather than the operator.
    pub fn parse(required: &str) -> Result<Self, EvaluationError> {
        let (prefix, remainder) = VersionParser::split_prefix(required);
        let version = VersionParser::to_triple(remainder)?;
        let operator = Operator::from_prefix(prefix)?;
        Ok(Self::new(operator, version))
    }

    /// Get the version
    pub fn version(&self) -> &VersionTriple {
        &self.version
    }

    /// Get the operator
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Exclusive upper bound for range operators, `None` for plain comparisons
    pub fn upper_bound(&self) -> Option<Bound> {
        match self.operator {
            Operator::Caret => Some(Bound::caret(&self.version)),
            Operator::Tilde => Some(Bound::tilde(&self.version)),
            _ => None,
        }
    }

    /// Check a normalized version against this constraint
    pub fn check(&self, current: &VersionTriple) -> Verdict {
        use ReasonCode::*;

        let cmp = Comparator::compare(current, &self.version);
        match self.operator {
            Operator::Exact => Verdict::from_check(cmp == Ordering::Equal, EqualRequiredMet, EqualRequiredFailed),
            Operator::GreaterThan => {
                Verdict::from_check(cmp == Ordering::Greater, GreaterRequiredMet, GreaterRequiredFailed)
            }
            Operator::GreaterThanOrEqual => {
                Verdict::from_check(cmp != Ordering::Less, GreaterRequiredMet, GreaterRequiredFailed)
            }
            Operator::LessThan => Verdict::from_check(cmp == Ordering::Less, LowerRequiredMet, LowerRequiredFailed),
            Operator::LessThanOrEqual => {
                Verdict::from_check(cmp != Ordering::Greater, LowerRequiredMet, LowerRequiredFailed)
            }
            Operator::Caret | Operator::Tilde => match cmp {
                Ordering::Less => Verdict::Unsatisfied(GreaterRequiredFailed),
                Ordering::Equal => Verdict::Satisfied(EqualRequiredMet),
                Ordering::Greater => {
                    let in_range = self
                        .upper_bound()
                        .is_some_and(|bound| bound.admits(current));
                    Verdict::from_check(in_range, InRangeMet, InRangeFailed)
                }
            },
        }
    }

    /// Check a version against this constraint, returning only pass/fail
    pub fn matches(&self, current: &VersionTriple) -> bool {
        self.check(current).is_success()
    }
}

impl FromStr for Constraint {
    type Err = EvaluationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operator, self.version)
    }
}
