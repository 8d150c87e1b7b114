//! Outcome of checking a version against a required constraint

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::constraint::UnrecognizedOperatorError;
use crate::VersionParserError;

/// Why a check passed or failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReasonCode {
    EqualRequiredMet,
    EqualRequiredFailed,
    GreaterRequiredMet,
    GreaterRequiredFailed,
    LowerRequiredMet,
    LowerRequiredFailed,
    InRangeMet,
    InRangeFailed,
    UnrecognizedOperator,
    MalformedVersion,
}

impl ReasonCode {
    /// Kebab-case code, as serialized
    pub fn as_str(&self) -> &'static str {
        match self {
            ReasonCode::EqualRequiredMet => "equal-required-met",
            ReasonCode::EqualRequiredFailed => "equal-required-failed",
            ReasonCode::GreaterRequiredMet => "greater-required-met",
            ReasonCode::GreaterRequiredFailed => "greater-required-failed",
            ReasonCode::LowerRequiredMet => "lower-required-met",
            ReasonCode::LowerRequiredFailed => "lower-required-failed",
            ReasonCode::InRangeMet => "in-range-met",
            ReasonCode::InRangeFailed => "in-range-failed",
            ReasonCode::UnrecognizedOperator => "unrecognized-operator",
            ReasonCode::MalformedVersion => "malformed-version",
        }
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Input that could not be evaluated at all
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    #[error(transparent)]
    MalformedVersion(#[from] VersionParserError),
    #[error(transparent)]
    UnrecognizedOperator(#[from] UnrecognizedOperatorError),
}

impl EvaluationError {
    /// Reason code reported for this error
    pub fn reason(&self) -> ReasonCode {
        match self {
            EvaluationError::MalformedVersion(_) => ReasonCode::MalformedVersion,
            EvaluationError::UnrecognizedOperator(_) => ReasonCode::UnrecognizedOperator,
        }
    }
}

/// Result of a single evaluation. Failing the constraint is a normal outcome,
/// distinct from input that could not be evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Satisfied(ReasonCode),
    Unsatisfied(ReasonCode),
    Invalid(EvaluationError),
}

impl Verdict {
    pub(crate) fn from_check(passed: bool, met: ReasonCode, failed: ReasonCode) -> Self {
        if passed {
            Verdict::Satisfied(met)
        } else {
            Verdict::Unsatisfied(failed)
        }
    }

    /// Reason code for any verdict, including invalid input
    pub fn reason(&self) -> ReasonCode {
        match self {
            Verdict::Satisfied(reason) | Verdict::Unsatisfied(reason) => *reason,
            Verdict::Invalid(err) => err.reason(),
        }
    }

    /// Check if the constraint was satisfied
    pub fn is_success(&self) -> bool {
        matches!(self, Verdict::Satisfied(_))
    }

    /// The evaluation error, for invalid input only
    pub fn error(&self) -> Option<&EvaluationError> {
        match self {
            Verdict::Invalid(err) => Some(err),
            _ => None,
        }
    }

    /// Short status label: `satisfied`, `unsatisfied` or `invalid`
    pub fn status(&self) -> &'static str {
        match self {
            Verdict::Satisfied(_) => "satisfied",
            Verdict::Unsatisfied(_) => "unsatisfied",
            Verdict::Invalid(_) => "invalid",
        }
    }
}

impl From<EvaluationError> for Verdict {
    fn from(err: EvaluationError) -> Self {
        Verdict::Invalid(err)
    }
}
