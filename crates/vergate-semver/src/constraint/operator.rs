//! Operator types for version constraints

use std::fmt;
use thiserror::Error;

/// Comparison operators accepted as a required-version prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// No prefix: exact match
    Exact,
    /// Greater than (>)
    GreaterThan,
    /// Less than (<)
    LessThan,
    /// Greater than or equal (>=)
    GreaterThanOrEqual,
    /// Less than or equal (<=)
    LessThanOrEqual,
    /// Caret range (^): same leading nonzero component
    Caret,
    /// Tilde range (~): same major and minor
    Tilde,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unrecognized operator \"{0}\" in required version")]
pub struct UnrecognizedOperatorError(pub String);

impl Operator {
    /// Parse an operator from the leading non-digit prefix of a constraint
    pub fn from_prefix(prefix: &str) -> Result<Self, UnrecognizedOperatorError> {
        match prefix {
            "" => Ok(Operator::Exact),
            ">" => Ok(Operator::GreaterThan),
            "<" => Ok(Operator::LessThan),
            ">=" => Ok(Operator::GreaterThanOrEqual),
            "<=" => Ok(Operator::LessThanOrEqual),
            "^" => Ok(Operator::Caret),
            "~" => Ok(Operator::Tilde),
            _ => Err(UnrecognizedOperatorError(prefix.to_string())),
        }
    }

    /// Get the prefix this operator is written with
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Exact => "",
            Operator::GreaterThan => ">",
            Operator::LessThan => "<",
            Operator::GreaterThanOrEqual => ">=",
            Operator::LessThanOrEqual => "<=",
            Operator::Caret => "^",
            Operator::Tilde => "~",
        }
    }

    /// Get all supported prefixes
    pub fn supported_prefixes() -> &'static [&'static str] {
        &["", ">", "<", ">=", "<=", "^", "~"]
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_prefix() {
        for prefix in Operator::supported_prefixes() {
            let op = Operator::from_prefix(prefix).unwrap();
            assert_eq!(op.as_str(), *prefix);
        }
    }

    #[test]
    fn test_unrecognized() {
        for prefix in ["=", "==", "!=", "=>", "v", "> ", "^^", "~>"] {
            let err = Operator::from_prefix(prefix).unwrap_err();
            assert_eq!(err.0, prefix);
        }
        assert_eq!(
            Operator::from_prefix("=").unwrap_err().to_string(),
            "Unrecognized operator \"=\" in required version"
        );
    }
}
