//! Requirement operators

use std::fmt;
use std::str::FromStr;

use crate::error::RequirementError;

/// Comparison operators a gem may declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Equal (=)
    Equal,
    /// Not equal (!=)
    NotEqual,
    /// Greater than (>)
    GreaterThan,
    /// Less than (<)
    LessThan,
    /// Greater than or equal (>=)
    GreaterThanOrEqual,
    /// Less than or equal (<=)
    LessThanOrEqual,
    /// Pessimistic, compatible release (~>)
    Pessimistic,
}

impl Operator {
    /// Get the token as declared in a gemspec
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equal => "=",
            Operator::NotEqual => "!=",
            Operator::GreaterThan => ">",
            Operator::LessThan => "<",
            Operator::GreaterThanOrEqual => ">=",
            Operator::LessThanOrEqual => "<=",
            Operator::Pessimistic => "~>",
        }
    }

    pub fn is_pessimistic(&self) -> bool {
        matches!(self, Operator::Pessimistic)
    }

    /// Get all supported operators
    pub fn supported_operators() -> &'static [&'static str] {
        &["=", "!=", ">", "<", ">=", "<=", "~>"]
    }
}

impl FromStr for Operator {
    type Err = RequirementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "=" => Ok(Operator::Equal),
            "!=" => Ok(Operator::NotEqual),
            ">" => Ok(Operator::GreaterThan),
            "<" => Ok(Operator::LessThan),
            ">=" => Ok(Operator::GreaterThanOrEqual),
            "<=" => Ok(Operator::LessThanOrEqual),
            "~>" => Ok(Operator::Pessimistic),
            _ => Err(RequirementError::InvalidOperator(s.to_string())),
        }
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
    fn test_parse_supported_operators() {
        for token in Operator::supported_operators() {
            let op: Operator = token.parse().unwrap();
            assert_eq!(op.as_str(), *token);
        }
    }

    #[test]
    fn test_rejects_unknown_tokens() {
        for token in ["==", "<>", "=>", "~", "^", ""] {
            assert_eq!(
                token.parse::<Operator>(),
                Err(RequirementError::InvalidOperator(token.to_string()))
            );
        }
    }

    #[test]
    fn test_is_pessimistic() {
        assert!(Operator::Pessimistic.is_pessimistic());
        assert!(!Operator::GreaterThanOrEqual.is_pessimistic());
    }
}
