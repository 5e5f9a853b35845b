//! Ordered, conjunctive collection of constraints

use std::fmt;

use super::Constraint;
use crate::error::Result;

/// All constraints a gem declares on one dependency, in declaration order.
///
/// Every constraint must hold. Duplicates are kept as declared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequirementSet {
    constraints: Vec<Constraint>,
}

impl RequirementSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse each declaration in order, failing on the first bad one
    pub fn parse<S: AsRef<str>>(declarations: &[S]) -> Result<Self> {
        declarations
            .iter()
            .map(|d| Constraint::parse(d.as_ref()))
            .collect()
    }

    pub fn push(&mut self, constraint: Constraint) {
        self.constraints.push(constraint);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Constraint> {
        self.constraints.iter()
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }
}

impl FromIterator<Constraint> for RequirementSet {
    fn from_iter<I: IntoIterator<Item = Constraint>>(iter: I) -> Self {
        RequirementSet {
            constraints: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RequirementSet {
    type Item = &'a Constraint;
    type IntoIter = std::slice::Iter<'a, Constraint>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for RequirementSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.constraints.iter().map(|c| c.to_string()).collect();
        write!(f, "{}", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::Operator;

    #[test]
    fn test_parse_keeps_order_and_duplicates() {
        let set = RequirementSet::parse(&["> 1.2", "< 2.0", "> 1.2"]).unwrap();
        assert_eq!(set.len(), 3);
        let ops: Vec<Operator> = set.iter().map(|c| c.operator()).collect();
        assert_eq!(ops, vec![Operator::GreaterThan, Operator::LessThan, Operator::GreaterThan]);
        assert_eq!(set.to_string(), "> 1.2, < 2.0, > 1.2");
    }

    #[test]
    fn test_parse_empty() {
        let set = RequirementSet::parse::<&str>(&[]).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_parse_stops_at_first_error() {
        assert!(RequirementSet::parse(&["> 1.0", "bogus", "< 2"]).is_err());
    }

    #[test]
    fn test_push() {
        let mut set = RequirementSet::new();
        set.push(Constraint::parse("~> 3.1").unwrap());
        assert_eq!(set.len(), 1);
        assert!(!set.is_empty());
    }
}
