//! Single `operator version` requirement

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use super::Operator;
use crate::error::{RequirementError, Result};
use crate::version::Version;

lazy_static! {
    // Two-character operators come first so `>=` never splits into `>` and `=1.0`
    static ref REQUIREMENT_RE: Regex =
        Regex::new(r"^\s*(~>|>=|<=|!=|=|>|<)?\s*([0-9][0-9A-Za-z.]*)\s*$").unwrap();
}

/// One declared requirement, such as `~> 1.2`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    operator: Operator,
    version: Version,
}

impl Constraint {
    pub fn new(operator: Operator, version: Version) -> Self {
        Constraint { operator, version }
    }

    /// Parse a declaration like `"~> 1.2"`, `">=0.9"` or `"1.0"`.
    ///
    /// A bare version means `=`.
    pub fn parse(input: &str) -> Result<Self> {
        let caps = REQUIREMENT_RE
            .captures(input)
            .ok_or_else(|| RequirementError::InvalidRequirement(input.to_string()))?;

        let operator = match caps.get(1) {
            Some(m) => m.as_str().parse()?,
            None => Operator::Equal,
        };
        let version = Version::parse(&caps[2])?;

        Ok(Constraint { operator, version })
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn version(&self) -> &Version {
        &self.version
    }
}

impl FromStr for Constraint {
    type Err = RequirementError;

    fn from_str(s: &str) -> Result<Self> {
        Constraint::parse(s)
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.operator, self.version)
    }
}
