//! Target dialects for RPM dependency clauses
//!
//! Each dialect maps one gem constraint to one or more clause strings. The
//! caller picks the dialect; nothing here inspects the host system.

mod name_mangling;
mod standard;

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::constraint::Operator;
use crate::error::{RequirementError, Result};
use crate::version::Version;

pub use name_mangling::NameMangling;
pub use standard::{Standard, PESSIMISTIC_LOWER_BOUND};

/// Maps a single constraint to target clause strings
pub trait TransformPolicy: fmt::Debug + Send + Sync {
    /// Produce the clauses for `name operator version`, in emission order.
    ///
    /// Dialects that do not encode anything into the name ignore `name`.
    fn transform(&self, name: &str, operator: Operator, version: &Version) -> Result<Vec<String>>;
}

/// Which dialect a conversion targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Dialect {
    /// Fedora and Red Hat style: a lower and an upper bound clause
    #[default]
    Standard,
    /// openSUSE style: the compatible series is encoded in the package name
    NameMangling,
}

impl Dialect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Standard => "standard",
            Dialect::NameMangling => "name-mangling",
        }
    }

    pub fn policy(&self) -> &'static dyn TransformPolicy {
        match self {
            Dialect::Standard => &Standard,
            Dialect::NameMangling => &NameMangling,
        }
    }

    /// True when the rendered clause already carries the dependency name
    pub fn embeds_name(&self) -> bool {
        matches!(self, Dialect::NameMangling)
    }
}

impl FromStr for Dialect {
    type Err = RequirementError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "standard" | "fedora" | "redhat" => Ok(Dialect::Standard),
            "name-mangling" | "opensuse" | "suse" => Ok(Dialect::NameMangling),
            _ => Err(RequirementError::UnknownDialect(s.to_string())),
        }
    }
}

impl TryFrom<String> for Dialect {
    type Error = RequirementError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialect_aliases() {
        assert_eq!("fedora".parse::<Dialect>().unwrap(), Dialect::Standard);
        assert_eq!("RedHat".parse::<Dialect>().unwrap(), Dialect::Standard);
        assert_eq!("opensuse".parse::<Dialect>().unwrap(), Dialect::NameMangling);
        assert_eq!("name-mangling".parse::<Dialect>().unwrap(), Dialect::NameMangling);
        assert_eq!(
            "debian".parse::<Dialect>(),
            Err(RequirementError::UnknownDialect("debian".to_string()))
        );
    }

    #[test]
    fn test_dialect_default() {
        assert_eq!(Dialect::default(), Dialect::Standard);
    }

    #[test]
    fn test_dialect_deserialize() {
        let d: Dialect = serde_json::from_str("\"suse\"").unwrap();
        assert_eq!(d, Dialect::NameMangling);
        assert!(serde_json::from_str::<Dialect>("\"gentoo\"").is_err());
    }

    #[test]
    fn test_dialect_policy_dispatch() {
        let version = Version::parse("1.0.0").unwrap();
        let standard = Dialect::Standard.policy().transform("foo", Operator::Pessimistic, &version).unwrap();
        let mangled = Dialect::NameMangling.policy().transform("foo", Operator::Pessimistic, &version).unwrap();
        assert_eq!(standard, vec!["=> 1.0.0", "< 1.1"]);
        assert_eq!(mangled, vec!["foo-1_0 >= 1.0.0"]);
    }
}
