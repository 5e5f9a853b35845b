//! Error type shared by parsing and translation

use thiserror::Error;

/// Errors raised while parsing or translating version requirements
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequirementError {
    #[error("Invalid version \"{version}\": {reason}")]
    InvalidVersion { version: String, reason: String },
    #[error("Invalid operator \"{0}\"")]
    InvalidOperator(String),
    #[error("Illformed requirement \"{0}\"")]
    InvalidRequirement(String),
    #[error("Unknown dialect \"{0}\"")]
    UnknownDialect(String),
}

impl RequirementError {
    pub(crate) fn invalid_version(version: impl Into<String>, reason: impl Into<String>) -> Self {
        RequirementError::InvalidVersion {
            version: version.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RequirementError>;
