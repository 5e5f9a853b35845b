//! Versioned package names for compatible-release requirements

use super::TransformPolicy;
use crate::constraint::Operator;
use crate::error::{RequirementError, Result};
use crate::version::{Segment, Version};

/// Encodes the `~>` series into the dependency name.
///
/// `foo ~> 1.0.0` becomes `foo-1_0 >= 1.0.0`: the package `foo-1_0` only
/// ever ships the 1.0 series, so the upper bound is implied by the name.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameMangling;

impl NameMangling {
    /// Suffix naming the series, e.g. `1_0` for `~> 1.0.0`
    pub fn series_suffix(version: &Version) -> Result<String> {
        let mut segments = version.bump()?.segments().to_vec();

        match segments.last_mut() {
            Some(Segment::Numeric(n)) if *n > 0 => *n -= 1,
            _ => {
                return Err(RequirementError::invalid_version(
                    version.as_str(),
                    "bumped version has no positive last segment to decrement",
                ))
            }
        }

        Ok(segments
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join("_"))
    }
}

impl TransformPolicy for NameMangling {
    fn transform(&self, name: &str, operator: Operator, version: &Version) -> Result<Vec<String>> {
        if operator.is_pessimistic() {
            let suffix = Self::series_suffix(version)?;
            return Ok(vec![format!(
                "{}-{} {} {}",
                name,
                suffix,
                Operator::GreaterThanOrEqual,
                version
            )]);
        }

        if version.is_zero() {
            return Ok(vec![name.to_string()]);
        }

        Ok(vec![format!("{} {} {}", name, operator, version)])
    }
}
