//! Lower and upper bound clauses, name untouched

use super::TransformPolicy;
use crate::constraint::Operator;
use crate::error::Result;
use crate::version::Version;

/// Lower bound token emitted for `~>`. This is literally `=>`, not `>=`.
pub const PESSIMISTIC_LOWER_BOUND: &str = "=>";

/// `~> 1.2.3` becomes `=> 1.2.3` and `< 1.3`; a zero version becomes an
/// empty clause meaning "any version".
#[derive(Debug, Clone, Copy, Default)]
pub struct Standard;

impl TransformPolicy for Standard {
    fn transform(&self, _name: &str, operator: Operator, version: &Version) -> Result<Vec<String>> {
        if operator.is_pessimistic() {
            let next = version.bump()?;
            return Ok(vec![
                format!("{} {}", PESSIMISTIC_LOWER_BOUND, version),
                format!("< {}", next),
            ]);
        }

        if version.is_zero() {
            return Ok(vec![String::new()]);
        }

        Ok(vec![format!("{} {}", operator, version)])
    }
}
