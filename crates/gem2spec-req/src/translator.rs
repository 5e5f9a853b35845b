//! Apply a dialect to a whole requirement set

use crate::constraint::RequirementSet;
use crate::error::Result;
use crate::policy::TransformPolicy;

/// Translate every constraint in declaration order and flatten the clauses.
///
/// Empty clauses from "any version" constraints are kept; the renderer
/// decides what to do with them. The first invalid constraint aborts the
/// whole translation.
pub fn translate(requirements: &RequirementSet, policy: &dyn TransformPolicy, name: &str) -> Result<Vec<String>> {
    let mut clauses = Vec::with_capacity(requirements.len());

    for constraint in requirements {
        log::debug!("Translating {} {} with {:?}", name, constraint, policy);
        for clause in policy.transform(name, constraint.operator(), constraint.version())? {
            log::trace!("Emitting clause \"{}\"", clause);
            clauses.push(clause);
        }
    }

    Ok(clauses)
}
