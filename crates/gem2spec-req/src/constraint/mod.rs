//! Constraint types for declared requirements

#[allow(clippy::module_inception)]
mod constraint;
mod operator;
mod requirement_set;

pub use constraint::Constraint;
pub use operator::Operator;
pub use requirement_set::RequirementSet;
