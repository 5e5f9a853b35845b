//! RubyGems requirement translation for RPM spec files
//!
//! This crate turns the version requirements a gem declares on its
//! dependencies into `Requires:` clauses for an RPM spec. RPM has no
//! compatible-release operator, so `~>` is emulated either with a pair of
//! bounds ([`Standard`]) or with a versioned package name ([`NameMangling`]).
//!
//! ```
//! use gem2spec_req::{translate, RequirementSet, Standard};
//!
//! let requirements = RequirementSet::parse(&["~> 1.2.3"]).unwrap();
//! let clauses = translate(&requirements, &Standard, "rubygem(foo)").unwrap();
//! assert_eq!(clauses, vec!["=> 1.2.3", "< 1.3"]);
//! ```

pub mod constraint;
mod error;
pub mod policy;
mod translator;
mod version;
mod wrap;

pub use constraint::{Constraint, Operator, RequirementSet};
pub use error::{RequirementError, Result};
pub use policy::{Dialect, NameMangling, Standard, TransformPolicy, PESSIMISTIC_LOWER_BOUND};
pub use translator::translate;
pub use version::{Segment, Version};
pub use wrap::{word_wrap, DEFAULT_LINE_WIDTH};
