//! Translate command - print Requires lines for a gem dependency.

use anyhow::{Context, Result};
use clap::Args;
use gem2spec_req::{translate, Dialect, RequirementSet, TransformPolicy};

use crate::config::Gem2SpecConfig;

#[derive(Args, Debug)]
pub struct TranslateArgs {
    /// Dependency name as it appears in the spec file
    #[arg(short, long)]
    pub name: String,

    /// Requirement declarations, e.g. "~> 1.2" or ">= 0"
    #[arg(value_name = "REQUIREMENTS", required = true)]
    pub requirements: Vec<String>,

    /// Target dialect (standard, fedora, opensuse)
    #[arg(short, long)]
    pub dialect: Option<Dialect>,

    /// Skip invalid requirements with a warning instead of failing
    #[arg(long)]
    pub skip_invalid: bool,
}

pub fn execute(args: TranslateArgs, config: &Gem2SpecConfig) -> Result<i32> {
    let dialect = args.dialect.or(config.translate.dialect).unwrap_or_default();
    let skip_invalid = args.skip_invalid || config.translate.skip_invalid.unwrap_or(false);
    let name = format!(
        "{}{}",
        config.translate.name_prefix.as_deref().unwrap_or(""),
        args.name
    );

    log::debug!("Using {} dialect for {}", dialect, name);

    let clauses = collect_clauses(&args.requirements, dialect.policy(), &name, skip_invalid)?;
    for clause in &clauses {
        println!("{}", render_clause(dialect, &name, clause));
    }

    Ok(0)
}

/// Translate the declarations, either failing on the first bad one or
/// dropping each bad one with a warning.
pub fn collect_clauses(
    declarations: &[String],
    policy: &dyn TransformPolicy,
    name: &str,
    skip_invalid: bool,
) -> Result<Vec<String>> {
    if !skip_invalid {
        let requirements = RequirementSet::parse(declarations)
            .with_context(|| format!("Failed to parse requirements for {}", name))?;
        return translate(&requirements, policy, name)
            .with_context(|| format!("Failed to translate requirements for {}", name));
    }

    let mut clauses = Vec::new();
    for declaration in declarations {
        let translated = RequirementSet::parse(std::slice::from_ref(declaration))
            .and_then(|single| translate(&single, policy, name));
        match translated {
            Ok(mut c) => clauses.append(&mut c),
            Err(e) => log::warn!("Skipping requirement \"{}\" of {}: {}", declaration, name, e),
        }
    }
    Ok(clauses)
}

/// Render one clause as a spec `Requires:` line
pub fn render_clause(dialect: Dialect, name: &str, clause: &str) -> String {
    if clause.is_empty() {
        format!("Requires: {}", name)
    } else if dialect.embeds_name() {
        format!("Requires: {}", clause)
    } else {
        format!("Requires: {} {}", name, clause)
    }
}
